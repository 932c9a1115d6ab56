//! ML-KEM parameter definitions.
//!
//! The sealed [`MlKemParams`] trait carries every per-variant constant at the
//! type level; the three marker types select between them. [`KemParams`] is
//! the runtime counterpart used by the byte-level engine for validation and
//! dispatch.

use zeroize::Zeroize;

/// Polynomial ring degree.
pub const N: usize = 256;

/// Field modulus.
pub const Q: u16 = 3329;

/// Size in bytes of hashes and seeds.
pub const SYMBYTES: usize = 32;

/// Size in bytes of a shared secret.
pub const SSBYTES: usize = 32;

/// Size in bytes of a serialised polynomial (12 bits x 256 / 8).
pub const POLYBYTES: usize = 384;

/// Backing storage for keys and ciphertexts: a fixed-size byte array behind
/// a narrow accessor surface.
pub trait KeyBuffer: Clone + Zeroize + Send + Sync + 'static {
    /// Buffer length in bytes.
    const SIZE: usize;

    /// A buffer of `SIZE` zero bytes.
    fn zeroed() -> Self;

    /// Read access to the raw bytes.
    fn bytes(&self) -> &[u8];

    /// Write access to the raw bytes.
    fn bytes_mut(&mut self) -> &mut [u8];
}

impl<const SIZE: usize> KeyBuffer for [u8; SIZE] {
    const SIZE: usize = SIZE;

    #[inline]
    fn zeroed() -> Self {
        [0; SIZE]
    }

    #[inline]
    fn bytes(&self) -> &[u8] {
        self
    }

    #[inline]
    fn bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

mod seal {
    /// Unnameable outside this crate; every [`MlKemParams`](super::MlKemParams)
    /// impl must produce one.
    pub struct Token;
}

/// Compile-time description of one ML-KEM parameter set.
///
/// Implemented only by the three marker types in this module; the hidden
/// associated constant keeps downstream crates from adding impls.
pub trait MlKemParams: 'static {
    #[doc(hidden)]
    const SEAL: seal::Token;

    /// Canonical FIPS 203 name of the parameter set.
    const NAME: &'static str;

    /// Module rank k.
    const K: usize;
    /// CBD width for the secret and error vectors.
    const ETA1: usize;
    /// CBD width for the encryption noise.
    const ETA2: usize;
    /// Compression width for the ciphertext vector component.
    const D_U: u32;
    /// Compression width for the ciphertext scalar component.
    const D_V: u32;

    const POLYVEC_BYTES: usize;
    const POLY_COMPRESSED_BYTES: usize;
    const POLYVEC_COMPRESSED_BYTES: usize;
    const INDCPA_PK_BYTES: usize;
    const INDCPA_SK_BYTES: usize;
    const INDCPA_BYTES: usize;
    const PK_BYTES: usize;
    const SK_BYTES: usize;
    const CT_BYTES: usize;

    type PkArray: KeyBuffer;
    type SkArray: KeyBuffer;
    type CtArray: KeyBuffer;
}

macro_rules! impl_mlkem_params {
    (
        $name:ident, NAME = $fips_name:literal, K = $K:literal,
        ETA1 = $eta1:literal, ETA2 = $eta2:literal,
        D_U = $du:literal, D_V = $dv:literal,
        POLYVEC_BYTES = $pvb:literal,
        POLY_COMPRESSED_BYTES = $pcb:literal,
        POLYVEC_COMPRESSED_BYTES = $pvcb:literal,
        PK_BYTES = $pkb:literal,
        SK_BYTES = $skb:literal,
        CT_BYTES = $ctb:literal
    ) => {
        impl MlKemParams for $name {
            const SEAL: seal::Token = seal::Token;

            const NAME: &'static str = $fips_name;

            const K: usize = $K;
            const ETA1: usize = $eta1;
            const ETA2: usize = $eta2;
            const D_U: u32 = $du;
            const D_V: u32 = $dv;

            const POLYVEC_BYTES: usize = $pvb;
            const POLY_COMPRESSED_BYTES: usize = $pcb;
            const POLYVEC_COMPRESSED_BYTES: usize = $pvcb;
            const INDCPA_PK_BYTES: usize = $pkb;
            const INDCPA_SK_BYTES: usize = $pvb;
            const INDCPA_BYTES: usize = $ctb;
            const PK_BYTES: usize = $pkb;
            const SK_BYTES: usize = $skb;
            const CT_BYTES: usize = $ctb;

            type PkArray = [u8; $pkb];
            type SkArray = [u8; $skb];
            type CtArray = [u8; $ctb];
        }
    };
}

/// ML-KEM-512 (k = 2, NIST security level 1).
#[derive(Debug, Clone, Copy)]
pub struct MlKem512;

/// ML-KEM-768 (k = 3, NIST security level 3).
#[derive(Debug, Clone, Copy)]
pub struct MlKem768;

/// ML-KEM-1024 (k = 4, NIST security level 5).
#[derive(Debug, Clone, Copy)]
pub struct MlKem1024;

impl_mlkem_params!(
    MlKem512,
    NAME = "ML-KEM-512",
    K = 2,
    ETA1 = 3,
    ETA2 = 2,
    D_U = 10,
    D_V = 4,
    POLYVEC_BYTES = 768,
    POLY_COMPRESSED_BYTES = 128,
    POLYVEC_COMPRESSED_BYTES = 640,
    PK_BYTES = 800,
    SK_BYTES = 1632,
    CT_BYTES = 768
);

impl_mlkem_params!(
    MlKem768,
    NAME = "ML-KEM-768",
    K = 3,
    ETA1 = 2,
    ETA2 = 2,
    D_U = 10,
    D_V = 4,
    POLYVEC_BYTES = 1152,
    POLY_COMPRESSED_BYTES = 128,
    POLYVEC_COMPRESSED_BYTES = 960,
    PK_BYTES = 1184,
    SK_BYTES = 2400,
    CT_BYTES = 1088
);

impl_mlkem_params!(
    MlKem1024,
    NAME = "ML-KEM-1024",
    K = 4,
    ETA1 = 2,
    ETA2 = 2,
    D_U = 11,
    D_V = 5,
    POLYVEC_BYTES = 1536,
    POLY_COMPRESSED_BYTES = 160,
    POLYVEC_COMPRESSED_BYTES = 1408,
    PK_BYTES = 1568,
    SK_BYTES = 3168,
    CT_BYTES = 1568
);

const _: () = {
    macro_rules! check_params {
        ($t:ty) => {
            assert!(<$t>::POLYVEC_BYTES == <$t>::K * POLYBYTES);
            assert!(<$t>::POLY_COMPRESSED_BYTES == N * <$t>::D_V as usize / 8);
            assert!(
                <$t>::POLYVEC_COMPRESSED_BYTES == <$t>::K * N * <$t>::D_U as usize / 8
            );
            assert!(<$t>::INDCPA_PK_BYTES == <$t>::POLYVEC_BYTES + SYMBYTES);
            assert!(<$t>::INDCPA_SK_BYTES == <$t>::POLYVEC_BYTES);
            assert!(
                <$t>::INDCPA_BYTES
                    == <$t>::POLYVEC_COMPRESSED_BYTES + <$t>::POLY_COMPRESSED_BYTES
            );
            assert!(<$t>::PK_BYTES == <$t>::INDCPA_PK_BYTES);
            assert!(<$t>::SK_BYTES == <$t>::INDCPA_SK_BYTES + <$t>::PK_BYTES + 2 * SYMBYTES);
            assert!(<$t>::CT_BYTES == <$t>::INDCPA_BYTES);
        };
    }
    check_params!(MlKem512);
    check_params!(MlKem768);
    check_params!(MlKem1024);
};

/// Runtime view of a parameter set: the configuration record consulted by the
/// byte-level [`engine`](crate::engine) before any cryptographic work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KemParams {
    pub k: usize,
    pub eta1: usize,
    pub eta2: usize,
    pub d_u: u32,
    pub d_v: u32,
    pub ek_bytes: usize,
    pub dk_bytes: usize,
    pub ct_bytes: usize,
}

const fn kem_params<P: MlKemParams>() -> KemParams {
    KemParams {
        k: P::K,
        eta1: P::ETA1,
        eta2: P::ETA2,
        d_u: P::D_U,
        d_v: P::D_V,
        ek_bytes: P::PK_BYTES,
        dk_bytes: P::SK_BYTES,
        ct_bytes: P::CT_BYTES,
    }
}

pub const MLKEM512_PARAMS: KemParams = kem_params::<MlKem512>();
pub const MLKEM768_PARAMS: KemParams = kem_params::<MlKem768>();
pub const MLKEM1024_PARAMS: KemParams = kem_params::<MlKem1024>();
