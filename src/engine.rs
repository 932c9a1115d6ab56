//! Byte-level KEM engine with runtime parameter-set selection.
//!
//! [`MlKem`] is an immutable value holding only the selected variant; it can
//! be shared freely across threads, and every call owns its own buffers.
//! Inputs are validated against the variant's [`KemParams`] record before any
//! cryptographic work happens; a mismatched ciphertext during decapsulation
//! is *not* an error.

use crate::error::{KemError, Result};
use crate::kem;
use crate::params::{
    KemParams, KeyBuffer, MlKem512, MlKem768, MlKem1024, MlKemParams, SYMBYTES,
    MLKEM512_PARAMS, MLKEM768_PARAMS, MLKEM1024_PARAMS,
};
use crate::types::{Ciphertext, PublicKey, SecretKey, SharedSecret};

/// The three approved ML-KEM parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    MlKem512,
    MlKem768,
    MlKem1024,
}

impl Variant {
    /// Resolves a canonical FIPS 203 name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "ML-KEM-512" => Ok(Self::MlKem512),
            "ML-KEM-768" => Ok(Self::MlKem768),
            "ML-KEM-1024" => Ok(Self::MlKem1024),
            _ => Err(KemError::InvalidParameter {
                name: name.to_string(),
            }),
        }
    }

    /// The canonical name of this variant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MlKem512 => MlKem512::NAME,
            Self::MlKem768 => MlKem768::NAME,
            Self::MlKem1024 => MlKem1024::NAME,
        }
    }

    /// The parameter record for this variant.
    #[must_use]
    pub const fn params(self) -> &'static KemParams {
        match self {
            Self::MlKem512 => &MLKEM512_PARAMS,
            Self::MlKem768 => &MLKEM768_PARAMS,
            Self::MlKem1024 => &MLKEM1024_PARAMS,
        }
    }
}

impl core::str::FromStr for Variant {
    type Err = KemError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A KEM engine bound to one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlKem {
    variant: Variant,
}

impl MlKem {
    /// Builds an engine from a variant name.
    pub fn new(name: &str) -> Result<Self> {
        Variant::from_name(name).map(Self::with_variant)
    }

    /// Builds an engine for an already-resolved variant.
    #[must_use]
    pub const fn with_variant(variant: Variant) -> Self {
        Self { variant }
    }

    /// The variant this engine operates with.
    #[must_use]
    pub const fn variant(self) -> Variant {
        self.variant
    }

    /// Generates a fresh keypair from 64 bytes of system entropy.
    ///
    /// Returns `(ek, dk)` with the FIPS 203 byte layouts: `384k + 32` and
    /// `768k + 96` bytes respectively.
    pub fn keygen(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        let mut coins = [0u8; 2 * SYMBYTES];
        getrandom::fill(&mut coins).map_err(|_| KemError::EntropyFailure)?;

        Ok(match self.variant {
            Variant::MlKem512 => keygen_bytes::<MlKem512>(&coins),
            Variant::MlKem768 => keygen_bytes::<MlKem768>(&coins),
            Variant::MlKem1024 => keygen_bytes::<MlKem1024>(&coins),
        })
    }

    /// Derives a shared secret and a ciphertext addressed to `ek`, drawing 32
    /// bytes of system entropy.
    pub fn encaps(&self, ek: &[u8]) -> Result<(SharedSecret, Vec<u8>)> {
        let expected = self.variant.params().ek_bytes;
        if ek.len() != expected {
            return Err(KemError::MalformedInput {
                context: "encapsulation key",
                expected,
                actual: ek.len(),
            });
        }

        let mut m = [0u8; SYMBYTES];
        getrandom::fill(&mut m).map_err(|_| KemError::EntropyFailure)?;

        Ok(match self.variant {
            Variant::MlKem512 => encaps_bytes::<MlKem512>(ek, &m),
            Variant::MlKem768 => encaps_bytes::<MlKem768>(ek, &m),
            Variant::MlKem1024 => encaps_bytes::<MlKem1024>(ek, &m),
        })
    }

    /// Recovers the shared secret from `ct` under `dk`.
    ///
    /// A ciphertext that fails the re-encryption check still yields an `Ok`
    /// 32-byte secret, derived from the rejection key; only wrong *lengths*
    /// are reported as errors.
    pub fn decaps(&self, dk: &[u8], ct: &[u8]) -> Result<SharedSecret> {
        let params = self.variant.params();
        if dk.len() != params.dk_bytes {
            return Err(KemError::MalformedInput {
                context: "decapsulation key",
                expected: params.dk_bytes,
                actual: dk.len(),
            });
        }
        if ct.len() != params.ct_bytes {
            return Err(KemError::MalformedInput {
                context: "ciphertext",
                expected: params.ct_bytes,
                actual: ct.len(),
            });
        }

        Ok(match self.variant {
            Variant::MlKem512 => decaps_bytes::<MlKem512>(dk, ct),
            Variant::MlKem768 => decaps_bytes::<MlKem768>(dk, ct),
            Variant::MlKem1024 => decaps_bytes::<MlKem1024>(dk, ct),
        })
    }
}

fn keygen_bytes<P: MlKemParams>(coins: &[u8; 2 * SYMBYTES]) -> (Vec<u8>, Vec<u8>) {
    let (pk, sk) = kem::keypair_derand::<P>(coins);
    (pk.as_bytes().to_vec(), sk.as_bytes().to_vec())
}

fn encaps_bytes<P: MlKemParams>(ek: &[u8], m: &[u8; SYMBYTES]) -> (SharedSecret, Vec<u8>) {
    let mut arr = P::PkArray::zeroed();
    arr.bytes_mut().copy_from_slice(ek);
    let pk = PublicKey::<P>::from_bytes(arr);

    let (ct, ss) = kem::encapsulate_derand(&pk, m);
    (ss, ct.as_bytes().to_vec())
}

fn decaps_bytes<P: MlKemParams>(dk: &[u8], ct: &[u8]) -> SharedSecret {
    let mut sk_arr = P::SkArray::zeroed();
    sk_arr.bytes_mut().copy_from_slice(dk);
    let sk = SecretKey::<P>::from_bytes(sk_arr);

    let mut ct_arr = P::CtArray::zeroed();
    ct_arr.bytes_mut().copy_from_slice(ct);
    let ct = Ciphertext::<P>::from_bytes(ct_arr);

    kem::decapsulate(&ct, &sk)
}
