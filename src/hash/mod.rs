//! Symmetric-primitive adapters over the SHA-3 family.
//!
//! Every Keccak use in the crate goes through this module:
//!
//! | Role    | Primitive | Function   |
//! |---------|-----------|------------|
//! | **H**   | SHA3-256  | [`hash_h`] |
//! | **G**   | SHA3-512  | [`hash_g`] |
//! | **J**   | SHAKE-256 | [`hash_j`] |
//! | **PRF** | SHAKE-256 | [`prf`]    |
//! | **XOF** | SHAKE-128 | [`xof`]    |

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest, Sha3_256, Sha3_512, Shake128, Shake256};

use crate::params::{SSBYTES, SYMBYTES};

/// H(x) = SHA3-256(x), 32 bytes.
#[inline]
pub fn hash_h(input: &[u8]) -> [u8; SYMBYTES] {
    let mut h = Sha3_256::new();
    Digest::update(&mut h, input);
    h.finalize().into()
}

/// G(x) = SHA3-512(x), 64 bytes, consumed as two 32-byte halves.
#[inline]
pub fn hash_g(input: &[u8]) -> [u8; 2 * SYMBYTES] {
    let mut h = Sha3_512::new();
    Digest::update(&mut h, input);
    h.finalize().into()
}

/// J(z ‖ c) = SHAKE-256(z ‖ c, 32) -- the implicit-rejection key derived
/// from the long-term secret `z` and the received ciphertext.
pub fn hash_j(z: &[u8; SYMBYTES], ct: &[u8]) -> [u8; SSBYTES] {
    let mut h = Shake256::default();
    Update::update(&mut h, z);
    Update::update(&mut h, ct);
    let mut out = [0u8; SSBYTES];
    h.finalize_xof().read(&mut out);
    out
}

/// PRF(s, n) = SHAKE-256(s ‖ n) squeezed to fill `output` (64·η bytes for
/// noise sampling). `n` is a single-byte domain separator.
pub fn prf(seed: &[u8; SYMBYTES], nonce: u8, output: &mut [u8]) {
    let mut h = Shake256::default();
    Update::update(&mut h, seed);
    Update::update(&mut h, &[nonce]);
    h.finalize_xof().read(output);
}

/// SHAKE-128 reader over `seed ‖ x ‖ y`, streamed by the uniform sampler.
pub fn xof(seed: &[u8; SYMBYTES], x: u8, y: u8) -> impl XofReader {
    let mut h = Shake128::default();
    Update::update(&mut h, seed);
    Update::update(&mut h, &[x, y]);
    h.finalize_xof()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h_matches_sha3_256_empty() {
        let expected =
            hex::decode("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a")
                .unwrap();
        assert_eq!(hash_h(b"").as_slice(), expected.as_slice());
    }

    #[test]
    fn g_matches_sha3_512_empty() {
        let expected = hex::decode(
            "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6\
             15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
        )
        .unwrap();
        assert_eq!(hash_g(b"").as_slice(), expected.as_slice());
    }

    #[test]
    fn prf_nonce_separates_domains() {
        let seed = [7u8; SYMBYTES];
        let mut a = [0u8; 128];
        let mut b = [0u8; 128];
        prf(&seed, 0, &mut a);
        prf(&seed, 1, &mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn j_depends_on_ciphertext() {
        let z = [3u8; SYMBYTES];
        assert_ne!(hash_j(&z, &[0u8; 16]), hash_j(&z, &[1u8; 16]));
    }

    #[test]
    fn xof_is_deterministic() {
        let seed = [9u8; SYMBYTES];
        let mut a = [0u8; 64];
        let mut b = [0u8; 64];
        xof(&seed, 1, 2).read(&mut a);
        xof(&seed, 1, 2).read(&mut b);
        assert_eq!(a, b);
        xof(&seed, 2, 1).read(&mut b);
        assert_ne!(a, b);
    }
}
