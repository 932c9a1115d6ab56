//! ML-KEM key encapsulation: key generation, encapsulation, decapsulation.
//!
//! The `_derand` variants take explicit randomness and are what the
//! known-answer tests drive; the plain variants draw from a caller-provided
//! CSPRNG. Decapsulation never fails: a ciphertext that does not survive the
//! re-encryption check yields the rejection secret `J(z || c)` through a
//! constant-time select.

use rand_core::CryptoRng;

use crate::ct;
use crate::hash;
use crate::params::{KeyBuffer, MlKemParams, SSBYTES, SYMBYTES};
use crate::pke;
use crate::types::{Ciphertext, PublicKey, SecretKey, SharedSecret};

/// Deterministic key generation from 64 bytes of randomness `d || z`: `d`
/// seeds the inner keypair, `z` is the implicit-rejection secret.
#[must_use]
pub fn keypair_derand<P: MlKemParams>(coins: &[u8; 2 * SYMBYTES]) -> (PublicKey<P>, SecretKey<P>) {
    let mut pk_arr = P::PkArray::zeroed();
    let mut sk_arr = P::SkArray::zeroed();
    let pk = pk_arr.bytes_mut();
    let sk = sk_arr.bytes_mut();

    let d: &[u8; SYMBYTES] = coins[..SYMBYTES]
        .try_into()
        .expect("infallible: 64-byte array split");
    pke::keygen_derand::<P>(
        &mut pk[..P::INDCPA_PK_BYTES],
        &mut sk[..P::INDCPA_SK_BYTES],
        d,
    );

    // sk = inner sk || pk || H(pk) || z, at fixed offsets.
    sk[P::INDCPA_SK_BYTES..P::INDCPA_SK_BYTES + P::PK_BYTES].copy_from_slice(&pk[..P::PK_BYTES]);
    let h_pk = hash::hash_h(&pk[..P::PK_BYTES]);
    sk[P::SK_BYTES - 2 * SYMBYTES..P::SK_BYTES - SYMBYTES].copy_from_slice(&h_pk);
    sk[P::SK_BYTES - SYMBYTES..P::SK_BYTES].copy_from_slice(&coins[SYMBYTES..]);

    (PublicKey::from_bytes(pk_arr), SecretKey::from_bytes(sk_arr))
}

/// Key generation with caller-provided randomness.
pub fn keypair<P: MlKemParams>(rng: &mut impl CryptoRng) -> (PublicKey<P>, SecretKey<P>) {
    let mut coins = [0u8; 2 * SYMBYTES];
    rng.fill_bytes(&mut coins);
    keypair_derand::<P>(&coins)
}

/// Deterministic encapsulation with an explicit 32-byte message seed.
#[must_use]
pub fn encapsulate_derand<P: MlKemParams>(
    pk: &PublicKey<P>, m: &[u8; SYMBYTES],
) -> (Ciphertext<P>, SharedSecret) {
    // (K, r) = G(m || H(pk))
    let mut buf = [0u8; 2 * SYMBYTES];
    buf[..SYMBYTES].copy_from_slice(m);
    buf[SYMBYTES..].copy_from_slice(&hash::hash_h(pk.as_bytes()));
    let kr = hash::hash_g(&buf);

    let mut ct_arr = P::CtArray::zeroed();
    let r: &[u8; SYMBYTES] = kr[SYMBYTES..]
        .try_into()
        .expect("infallible: 64-byte hash split");
    pke::encrypt::<P>(ct_arr.bytes_mut(), m, pk.as_bytes(), r);

    let mut ss = [0u8; SSBYTES];
    ss.copy_from_slice(&kr[..SYMBYTES]);

    (Ciphertext::from_bytes(ct_arr), SharedSecret::from_bytes(ss))
}

/// Encapsulation with caller-provided randomness.
pub fn encapsulate<P: MlKemParams>(
    pk: &PublicKey<P>, rng: &mut impl CryptoRng,
) -> (Ciphertext<P>, SharedSecret) {
    let mut m = [0u8; SYMBYTES];
    rng.fill_bytes(&mut m);
    encapsulate_derand::<P>(pk, &m)
}

/// Decapsulation with implicit rejection.
///
/// Always returns a 32-byte secret; the caller cannot tell a rejected
/// ciphertext from a genuine one by timing or return shape.
#[must_use]
pub fn decapsulate<P: MlKemParams>(ct: &Ciphertext<P>, sk: &SecretKey<P>) -> SharedSecret {
    let sk_bytes = sk.as_bytes();
    let ct_bytes = ct.as_bytes();

    // sk = (inner sk || pk || H(pk) || z)
    let inner_sk = &sk_bytes[..P::INDCPA_SK_BYTES];
    let pk_bytes = &sk_bytes[P::INDCPA_SK_BYTES..P::INDCPA_SK_BYTES + P::PK_BYTES];
    let h_pk = &sk_bytes[P::SK_BYTES - 2 * SYMBYTES..P::SK_BYTES - SYMBYTES];
    let z: &[u8; SYMBYTES] = sk_bytes[P::SK_BYTES - SYMBYTES..P::SK_BYTES]
        .try_into()
        .expect("infallible: key layout fixes the offset");

    let mut m_prime = [0u8; SYMBYTES];
    pke::decrypt::<P>(&mut m_prime, ct_bytes, inner_sk);

    // (K', r') = G(m' || H(pk))
    let mut buf = [0u8; 2 * SYMBYTES];
    buf[..SYMBYTES].copy_from_slice(&m_prime);
    buf[SYMBYTES..].copy_from_slice(h_pk);
    let kr = hash::hash_g(&buf);
    let r_prime: &[u8; SYMBYTES] = kr[SYMBYTES..]
        .try_into()
        .expect("infallible: 64-byte hash split");

    // Re-encrypt into a stack buffer sized for the largest parameter set.
    const MAX_CT: usize = 1568;
    let mut reencrypted = [0u8; MAX_CT];
    pke::encrypt::<P>(&mut reencrypted[..P::CT_BYTES], &m_prime, pk_bytes, r_prime);

    let reject = ct::ne_mask(ct_bytes, &reencrypted[..P::CT_BYTES]);

    // Start from the rejection secret, overwrite with K' only on a match.
    let mut ss = hash::hash_j(z, ct_bytes);
    ct::masked_assign(&mut ss, &kr[..SYMBYTES], !reject);

    SharedSecret::from_bytes(ss)
}
