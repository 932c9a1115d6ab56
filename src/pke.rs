//! The inner IND-CPA public-key encryption scheme.
//!
//! Not CCA-secure on its own; the [`kem`](crate::kem) layer adds the
//! re-encryption check. All entry points dispatch on `P::K` into
//! const-generic bodies so the vector rank is known at compile time.

use crate::hash;
use crate::math::poly::{NttPolynomial, Polynomial};
use crate::math::polyvec::{NttPolyVec, PolyVec};
use crate::params::{MlKemParams, SYMBYTES};

/// Samples the k x k public matrix from `seed` via SHAKE-128. The seed of
/// entry (i, j) absorbs the column byte first; `transposed` swaps the pair,
/// which is how encryption obtains the transpose without materialising it.
fn sample_matrix<const K: usize>(seed: &[u8; SYMBYTES], transposed: bool) -> [NttPolyVec<K>; K] {
    let mut a: [NttPolyVec<K>; K] = core::array::from_fn(|_| NttPolyVec::zero());
    for (i, row) in a.iter_mut().enumerate() {
        for (j, poly) in row.polys_mut().iter_mut().enumerate() {
            let (x, y) = if transposed {
                (i as u8, j as u8)
            } else {
                (j as u8, i as u8)
            };
            let mut xof = hash::xof(seed, x, y);
            *poly = NttPolynomial::sample_uniform(&mut xof);
        }
    }
    a
}

/// Samples a noise vector, one CBD polynomial per component, advancing the
/// shared PRF nonce.
fn sample_noise<const K: usize>(eta: usize, seed: &[u8; SYMBYTES], nonce: &mut u8) -> PolyVec<K> {
    let mut v = PolyVec::zero();
    let mut buf = [0u8; 192]; // largest PRF output: 64 * eta for eta = 3
    for p in v.polys_mut() {
        hash::prf(seed, *nonce, &mut buf[..64 * eta]);
        *p = Polynomial::sample_cbd(eta, &buf[..64 * eta]);
        *nonce += 1;
    }
    v
}

// -- key generation ----------------------------------------------------------

pub(crate) fn keygen_derand<P: MlKemParams>(
    pk_bytes: &mut [u8], sk_bytes: &mut [u8], d: &[u8; SYMBYTES],
) {
    match P::K {
        2 => keygen_inner::<P, 2>(pk_bytes, sk_bytes, d),
        3 => keygen_inner::<P, 3>(pk_bytes, sk_bytes, d),
        4 => keygen_inner::<P, 4>(pk_bytes, sk_bytes, d),
        _ => unreachable!(),
    }
}

fn keygen_inner<P: MlKemParams, const K: usize>(
    pk_bytes: &mut [u8], sk_bytes: &mut [u8], d: &[u8; SYMBYTES],
) {
    // (rho, sigma) = G(d || k); the rank byte separates the parameter sets.
    let mut g_input = [0u8; SYMBYTES + 1];
    g_input[..SYMBYTES].copy_from_slice(d);
    g_input[SYMBYTES] = K as u8;
    let g = hash::hash_g(&g_input);
    let rho: [u8; SYMBYTES] = g[..SYMBYTES]
        .try_into()
        .expect("infallible: 64-byte hash split");
    let sigma: [u8; SYMBYTES] = g[SYMBYTES..]
        .try_into()
        .expect("infallible: 64-byte hash split");

    let a = sample_matrix::<K>(&rho, false);

    let mut nonce = 0u8;
    let s = sample_noise::<K>(P::ETA1, &sigma, &mut nonce);
    let e = sample_noise::<K>(P::ETA1, &sigma, &mut nonce);
    let s_hat = s.ntt();
    let e_hat = e.ntt();

    // t = A * s + e, entirely in the residue domain.
    let mut t_hat = NttPolyVec::<K>::zero();
    for ((t, row), err) in t_hat
        .polys_mut()
        .iter_mut()
        .zip(a.iter())
        .zip(e_hat.polys())
    {
        *t = row.inner_product(&s_hat);
        *t += err;
    }

    t_hat.to_bytes(&mut pk_bytes[..P::POLYVEC_BYTES]);
    pk_bytes[P::POLYVEC_BYTES..P::INDCPA_PK_BYTES].copy_from_slice(&rho);
    s_hat.to_bytes(&mut sk_bytes[..P::INDCPA_SK_BYTES]);
}

// -- encryption --------------------------------------------------------------

pub(crate) fn encrypt<P: MlKemParams>(
    ct_bytes: &mut [u8], m: &[u8; SYMBYTES], pk_bytes: &[u8], coins: &[u8; SYMBYTES],
) {
    match P::K {
        2 => encrypt_inner::<P, 2>(ct_bytes, m, pk_bytes, coins),
        3 => encrypt_inner::<P, 3>(ct_bytes, m, pk_bytes, coins),
        4 => encrypt_inner::<P, 4>(ct_bytes, m, pk_bytes, coins),
        _ => unreachable!(),
    }
}

fn encrypt_inner<P: MlKemParams, const K: usize>(
    ct_bytes: &mut [u8], m: &[u8; SYMBYTES], pk_bytes: &[u8], coins: &[u8; SYMBYTES],
) {
    let t_hat = NttPolyVec::<K>::from_bytes(&pk_bytes[..P::POLYVEC_BYTES]);
    let rho: [u8; SYMBYTES] = pk_bytes[P::POLYVEC_BYTES..P::INDCPA_PK_BYTES]
        .try_into()
        .expect("infallible: key layout fixes the seed offset");

    let at = sample_matrix::<K>(&rho, true);

    let mut nonce = 0u8;
    let y = sample_noise::<K>(P::ETA1, coins, &mut nonce);
    let e1 = sample_noise::<K>(P::ETA2, coins, &mut nonce);
    let mut buf = [0u8; 192];
    hash::prf(coins, nonce, &mut buf[..64 * P::ETA2]);
    let e2 = Polynomial::sample_cbd(P::ETA2, &buf[..64 * P::ETA2]);

    let y_hat = y.ntt();

    // u = invntt(A^T * y) + e1
    let mut u = PolyVec::<K>::zero();
    for ((u_p, at_row), e1_p) in u.polys_mut().iter_mut().zip(at.iter()).zip(e1.polys()) {
        let w = at_row.inner_product(&y_hat).ntt_inverse();
        *u_p = &w + e1_p;
    }

    // v = invntt(t^T * y) + e2 + decompress_1(m)
    let mu = Polynomial::from_message(m);
    let mut v = t_hat.inner_product(&y_hat).ntt_inverse();
    v += &e2;
    v += &mu;

    u.compress_into(P::D_U, &mut ct_bytes[..P::POLYVEC_COMPRESSED_BYTES]);
    v.compress_into(
        P::D_V,
        &mut ct_bytes[P::POLYVEC_COMPRESSED_BYTES..P::INDCPA_BYTES],
    );
}

// -- decryption --------------------------------------------------------------

pub(crate) fn decrypt<P: MlKemParams>(
    m: &mut [u8; SYMBYTES], ct_bytes: &[u8], sk_bytes: &[u8],
) {
    match P::K {
        2 => decrypt_inner::<P, 2>(m, ct_bytes, sk_bytes),
        3 => decrypt_inner::<P, 3>(m, ct_bytes, sk_bytes),
        4 => decrypt_inner::<P, 4>(m, ct_bytes, sk_bytes),
        _ => unreachable!(),
    }
}

fn decrypt_inner<P: MlKemParams, const K: usize>(
    m: &mut [u8; SYMBYTES], ct_bytes: &[u8], sk_bytes: &[u8],
) {
    let u = PolyVec::<K>::decompress_from(P::D_U, &ct_bytes[..P::POLYVEC_COMPRESSED_BYTES]);
    let v = Polynomial::decompress_from(
        P::D_V,
        &ct_bytes[P::POLYVEC_COMPRESSED_BYTES..P::INDCPA_BYTES],
    );
    let s_hat = NttPolyVec::<K>::from_bytes(&sk_bytes[..P::INDCPA_SK_BYTES]);

    // w = v - invntt(s^T * ntt(u))
    let w = &v - &s_hat.inner_product(&u.ntt()).ntt_inverse();
    *m = w.to_message();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{MlKem512, MlKem768, MlKem1024};

    fn roundtrip<P: MlKemParams>() {
        let seed = [42u8; SYMBYTES];
        let mut pk = vec![0u8; P::INDCPA_PK_BYTES];
        let mut sk = vec![0u8; P::INDCPA_SK_BYTES];
        keygen_derand::<P>(&mut pk, &mut sk, &seed);

        let msg = [0xAB; SYMBYTES];
        let coins = [7u8; SYMBYTES];
        let mut ct = vec![0u8; P::INDCPA_BYTES];
        encrypt::<P>(&mut ct, &msg, &pk, &coins);

        let mut recovered = [0u8; SYMBYTES];
        decrypt::<P>(&mut recovered, &ct, &sk);
        assert_eq!(msg, recovered, "{} inner roundtrip failed", P::NAME);
    }

    #[test]
    fn roundtrip_512() {
        roundtrip::<MlKem512>();
    }
    #[test]
    fn roundtrip_768() {
        roundtrip::<MlKem768>();
    }
    #[test]
    fn roundtrip_1024() {
        roundtrip::<MlKem1024>();
    }

    fn distinct_coins_distinct_ciphertexts<P: MlKemParams>() {
        let seed = [3u8; SYMBYTES];
        let mut pk = vec![0u8; P::INDCPA_PK_BYTES];
        let mut sk = vec![0u8; P::INDCPA_SK_BYTES];
        keygen_derand::<P>(&mut pk, &mut sk, &seed);

        let msg = [0x55; SYMBYTES];
        let mut ct1 = vec![0u8; P::INDCPA_BYTES];
        let mut ct2 = vec![0u8; P::INDCPA_BYTES];
        encrypt::<P>(&mut ct1, &msg, &pk, &[1u8; SYMBYTES]);
        encrypt::<P>(&mut ct2, &msg, &pk, &[2u8; SYMBYTES]);
        assert_ne!(ct1, ct2);

        let mut recovered = [0u8; SYMBYTES];
        decrypt::<P>(&mut recovered, &ct1, &sk);
        assert_eq!(msg, recovered);
        decrypt::<P>(&mut recovered, &ct2, &sk);
        assert_eq!(msg, recovered);
    }

    #[test]
    fn distinct_coins_768() {
        distinct_coins_distinct_ciphertexts::<MlKem768>();
    }

    #[test]
    fn matrix_seed_order_is_asymmetric() {
        // Entry (0, 1) of A must differ from entry (1, 0); a swapped seed
        // order would make the matrix symmetric.
        let seed = [9u8; SYMBYTES];
        let a = sample_matrix::<2>(&seed, false);
        assert_ne!(
            a[0].polys()[1].coeffs(),
            a[1].polys()[0].coeffs(),
        );
        // The transposed matrix is the flipped one.
        let at = sample_matrix::<2>(&seed, true);
        assert_eq!(a[0].polys()[1].coeffs(), at[1].polys()[0].coeffs());
        assert_eq!(a[1].polys()[0].coeffs(), at[0].polys()[1].coeffs());
    }
}
