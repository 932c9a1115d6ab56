//! Vectors of polynomials, parameterised by the const-generic rank `K`
//! (2, 3 or 4 in ML-KEM). Both domains get their own vector type, mirroring
//! the polynomial-level tagging.

use core::ops;

use crate::math::poly::{NttPolynomial, Polynomial};
use crate::params::{N, POLYBYTES};

/// Vector of `K` standard-form polynomials.
#[derive(Clone, Copy)]
pub struct PolyVec<const K: usize>(pub(crate) [Polynomial; K]);

/// Vector of `K` NTT-domain polynomials.
#[derive(Clone, Copy)]
pub struct NttPolyVec<const K: usize>(pub(crate) [NttPolynomial; K]);

impl<const K: usize> PolyVec<K> {
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self([Polynomial::zero(); K])
    }

    /// Forward transform of every component.
    #[must_use]
    pub fn ntt(self) -> NttPolyVec<K> {
        NttPolyVec(self.0.map(Polynomial::ntt))
    }

    /// Compress every component to `d` bits; `out` receives `K * 32 * d`
    /// bytes.
    pub fn compress_into(&self, d: u32, out: &mut [u8]) {
        let per_poly = N * d as usize / 8;
        for (p, chunk) in self.0.iter().zip(out.chunks_exact_mut(per_poly)) {
            p.compress_into(d, chunk);
        }
    }

    /// Inverse of [`compress_into`](Self::compress_into).
    #[must_use]
    pub fn decompress_from(d: u32, bytes: &[u8]) -> Self {
        let per_poly = N * d as usize / 8;
        debug_assert_eq!(bytes.len(), K * per_poly);
        Self(core::array::from_fn(|k| {
            Polynomial::decompress_from(d, &bytes[k * per_poly..(k + 1) * per_poly])
        }))
    }

    #[must_use]
    pub fn polys(&self) -> &[Polynomial; K] {
        &self.0
    }

    pub fn polys_mut(&mut self) -> &mut [Polynomial; K] {
        &mut self.0
    }
}

impl<const K: usize> NttPolyVec<K> {
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self([NttPolynomial::zero(); K])
    }

    /// Inverse transform of every component.
    #[must_use]
    pub fn ntt_inverse(self) -> PolyVec<K> {
        PolyVec(self.0.map(NttPolynomial::ntt_inverse))
    }

    /// Accumulated pointwise product `sum_i self[i] * other[i]`.
    #[must_use]
    pub fn inner_product(&self, other: &Self) -> NttPolynomial {
        let mut acc = self.0[0].multiply(&other.0[0]);
        for i in 1..K {
            acc += &self.0[i].multiply(&other.0[i]);
        }
        acc
    }

    /// 12-bit serialisation of every component, `K * 384` bytes.
    pub fn to_bytes(&self, out: &mut [u8]) {
        for (p, chunk) in self.0.iter().zip(out.chunks_exact_mut(POLYBYTES)) {
            p.to_bytes(chunk);
        }
    }

    /// Inverse of [`to_bytes`](Self::to_bytes).
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), K * POLYBYTES);
        Self(core::array::from_fn(|k| {
            NttPolynomial::from_bytes(&bytes[k * POLYBYTES..(k + 1) * POLYBYTES])
        }))
    }

    #[must_use]
    pub fn polys(&self) -> &[NttPolynomial; K] {
        &self.0
    }

    pub fn polys_mut(&mut self) -> &mut [NttPolynomial; K] {
        &mut self.0
    }
}

impl<const K: usize> ops::AddAssign<&Self> for PolyVec<K> {
    fn add_assign(&mut self, rhs: &Self) {
        for (p, r) in self.0.iter_mut().zip(rhs.0.iter()) {
            *p += r;
        }
    }
}

impl<const K: usize> ops::AddAssign<&Self> for NttPolyVec<K> {
    fn add_assign(&mut self, rhs: &Self) {
        for (p, r) in self.0.iter_mut().zip(rhs.0.iter()) {
            *p += r;
        }
    }
}
