//! Polynomial types with domain tagging.
//!
//! [`Polynomial`] lives in standard coefficient form, [`NttPolynomial`] in the
//! NTT residue domain. The two have identical shape but distinct semantics,
//! so the transforms consume their input: applying a transform in the wrong
//! order is a type error, not a silent corruption.

use core::ops;

use crate::math::{compress, encode, ntt, sample};
use crate::math::field::{fe_add, fe_sub};
use crate::params::{N, POLYBYTES, SYMBYTES};

/// Polynomial in standard (coefficient) form over `R_q`, 256 coefficients in
/// `[0, q)`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Polynomial(pub(crate) [u16; N]);

/// Polynomial in the NTT residue domain, read as 128 degree-1 pairs.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct NttPolynomial(pub(crate) [u16; N]);

impl Polynomial {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u16; N])
    }

    /// Consuming forward transform.
    #[must_use]
    pub fn ntt(mut self) -> NttPolynomial {
        ntt::forward_ntt(&mut self.0);
        NttPolynomial(self.0)
    }

    /// Compress every coefficient to `d` bits and pack the result.
    pub fn compress_into(&self, d: u32, out: &mut [u8]) {
        let t: [u16; N] = core::array::from_fn(|i| compress::compress(self.0[i], d));
        encode::byte_encode(d as usize, &t, out);
    }

    /// Unpack d-bit fields and decompress them back into `[0, q)`.
    #[must_use]
    pub fn decompress_from(d: u32, bytes: &[u8]) -> Self {
        let mut t = [0u16; N];
        encode::byte_decode(d as usize, bytes, &mut t);
        for c in t.iter_mut() {
            *c = compress::decompress(*c, d);
        }
        Self(t)
    }

    /// Decode a 32-byte message: each bit decompresses to 0 or 1665.
    #[must_use]
    pub fn from_message(msg: &[u8; SYMBYTES]) -> Self {
        Self::decompress_from(1, msg)
    }

    /// Encode to a 32-byte message (1-bit compression per coefficient).
    #[must_use]
    pub fn to_message(&self) -> [u8; SYMBYTES] {
        let mut msg = [0u8; SYMBYTES];
        self.compress_into(1, &mut msg);
        msg
    }

    /// Sample from the centered binomial distribution; `buf` holds `64 * eta`
    /// PRF bytes.
    #[must_use]
    pub fn sample_cbd(eta: usize, buf: &[u8]) -> Self {
        let mut p = Self::zero();
        sample::sample_cbd(eta, buf, &mut p.0);
        p
    }

    #[must_use]
    pub const fn coeffs(&self) -> &[u16; N] {
        &self.0
    }

    pub fn coeffs_mut(&mut self) -> &mut [u16; N] {
        &mut self.0
    }
}

impl NttPolynomial {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u16; N])
    }

    /// Consuming inverse transform.
    #[must_use]
    pub fn ntt_inverse(mut self) -> Polynomial {
        ntt::inverse_ntt(&mut self.0);
        Polynomial(self.0)
    }

    /// Pointwise product: 128 base-case multiplications.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut out = Self::zero();
        ntt::multiply_ntts(&self.0, &other.0, &mut out.0);
        out
    }

    /// Rejection-sample a uniform residue polynomial from an XOF stream.
    #[must_use]
    pub fn sample_uniform(xof: &mut impl sha3::digest::XofReader) -> Self {
        let mut p = Self::zero();
        sample::sample_uniform(xof, &mut p.0);
        p
    }

    /// 12-bit serialisation, 384 bytes.
    pub fn to_bytes(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), POLYBYTES);
        encode::byte_encode(12, &self.0, out);
    }

    /// 12-bit deserialisation; out-of-range values are reduced mod q.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), POLYBYTES);
        let mut p = Self::zero();
        encode::byte_decode(12, bytes, &mut p.0);
        p
    }

    #[must_use]
    pub const fn coeffs(&self) -> &[u16; N] {
        &self.0
    }

    pub fn coeffs_mut(&mut self) -> &mut [u16; N] {
        &mut self.0
    }
}

// -- operator impls ----------------------------------------------------------

macro_rules! coeffwise_ops {
    ($ty:ident) => {
        impl<'b> ops::Add<&'b $ty> for &$ty {
            type Output = $ty;
            #[inline]
            fn add(self, rhs: &'b $ty) -> $ty {
                $ty(core::array::from_fn(|i| fe_add(self.0[i], rhs.0[i])))
            }
        }

        impl<'b> ops::Sub<&'b $ty> for &$ty {
            type Output = $ty;
            #[inline]
            fn sub(self, rhs: &'b $ty) -> $ty {
                $ty(core::array::from_fn(|i| fe_sub(self.0[i], rhs.0[i])))
            }
        }

        impl ops::AddAssign<&Self> for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: &Self) {
                for (c, &r) in self.0.iter_mut().zip(rhs.0.iter()) {
                    *c = fe_add(*c, r);
                }
            }
        }

        impl From<[u16; N]> for $ty {
            #[inline]
            fn from(coeffs: [u16; N]) -> Self {
                Self(coeffs)
            }
        }

        impl Default for $ty {
            #[inline]
            fn default() -> Self {
                Self::zero()
            }
        }

        impl core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($ty))
                    .field("coeffs[..4]", &&self.0[..4])
                    .finish_non_exhaustive()
            }
        }
    };
}

coeffwise_ops!(Polynomial);
coeffwise_ops!(NttPolynomial);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Q;

    #[test]
    fn add_sub_inverse() {
        let a = Polynomial(core::array::from_fn(|i| (i % Q as usize) as u16));
        let b = Polynomial(core::array::from_fn(|i| ((N - i) % Q as usize) as u16));
        let sum = &a + &b;
        let recovered = &sum - &b;
        assert_eq!(a, recovered);
    }

    #[test]
    fn ntt_type_roundtrip() {
        let p = Polynomial(core::array::from_fn(|i| ((i * 13) % Q as usize) as u16));
        let recovered = p.ntt().ntt_inverse();
        assert_eq!(p, recovered);
    }

    #[test]
    fn message_roundtrip() {
        let msg: [u8; SYMBYTES] = core::array::from_fn(|i| (i * 37) as u8);
        let p = Polynomial::from_message(&msg);
        assert!(p.0.iter().all(|&c| c == 0 || c == 1665));
        assert_eq!(p.to_message(), msg);
    }

    #[test]
    fn serialisation_roundtrip() {
        let p = NttPolynomial(core::array::from_fn(|i| ((i * 13) % Q as usize) as u16));
        let mut buf = [0u8; POLYBYTES];
        p.to_bytes(&mut buf);
        assert_eq!(NttPolynomial::from_bytes(&buf), p);
    }

    #[test]
    fn compressed_roundtrip_error_bounded() {
        for d in [4u32, 5, 10, 11] {
            let p = Polynomial(core::array::from_fn(|i| ((i * 11) % Q as usize) as u16));
            let mut buf = vec![0u8; N * d as usize / 8];
            p.compress_into(d, &mut buf);
            let q = Polynomial::decompress_from(d, &buf);

            let max_err = (Q as i32) / (1 << (d + 1)) + 1;
            for i in 0..N {
                let diff = (p.0[i] as i32 - q.0[i] as i32).rem_euclid(Q as i32);
                let diff = diff.min(Q as i32 - diff);
                assert!(diff <= max_err, "d = {d}, index {i}: error {diff}");
            }
        }
    }
}
