//! Deterministic sampling: uniform rejection sampling from a SHAKE-128
//! stream and centered-binomial noise from PRF output.

use sha3::digest::XofReader;

use crate::math::field::fe_sub;
use crate::params::{N, Q};

/// SHAKE-128 output rate in bytes (one Keccak-f[1600] squeeze).
pub const SHAKE128_RATE: usize = 168;

/// Rejection-samples 256 uniform coefficients in `[0, q)` from the XOF.
///
/// Each 3-byte chunk yields two 12-bit candidates; candidates at or above q
/// are discarded. The stream is consumed block by block until the polynomial
/// is full -- there is no upper bound on the number of squeezed bytes, so a
/// run of unlucky blocks can never leave the output short.
pub fn sample_uniform(xof: &mut impl XofReader, r: &mut [u16; N]) {
    let mut buf = [0u8; SHAKE128_RATE];
    let mut ctr = 0;
    while ctr < N {
        xof.read(&mut buf);
        let mut pos = 0;
        while ctr < N && pos + 3 <= SHAKE128_RATE {
            let (c0, c1, c2) = (buf[pos] as u16, buf[pos + 1] as u16, buf[pos + 2] as u16);
            pos += 3;

            let d1 = c0 + 256 * (c1 % 16);
            let d2 = c1 / 16 + 16 * c2;

            if d1 < Q {
                r[ctr] = d1;
                ctr += 1;
            }
            if ctr < N && d2 < Q {
                r[ctr] = d2;
                ctr += 1;
            }
        }
    }
}

/// Samples 256 coefficients from the centered binomial distribution CBD_eta.
///
/// `buf` holds `64 * eta` PRF bytes, read as `512 * eta` bits; coefficient i
/// is the difference of two eta-bit popcounts, reduced into `[0, q)`.
pub fn sample_cbd(eta: usize, buf: &[u8], r: &mut [u16; N]) {
    debug_assert!(eta == 2 || eta == 3);
    debug_assert_eq!(buf.len(), 64 * eta);

    let bit = |idx: usize| ((buf[idx / 8] >> (idx % 8)) & 1) as u16;
    for (i, c) in r.iter_mut().enumerate() {
        let mut x = 0;
        let mut y = 0;
        for j in 0..eta {
            x += bit(2 * i * eta + j);
            y += bit((2 * i + 1) * eta + j);
        }
        *c = fe_sub(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash;

    #[test]
    fn uniform_fills_completely_within_range() {
        let seed = [0xAA; 32];
        let mut xof = hash::xof(&seed, 1, 2);
        let mut r = [0xFFFF; N];
        sample_uniform(&mut xof, &mut r);
        assert!(r.iter().all(|&c| c < Q), "coefficient out of [0, q)");
    }

    #[test]
    fn uniform_is_seed_dependent() {
        let seed = [0x11; 32];
        let (mut a, mut b) = ([0u16; N], [0u16; N]);
        sample_uniform(&mut hash::xof(&seed, 0, 1), &mut a);
        sample_uniform(&mut hash::xof(&seed, 1, 0), &mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn cbd2_all_ones_input_in_range() {
        let buf = [0xFF; 128];
        let mut r = [0u16; N];
        sample_cbd(2, &buf, &mut r);
        assert!(r.iter().all(|&c| c < Q));
        // All bits set means x = y = eta for every coefficient.
        assert!(r.iter().all(|&c| c == 0));
    }

    #[test]
    fn cbd_coefficients_stay_centered() {
        for eta in [2usize, 3] {
            let buf: Vec<u8> = (0..64 * eta).map(|i| (i as u8).wrapping_mul(97)).collect();
            let mut r = [0u16; N];
            sample_cbd(eta, &buf, &mut r);
            for &c in &r {
                let centered = if c > Q / 2 { c as i32 - Q as i32 } else { c as i32 };
                assert!(
                    centered.unsigned_abs() as usize <= eta,
                    "coefficient {centered} outside [-{eta}, {eta}]"
                );
            }
        }
    }

    #[test]
    fn cbd_zero_input_is_zero() {
        let buf = [0u8; 192];
        let mut r = [7u16; N];
        sample_cbd(3, &buf, &mut r);
        assert!(r.iter().all(|&c| c == 0));
    }
}
