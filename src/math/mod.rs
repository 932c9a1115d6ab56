//! Polynomial arithmetic over `R_q = Z_q[X]/(X^{256} + 1)` with q = 3329.
//!
//! Sub-modules cover modular field arithmetic, bit-level encoding, lossy
//! coefficient compression, the Number-Theoretic Transform, polynomial and
//! polynomial-vector types, and deterministic sampling. Coefficients are
//! `u16` values kept reduced in `[0, q)` at every step; products fit 32-bit
//! intermediates.

pub mod compress;
pub mod encode;
pub mod field;
pub mod ntt;
pub mod poly;
pub mod polyvec;
pub mod sample;

pub use field::FieldElement;
pub use poly::{NttPolynomial, Polynomial};
pub use polyvec::{NttPolyVec, PolyVec};
