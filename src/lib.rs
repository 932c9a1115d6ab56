//! `pqkem` -- ML-KEM (FIPS 203) key encapsulation.
//!
//! Implements all three approved parameter sets (ML-KEM-512, ML-KEM-768,
//! ML-KEM-1024) over the ring `Z_q[X]/(X^{256} + 1)` with q = 3329.
//!
//! Two API layers:
//!
//! - a typed, generic layer ([`keypair`], [`encapsulate`], [`decapsulate`])
//!   where the parameter set is a compile-time marker and keys are
//!   fixed-size newtypes;
//! - a byte-level [`MlKem`] engine selected by variant name at runtime,
//!   which validates input lengths and reports typed [`KemError`]s.
//!
//! # Design notes
//!
//! - **No `unsafe`** -- enforced by `#![deny(unsafe_code)]`.
//! - Standard-form and NTT-domain polynomials are **distinct types**, so a
//!   misplaced transform fails to compile.
//! - Secret keys and shared secrets **zeroize on drop** and redact their
//!   `Debug` output.
//! - Decapsulation uses **implicit rejection**: a tampered ciphertext yields
//!   a pseudorandom secret via a constant-time compare-and-select, never an
//!   error.
//!
//! # Example
//!
//! ```
//! use pqkem::MlKem;
//!
//! let kem = MlKem::new("ML-KEM-768")?;
//! let (ek, dk) = kem.keygen()?;
//! let (secret, ct) = kem.encaps(&ek)?;
//! assert_eq!(kem.decaps(&dk, &ct)?.as_bytes(), secret.as_bytes());
//! # Ok::<(), pqkem::KemError>(())
//! ```

#![deny(unsafe_code)]

mod ct;
mod pke;

pub mod engine;
pub mod error;
pub mod hash;
pub mod kem;
pub mod math;
pub mod params;
pub mod types;

// Re-export the public API surface.
pub use engine::{MlKem, Variant};
pub use error::{KemError, Result};
pub use kem::{decapsulate, encapsulate, encapsulate_derand, keypair, keypair_derand};
pub use params::{MlKem512, MlKem768, MlKem1024, MlKemParams};
pub use types::{Ciphertext, PublicKey, SecretKey, SharedSecret};
