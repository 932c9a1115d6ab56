//! Error types for the public KEM surface.
//!
//! A failed re-encryption check during decapsulation is deliberately *not*
//! represented here: implicit rejection returns a valid shared secret and is
//! indistinguishable from success.

use thiserror::Error;

/// Result alias for KEM operations.
pub type Result<T> = core::result::Result<T, KemError>;

/// Error type for KEM operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KemError {
    /// The variant name given at engine construction is not one of the three
    /// approved parameter sets.
    #[error("unknown parameter set {name:?}; expected ML-KEM-512, ML-KEM-768 or ML-KEM-1024")]
    InvalidParameter { name: String },

    /// The system entropy source failed or returned short.
    #[error("system entropy source failed")]
    EntropyFailure,

    /// A key or ciphertext has the wrong length for the selected variant.
    /// Rejected before any cryptographic work.
    #[error("{context}: invalid length (expected {expected} bytes, got {actual})")]
    MalformedInput {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}
