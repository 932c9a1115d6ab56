//! Key, ciphertext, and shared-secret newtypes. Secret material zeroizes on
//! drop and never appears in `Debug` output.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::params::{KeyBuffer, MlKemParams, SSBYTES};

macro_rules! byte_newtype {
    ($(#[$doc:meta])* $name:ident, $array:ident) => {
        $(#[$doc])*
        pub struct $name<P: MlKemParams> {
            pub(crate) bytes: P::$array,
        }

        impl<P: MlKemParams> $name<P> {
            /// Wraps an existing byte array.
            #[inline]
            pub fn from_bytes(bytes: P::$array) -> Self {
                Self { bytes }
            }

            /// Views the value as a byte slice.
            #[inline]
            pub fn as_bytes(&self) -> &[u8] {
                self.bytes.bytes()
            }

            /// Consumes the wrapper and returns the inner byte array.
            #[inline]
            pub fn into_bytes(self) -> P::$array {
                self.bytes
            }
        }

        impl<P: MlKemParams> AsRef<[u8]> for $name<P> {
            #[inline]
            fn as_ref(&self) -> &[u8] {
                self.bytes.bytes()
            }
        }

        impl<P: MlKemParams> Clone for $name<P> {
            fn clone(&self) -> Self {
                Self {
                    bytes: self.bytes.clone(),
                }
            }
        }
    };
}

byte_newtype!(
    /// ML-KEM public (encapsulation) key.
    PublicKey,
    PkArray
);

byte_newtype!(
    /// ML-KEM ciphertext.
    Ciphertext,
    CtArray
);

impl<P: MlKemParams> core::fmt::Debug for PublicKey<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PublicKey")
            .field("len", &P::PK_BYTES)
            .finish_non_exhaustive()
    }
}

impl<P: MlKemParams> core::fmt::Debug for Ciphertext<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ciphertext")
            .field("len", &P::CT_BYTES)
            .finish_non_exhaustive()
    }
}

/// ML-KEM secret (decapsulation) key. Zeroized on drop.
pub struct SecretKey<P: MlKemParams> {
    pub(crate) bytes: P::SkArray,
}

impl<P: MlKemParams> SecretKey<P> {
    /// Wraps an existing byte array.
    #[inline]
    pub fn from_bytes(bytes: P::SkArray) -> Self {
        Self { bytes }
    }

    /// Views the key as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.bytes()
    }
}

impl<P: MlKemParams> AsRef<[u8]> for SecretKey<P> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.bytes.bytes()
    }
}

impl<P: MlKemParams> Clone for SecretKey<P> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
        }
    }
}

impl<P: MlKemParams> Zeroize for SecretKey<P> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<P: MlKemParams> Drop for SecretKey<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: MlKemParams> core::fmt::Debug for SecretKey<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// Shared secret, always 32 bytes. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    pub(crate) bytes: [u8; SSBYTES],
}

impl SharedSecret {
    /// Wraps a raw 32-byte array.
    #[inline]
    pub fn from_bytes(bytes: [u8; SSBYTES]) -> Self {
        Self { bytes }
    }

    /// Views the secret as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for SharedSecret {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl core::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SharedSecret([REDACTED])")
    }
}
