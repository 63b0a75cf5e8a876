//! Public API traits and types for the eccrypt library
//!
//! This crate provides the public API surface for the eccrypt ecosystem: the
//! capability traits every curve, hash, AEAD and signature implementation
//! plugs into, the error taxonomy, and the byte/text input type.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::{
    Curve,
    HashFunction,
    PublicKeyEncryption,
    SealedPayload,
    SignatureScheme,
    SymmetricCipher,
};

// Re-export the RNG bound used throughout the traits
pub use rand_core::CryptoRngCore;
