//! # eccrypt
//!
//! Elliptic-curve integrated encryption (ECIES) over pluggable curves,
//! hashes and AEAD ciphers, with a self-describing ciphertext frame, plus
//! ECDSA signing.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! eccrypt = "0.3"
//! ```
//!
//! ```no_run
//! use eccrypt::prelude::*;
//!
//! let config = Configuration::default();
//! let pair = config.key_pair()?;
//! let wire = config.encrypt("Hello, World!", pair.public_key.as_bytes())?;
//! assert_eq!(config.decrypt(&wire, pair.private_key.as_bytes())?, b"Hello, World!");
//! # Ok::<(), eccrypt::Error>(())
//! ```
//!
//! ## Features
//!
//! - `pke` (default): ECIES configuration, keys and framing
//! - `sign` (default): ECDSA signing configuration
//! - `serde`: (de)serialisable configuration descriptors
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`eccrypt-api`]: capability traits, input types and errors
//! - [`eccrypt-params`]: size constants
//! - [`eccrypt-algorithms`]: curves, hashes, HKDF and AEAD ciphers
//! - [`eccrypt-pke`]: ECIES
//! - [`eccrypt-sign`]: digital signatures

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use eccrypt_algorithms as algorithms;
pub use eccrypt_api as api;
pub use eccrypt_params as params;

pub use eccrypt_api::{Error, Result};

// Feature-gated re-exports
#[cfg(feature = "pke")]
pub use eccrypt_pke as pke;

#[cfg(feature = "sign")]
pub use eccrypt_sign as sign;

/// Common imports for eccrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{
        CryptoRngCore, Curve, HashFunction, PublicKeyEncryption, SignatureScheme, SymmetricCipher,
    };

    // Re-export input and secret types
    pub use crate::api::{Input, SecretVec};

    // Algorithm identifiers
    pub use crate::algorithms::{CurveId, HashId, SymmetricId};

    #[cfg(feature = "pke")]
    pub use crate::pke::{
        Configuration, ConfigurationDescriptor, ConfigurationOptions, Frame, KeyPair, PrivateKey,
        PublicKey,
    };

    #[cfg(feature = "sign")]
    pub use crate::sign::{SignatureId, SigningConfiguration, SigningKeyPair};
}
