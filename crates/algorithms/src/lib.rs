//! Concrete capabilities for the eccrypt library
//!
//! Each curve, hash and AEAD is exposed as a zero-sized type implementing the
//! matching `eccrypt-api` trait, plus a `'static` instance so configurations
//! can hold `&'static dyn` references. The arithmetic itself is delegated to
//! the RustCrypto crates; this crate only enforces the fixed-length key
//! conventions and maps their errors onto the eccrypt taxonomy.
//!
//! Identifier enums ([`CurveId`], [`HashId`], [`SymmetricId`]) resolve the
//! registered algorithm names to those instances.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// AEAD cipher implementations
pub mod aead;
pub use aead::{AesGcm, ChaCha20Poly1305, SymmetricId, AES_GCM, CHACHA20_POLY1305};

// Elliptic curve key agreement
pub mod ec;
pub use ec::{CurveId, P521Curve, Secp256k1Curve, X25519Curve, P521, SECP256K1, X25519};

// Hash function implementations
pub mod hash;
pub use hash::{HashId, Sha256Hash, Sha512Hash, SHA256, SHA512};

// KDF implementations
pub mod kdf;
pub use kdf::hkdf::Hkdf;
