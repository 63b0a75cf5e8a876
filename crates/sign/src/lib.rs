//! Digital Signature Schemes
//!
//! ECDSA over P-521 and secp256k1 behind the [`SignatureScheme`] capability,
//! plus a [`SigningConfiguration`] that picks one of them by identifier.
//! Signing is independent of the ECIES data path but shares its raw key
//! encodings.

#![forbid(unsafe_code)]

pub mod configuration;
pub mod traditional;

pub use configuration::{
    SignatureId, SigningConfiguration, SigningKeyPair, ECDSA_P521, ECDSA_SECP256K1,
};
pub use eccrypt_api::SignatureScheme;
pub use traditional::{EcdsaP521, EcdsaSecp256k1};
