//! Capability traits implemented by the algorithm and scheme crates

pub mod curve;
pub mod hash;
pub mod pke;
pub mod signature;
pub mod symmetric;

pub use curve::Curve;
pub use hash::HashFunction;
pub use pke::PublicKeyEncryption;
pub use signature::SignatureScheme;
pub use symmetric::{SealedPayload, SymmetricCipher};
