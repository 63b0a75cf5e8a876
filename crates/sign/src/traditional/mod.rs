//! Traditional signature schemes

pub mod ecdsa;

pub use ecdsa::{EcdsaP521, EcdsaSecp256k1};
