//! Key derivation functions

pub mod hkdf;

pub use self::hkdf::{Hkdf, HkdfBuilder};
