//! Constants for hash functions and AEAD ciphers

pub mod aead;
pub mod hash;
