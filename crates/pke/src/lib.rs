//! Public Key Encryption (PKE) for the eccrypt library.
//!
//! The scheme is ECIES: a fresh ephemeral key pair per message, ECDH against
//! the recipient's public key, HKDF over `ephemeral_public || shared_point`,
//! and AEAD sealing of the payload. The ciphertext is written as
//! `ephemeral_public_key || frame`, where the frame is the self-describing
//! text `<data_len>.<nonce_len>.<algorithm>.<data_hex>.<nonce_hex>`.
//!
//! ```no_run
//! use eccrypt_pke::Configuration;
//!
//! let config = Configuration::default();
//! let pair = config.key_pair()?;
//! let wire = config.encrypt("Hello, World!", pair.public_key.as_bytes())?;
//! let plain = config.decrypt(&wire, pair.private_key.as_bytes())?;
//! assert_eq!(plain, b"Hello, World!");
//! # Ok::<(), eccrypt_pke::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod ecies;

// Re-export key items
pub use eccrypt_api::{Error, Result};
pub use ecies::{
    derive_decryption_key, derive_encryption_key, derive_key, ecies_decrypt, ecies_encrypt,
    Configuration, ConfigurationDescriptor, ConfigurationOptions, DecryptionKey, EncryptionKey,
    Frame, KeyPair, PrivateKey, PublicKey, SharedSecret,
};
