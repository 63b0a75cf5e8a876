//! Elliptic Curve Integrated Encryption Scheme (ECIES) composition.
//!
//! The pieces are kept separate so each can be used and tested on its own:
//! [`configuration`] chooses the capabilities, [`keys`] validates key
//! material, [`shared_secret`] performs the key agreement and HKDF step, and
//! [`frame`] owns the textual ciphertext format. This module glues them into
//! the two wire-level operations.

use eccrypt_api::{CryptoRngCore, Error, Result};
use tracing::debug;

pub mod configuration;
pub mod frame;
pub mod keys;
pub mod shared_secret;

pub use configuration::{Configuration, ConfigurationDescriptor, ConfigurationOptions, KeyPair};
pub use frame::Frame;
pub use keys::{PrivateKey, PublicKey};
pub use shared_secret::{
    derive_decryption_key, derive_encryption_key, derive_key, DecryptionKey, EncryptionKey,
    SharedSecret,
};

/// Encrypt `message` for the holder of `recipient_public_key`.
///
/// Returns `ephemeral_public_key || frame`.
pub fn ecies_encrypt(
    config: &Configuration,
    message: &[u8],
    recipient_public_key: &[u8],
    rng: &mut dyn CryptoRngCore,
) -> Result<Vec<u8>> {
    let symmetric = config.symmetric();
    debug!(
        curve = config.curve().name(),
        symmetric = symmetric.name(),
        message_len = message.len(),
        "ECIES encrypt"
    );

    let key = derive_encryption_key(recipient_public_key, config, rng)?;
    let sealed = symmetric.encrypt(message, key.shared_secret.as_bytes(), rng)?;
    let frame = frame::serialize(&sealed.ciphertext, &sealed.nonce, symmetric.name())?;

    let ephemeral = key.ephemeral_public_key.as_bytes();
    let mut wire = Vec::with_capacity(ephemeral.len() + frame.len());
    wire.extend_from_slice(ephemeral);
    wire.extend_from_slice(&frame);
    Ok(wire)
}

/// Decrypt a wire ciphertext produced by [`ecies_encrypt`].
///
/// The frame's algorithm tag is checked against the configured cipher
/// before any decryption is attempted. Errors are returned unredacted.
pub fn ecies_decrypt(config: &Configuration, wire: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
    let public_key_length = config.curve().public_key_length();
    debug!(
        curve = config.curve().name(),
        symmetric = config.symmetric().name(),
        wire_len = wire.len(),
        "ECIES decrypt"
    );

    if wire.len() < public_key_length {
        return Err(Error::InvalidKeyLength {
            context: "ephemeral public key",
            expected: public_key_length,
            actual: wire.len(),
        });
    }
    let (ephemeral, frame_bytes) = wire.split_at(public_key_length);

    let key = derive_decryption_key(private_key, ephemeral, config)?;
    let frame = frame::deserialize(frame_bytes)?;
    frame.verify_algorithm(config.symmetric().name())?;

    config
        .symmetric()
        .decrypt(&frame.data, key.shared_secret.as_bytes(), &frame.nonce)
}
