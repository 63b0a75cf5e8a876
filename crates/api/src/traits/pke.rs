//! Trait definition for Public Key Encryption (PKE) schemes.

use rand_core::CryptoRngCore;

use crate::error::Result;

/// Trait for Public Key Encryption schemes over raw key encodings.
pub trait PublicKeyEncryption: Send + Sync {
    /// Returns the PKE algorithm name, including its parameter choices.
    fn algorithm(&self) -> String;

    /// Encrypts a plaintext message for the holder of `recipient_public_key`.
    ///
    /// # Arguments
    /// * `recipient_public_key` - The recipient's raw public key.
    /// * `plaintext` - The message to encrypt.
    /// * `rng` - A cryptographically secure random number generator.
    fn seal(
        &self,
        recipient_public_key: &[u8],
        plaintext: &[u8],
        rng: &mut dyn CryptoRngCore,
    ) -> Result<Vec<u8>>;

    /// Decrypts a ciphertext using the recipient's raw private key.
    fn open(&self, private_key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>;
}
