//! Authenticated symmetric cipher capability

use rand_core::CryptoRngCore;

use crate::error::Result;

/// Output of one AEAD encryption: ciphertext (tag included) and its nonce
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SealedPayload {
    pub ciphertext: Vec<u8>,
    pub nonce: Vec<u8>,
}

/// Authenticated encryption keyed by a fixed-length symmetric key
///
/// The nonce is never supplied by the caller: every [`encrypt`] call draws a
/// fresh one from the RNG and returns it alongside the ciphertext.
///
/// [`encrypt`]: SymmetricCipher::encrypt
pub trait SymmetricCipher: Send + Sync {
    /// Stable identifier written into serialization frames
    fn name(&self) -> &'static str;

    /// Key sizes in bytes this cipher accepts
    fn key_lengths(&self) -> &'static [usize];

    /// Nonce size in bytes
    fn nonce_length(&self) -> usize;

    /// Whether a key of `length` bytes is accepted
    fn supports_key_length(&self, length: usize) -> bool {
        self.key_lengths().contains(&length)
    }

    /// Encrypt `plaintext` under `key` with a freshly drawn nonce
    fn encrypt(
        &self,
        plaintext: &[u8],
        key: &[u8],
        rng: &mut dyn CryptoRngCore,
    ) -> Result<SealedPayload>;

    /// Decrypt and authenticate; fails with `AuthenticationFailed` when the
    /// tag does not verify
    fn decrypt(&self, ciphertext: &[u8], key: &[u8], nonce: &[u8]) -> Result<Vec<u8>>;
}
