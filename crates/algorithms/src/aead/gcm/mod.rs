//! AES in Galois/Counter Mode (NIST SP 800-38D)
//!
//! The key length selects the block cipher: 16 bytes for AES-128, 32 bytes
//! for AES-256. Any other key length is rejected before encryption.

use aes_gcm::{Aes128Gcm, Aes256Gcm};
use eccrypt_api::{CryptoRngCore, Error, Result, SealedPayload, SymmetricCipher};
use eccrypt_params::utils::aead::{AES128_GCM_KEY_SIZE, AES256_GCM_KEY_SIZE, AES_GCM_NONCE_SIZE};

use super::{open_with, random_nonce, seal_with};

const CONTEXT: &str = "AES-GCM";

/// AES-GCM with a 96-bit random nonce and 128-bit tag
#[derive(Clone, Copy, Debug, Default)]
pub struct AesGcm;

fn unsupported_key(actual: usize) -> Error {
    Error::InvalidKeyLength {
        context: CONTEXT,
        expected: AES256_GCM_KEY_SIZE,
        actual,
    }
}

impl SymmetricCipher for AesGcm {
    fn name(&self) -> &'static str {
        CONTEXT
    }

    fn key_lengths(&self) -> &'static [usize] {
        &[AES128_GCM_KEY_SIZE, AES256_GCM_KEY_SIZE]
    }

    fn nonce_length(&self) -> usize {
        AES_GCM_NONCE_SIZE
    }

    fn encrypt(
        &self,
        plaintext: &[u8],
        key: &[u8],
        rng: &mut dyn CryptoRngCore,
    ) -> Result<SealedPayload> {
        let nonce = random_nonce(rng, AES_GCM_NONCE_SIZE);
        let ciphertext = match key.len() {
            AES128_GCM_KEY_SIZE => seal_with::<Aes128Gcm>(CONTEXT, key, &nonce, plaintext)?,
            AES256_GCM_KEY_SIZE => seal_with::<Aes256Gcm>(CONTEXT, key, &nonce, plaintext)?,
            other => return Err(unsupported_key(other)),
        };
        Ok(SealedPayload { ciphertext, nonce })
    }

    fn decrypt(&self, ciphertext: &[u8], key: &[u8], nonce: &[u8]) -> Result<Vec<u8>> {
        match key.len() {
            AES128_GCM_KEY_SIZE => open_with::<Aes128Gcm>(CONTEXT, key, nonce, ciphertext),
            AES256_GCM_KEY_SIZE => open_with::<Aes256Gcm>(CONTEXT, key, nonce, ciphertext),
            other => Err(unsupported_key(other)),
        }
    }
}
