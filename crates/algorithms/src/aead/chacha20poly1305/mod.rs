//! ChaCha20-Poly1305 authenticated encryption (RFC 8439)

use eccrypt_api::error::validate;
use eccrypt_api::{CryptoRngCore, Result, SealedPayload, SymmetricCipher};
use eccrypt_params::utils::aead::{CHACHA20POLY1305_KEY_SIZE, CHACHA20POLY1305_NONCE_SIZE};

use super::{open_with, random_nonce, seal_with};

const CONTEXT: &str = "ChaCha20-Poly1305";

/// ChaCha20-Poly1305 with a 256-bit key and 96-bit random nonce
#[derive(Clone, Copy, Debug, Default)]
pub struct ChaCha20Poly1305;

impl SymmetricCipher for ChaCha20Poly1305 {
    fn name(&self) -> &'static str {
        CONTEXT
    }

    fn key_lengths(&self) -> &'static [usize] {
        &[CHACHA20POLY1305_KEY_SIZE]
    }

    fn nonce_length(&self) -> usize {
        CHACHA20POLY1305_NONCE_SIZE
    }

    fn encrypt(
        &self,
        plaintext: &[u8],
        key: &[u8],
        rng: &mut dyn CryptoRngCore,
    ) -> Result<SealedPayload> {
        validate::key_length(CONTEXT, key.len(), CHACHA20POLY1305_KEY_SIZE)?;
        let nonce = random_nonce(rng, CHACHA20POLY1305_NONCE_SIZE);
        let ciphertext =
            seal_with::<::chacha20poly1305::ChaCha20Poly1305>(CONTEXT, key, &nonce, plaintext)?;
        Ok(SealedPayload { ciphertext, nonce })
    }

    fn decrypt(&self, ciphertext: &[u8], key: &[u8], nonce: &[u8]) -> Result<Vec<u8>> {
        validate::key_length(CONTEXT, key.len(), CHACHA20POLY1305_KEY_SIZE)?;
        open_with::<::chacha20poly1305::ChaCha20Poly1305>(CONTEXT, key, nonce, ciphertext)
    }
}
