//! Authenticated Encryption with Associated Data (AEAD) ciphers
//!
//! Both registered ciphers use 96-bit nonces drawn fresh from the caller's
//! RNG on every encryption and append a 16-byte tag to the ciphertext.

use core::fmt;
use core::str::FromStr;

use aes_gcm::aead::{Aead, KeyInit, Nonce};
use eccrypt_api::{CryptoRngCore, Error, Result, SymmetricCipher};

pub mod chacha20poly1305;
pub mod gcm;

pub use self::chacha20poly1305::ChaCha20Poly1305;
pub use self::gcm::AesGcm;

/// Shared AES-GCM instance
pub static AES_GCM: AesGcm = AesGcm;

/// Shared ChaCha20-Poly1305 instance
pub static CHACHA20_POLY1305: ChaCha20Poly1305 = ChaCha20Poly1305;

/// Registered symmetric ciphers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymmetricId {
    /// AES in Galois/Counter Mode with a 128- or 256-bit key
    AesGcm,
    /// ChaCha20-Poly1305 (RFC 8439)
    ChaCha20Poly1305,
}

impl SymmetricId {
    /// Every registered cipher, in declaration order
    pub const ALL: [SymmetricId; 2] = [SymmetricId::AesGcm, SymmetricId::ChaCha20Poly1305];

    /// Registered name, as written into serialization frames
    pub fn name(self) -> &'static str {
        self.capability().name()
    }

    /// The capability instance behind this identifier
    pub fn capability(self) -> &'static dyn SymmetricCipher {
        match self {
            SymmetricId::AesGcm => &AES_GCM,
            SymmetricId::ChaCha20Poly1305 => &CHACHA20_POLY1305,
        }
    }
}

impl fmt::Display for SymmetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymmetricId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().replace(['-', '_'], "").as_str() {
            "AESGCM" => Ok(SymmetricId::AesGcm),
            "CHACHA20POLY1305" | "CHACHAPOLY" => Ok(SymmetricId::ChaCha20Poly1305),
            _ => Err(Error::UnknownAlgorithm {
                kind: "symmetric",
                name: s.to_string(),
            }),
        }
    }
}

/// Draw a fresh nonce of `length` bytes
pub(crate) fn random_nonce(rng: &mut dyn CryptoRngCore, length: usize) -> Vec<u8> {
    let mut nonce = vec![0u8; length];
    rng.fill_bytes(&mut nonce);
    nonce
}

/// Encrypt with any RustCrypto AEAD; `key` and `nonce` lengths must
/// already be checked
pub(crate) fn seal_with<C: Aead + KeyInit>(
    context: &'static str,
    key: &[u8],
    nonce: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = C::new_from_slice(key).map_err(|_| Error::InvalidKeyLength {
        context,
        expected: C::key_size(),
        actual: key.len(),
    })?;
    cipher
        .encrypt(Nonce::<C>::from_slice(nonce), plaintext)
        .map_err(|_| Error::InvalidParameter {
            context,
            message: "plaintext too long".into(),
        })
}

/// Decrypt with any RustCrypto AEAD; every failure after key setup is
/// reported as an authentication failure
pub(crate) fn open_with<C: Aead + KeyInit>(
    context: &'static str,
    key: &[u8],
    nonce: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = C::new_from_slice(key).map_err(|_| Error::InvalidKeyLength {
        context,
        expected: C::key_size(),
        actual: key.len(),
    })?;
    if nonce.len() != Nonce::<C>::default().len() {
        tracing::trace!(context, nonce_len = nonce.len(), "nonce length mismatch");
        return Err(Error::AuthenticationFailed { context });
    }
    cipher
        .decrypt(Nonce::<C>::from_slice(nonce), ciphertext)
        .map_err(|_| Error::AuthenticationFailed { context })
}
