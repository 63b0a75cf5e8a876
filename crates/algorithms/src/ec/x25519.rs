//! X25519 key agreement (RFC 7748)

use eccrypt_api::error::validate;
use eccrypt_api::{CryptoRngCore, Curve, Error, Result};
use eccrypt_params::traditional::ecdh::{X25519_PRIVATE_KEY_SIZE, X25519_PUBLIC_KEY_SIZE};
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroizing;

/// X25519 with 32-byte scalars and 32-byte u-coordinates
///
/// Any 32-byte string except all zeroes is accepted as a private key; the
/// scalar is clamped when used.
#[derive(Clone, Copy, Debug, Default)]
pub struct X25519Curve;

fn static_secret(private_key: &[u8]) -> Result<StaticSecret> {
    validate::key_length(
        "X25519 private key",
        private_key.len(),
        X25519_PRIVATE_KEY_SIZE,
    )?;
    if private_key.iter().all(|&b| b == 0) {
        return Err(Error::InvalidKey {
            context: "X25519 private key",
            message: "all-zero scalar".into(),
        });
    }
    let mut bytes = Zeroizing::new([0u8; X25519_PRIVATE_KEY_SIZE]);
    bytes.copy_from_slice(private_key);
    Ok(StaticSecret::from(*bytes))
}

impl Curve for X25519Curve {
    fn name(&self) -> &'static str {
        "X25519"
    }

    fn public_key_length(&self) -> usize {
        X25519_PUBLIC_KEY_SIZE
    }

    fn private_key_length(&self) -> usize {
        X25519_PRIVATE_KEY_SIZE
    }

    fn get_shared_point(&self, private_key: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
        let secret = static_secret(private_key)?;
        validate::key_length("X25519 public key", public_key.len(), X25519_PUBLIC_KEY_SIZE)?;

        let mut u = [0u8; X25519_PUBLIC_KEY_SIZE];
        u.copy_from_slice(public_key);
        let shared = secret.diffie_hellman(&PublicKey::from(u));

        // Low-order peer points collapse the output to zero.
        if !shared.was_contributory() {
            return Err(Error::InvalidKey {
                context: "X25519 public key",
                message: "low-order point".into(),
            });
        }
        Ok(shared.as_bytes().to_vec())
    }

    fn get_public_key(&self, private_key: &[u8]) -> Result<Vec<u8>> {
        let secret = static_secret(private_key)?;
        Ok(PublicKey::from(&secret).as_bytes().to_vec())
    }

    fn valid_private_key(&self, private_key: &[u8]) -> bool {
        private_key.len() == X25519_PRIVATE_KEY_SIZE && private_key.iter().any(|&b| b != 0)
    }

    fn generate_secret(&self, rng: &mut dyn CryptoRngCore) -> Vec<u8> {
        let mut key = vec![0u8; X25519_PRIVATE_KEY_SIZE];
        loop {
            rng.fill_bytes(&mut key);
            if self.valid_private_key(&key) {
                return key;
            }
        }
    }
}
