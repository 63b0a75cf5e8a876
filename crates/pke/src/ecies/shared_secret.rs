//! Shared-secret derivation for both sides of an ECIES exchange

use core::ops::Deref;

use eccrypt_api::{CryptoRngCore, Result, SecretVec};
use tracing::trace;
use zeroize::Zeroize;

use super::configuration::Configuration;
use super::keys::{PrivateKey, PublicKey};

/// Symmetric key material agreed between sender and recipient
///
/// Zeroed on drop, redacted in `Debug`, compared in constant time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedSecret(SecretVec);

impl SharedSecret {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Deref for SharedSecret {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// Sender-side result: the symmetric key plus the ephemeral public key that
/// must travel with the ciphertext
#[derive(Clone, Debug)]
pub struct EncryptionKey {
    pub shared_secret: SharedSecret,
    pub ephemeral_public_key: PublicKey,
}

/// Recipient-side result
#[derive(Clone, Debug)]
pub struct DecryptionKey {
    pub shared_secret: SharedSecret,
}

/// HKDF over `ikm` with the configured hash, no salt and no info, producing
/// `derived_key_size` bytes
pub fn derive_key(ikm: &[u8], config: &Configuration) -> Result<SharedSecret> {
    trace!(
        hash = config.hash_function().name(),
        ikm_len = ikm.len(),
        length = config.derived_key_size(),
        "deriving shared secret"
    );
    let okm = config
        .hash_function()
        .hkdf(ikm, None, None, config.derived_key_size())?;
    Ok(SharedSecret(SecretVec::new(okm)))
}

/// Generate a one-time ephemeral key pair and agree a secret with
/// `recipient_public_key`
pub fn derive_encryption_key(
    recipient_public_key: &[u8],
    config: &Configuration,
    rng: &mut dyn CryptoRngCore,
) -> Result<EncryptionKey> {
    let recipient = PublicKey::new(config, recipient_public_key)?;
    let mut ephemeral = PrivateKey::generate(config, rng)?;

    let shared_secret = ephemeral.get_shared_secret(config, recipient.as_bytes());
    let ephemeral_public_key = ephemeral.public_key().clone();
    ephemeral.zeroize();

    Ok(EncryptionKey {
        shared_secret: shared_secret?,
        ephemeral_public_key,
    })
}

/// Recompute the sender's secret from the recipient's private key and the
/// ephemeral public key carried in the ciphertext
pub fn derive_decryption_key(
    private_key: &[u8],
    ephemeral_public_key: &[u8],
    config: &Configuration,
) -> Result<DecryptionKey> {
    let mut private_key = PrivateKey::new(config, private_key)?;
    let sender = PublicKey::new(config, ephemeral_public_key)?;

    let shared_secret = sender.get_shared_secret(config, &private_key);
    private_key.zeroize();

    Ok(DecryptionKey {
        shared_secret: shared_secret?,
    })
}
