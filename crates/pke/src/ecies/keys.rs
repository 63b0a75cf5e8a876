//! Private and public key handles
//!
//! Keys are plain byte containers validated against a [`Configuration`] when
//! they are built. They do not remember that configuration: every operation
//! that needs the curve or hash takes it as an argument.

use core::fmt;

use eccrypt_api::error::validate;
use eccrypt_api::{CryptoRngCore, Error, Result};
use zeroize::Zeroize;

use super::configuration::Configuration;
use super::shared_secret::{derive_key, SharedSecret};

/// A private scalar together with its public key
///
/// The scalar is not wiped on drop; call [`Zeroize::zeroize`] when the key
/// is no longer needed.
#[derive(Clone)]
pub struct PrivateKey {
    key: Vec<u8>,
    public_key: PublicKey,
}

impl PrivateKey {
    /// Validate `raw` as a private key for the configured curve
    pub fn new(config: &Configuration, raw: &[u8]) -> Result<Self> {
        let curve = config.curve();
        validate::key_length("private key", raw.len(), curve.private_key_length())?;
        if !curve.valid_private_key(raw) {
            return Err(Error::InvalidKey {
                context: "private key",
                message: format!("not a usable {} scalar", curve.name()),
            });
        }

        let public_key = PublicKey::new(config, &curve.get_public_key(raw)?)?;
        Ok(Self {
            key: raw.to_vec(),
            public_key,
        })
    }

    /// Generate a fresh private key from `rng`
    pub fn generate(config: &Configuration, rng: &mut dyn CryptoRngCore) -> Result<Self> {
        let mut raw = config.curve().generate_secret(rng);
        let key = Self::new(config, &raw);
        raw.zeroize();
        key
    }

    /// Raw shared point between this key and `public_key`
    pub fn multiply(&self, config: &Configuration, public_key: &[u8]) -> Result<Vec<u8>> {
        config.curve().get_shared_point(&self.key, public_key)
    }

    /// HKDF over `own_public_key || self.multiply(public_key)`
    pub fn get_shared_secret(
        &self,
        config: &Configuration,
        public_key: &[u8],
    ) -> Result<SharedSecret> {
        let mut ikm = self.public_key.as_bytes().to_vec();
        let mut point = self.multiply(config, public_key)?;
        ikm.extend_from_slice(&point);
        point.zeroize();

        let secret = derive_key(&ikm, config);
        ikm.zeroize();
        secret
    }

    /// Raw scalar bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    /// Public key derived from this scalar
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Lowercase hex encoding of the scalar
    pub fn to_hex(&self) -> String {
        hex::encode(&self.key)
    }
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.key.zeroize();
    }
}

impl AsRef<[u8]> for PrivateKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

/// An encoded curve point
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    key: Vec<u8>,
}

impl PublicKey {
    /// Accept `raw` if it has the configured curve's public key length
    pub fn new(config: &Configuration, raw: &[u8]) -> Result<Self> {
        validate::key_length(
            "public key",
            raw.len(),
            config.curve().public_key_length(),
        )?;
        Ok(Self { key: raw.to_vec() })
    }

    /// HKDF over `self || private_key.multiply(self)`
    ///
    /// Equal to the sender's [`PrivateKey::get_shared_secret`] when `self`
    /// is the sender's public key.
    pub fn get_shared_secret(
        &self,
        config: &Configuration,
        private_key: &PrivateKey,
    ) -> Result<SharedSecret> {
        let mut ikm = self.key.clone();
        let mut point = private_key.multiply(config, &self.key)?;
        ikm.extend_from_slice(&point);
        point.zeroize();

        let secret = derive_key(&ikm, config);
        ikm.zeroize();
        secret
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    /// Lowercase hex encoding of the point
    pub fn to_hex(&self) -> String {
        hex::encode(&self.key)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
