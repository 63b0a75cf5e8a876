//! ECIES configuration: which curve, hash and cipher to compose
//!
//! A [`Configuration`] is validated once and is immutable afterwards. It is
//! `Copy`, `Send` and `Sync`, so it can be shared freely across threads or
//! placed behind an `Arc`.

use core::fmt;

use eccrypt_algorithms::{CurveId, HashId, SymmetricId};
use eccrypt_api::error::validate;
use eccrypt_api::{
    CryptoRngCore, Curve, Error, HashFunction, Input, PublicKeyEncryption, Result, ResultExt,
    SymmetricCipher,
};
use eccrypt_params::ecies::DEFAULT_DERIVED_KEY_SIZE;
use rand::rngs::OsRng;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::keys::{PrivateKey, PublicKey};
use super::{ecies_decrypt, ecies_encrypt};

/// Every configurable field, with named defaults
///
/// Defaults: P-521, SHA-512, AES-GCM, 32-byte derived key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigurationOptions {
    pub curve: CurveId,
    pub hash: HashId,
    pub symmetric: SymmetricId,
    pub derived_key_size: usize,
}

impl Default for ConfigurationOptions {
    fn default() -> Self {
        Self {
            curve: CurveId::P521,
            hash: HashId::Sha512,
            symmetric: SymmetricId::AesGcm,
            derived_key_size: DEFAULT_DERIVED_KEY_SIZE,
        }
    }
}

impl ConfigurationOptions {
    pub fn with_curve(mut self, curve: CurveId) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_hash(mut self, hash: HashId) -> Self {
        self.hash = hash;
        self
    }

    pub fn with_symmetric(mut self, symmetric: SymmetricId) -> Self {
        self.symmetric = symmetric;
        self
    }

    pub fn with_derived_key_size(mut self, derived_key_size: usize) -> Self {
        self.derived_key_size = derived_key_size;
        self
    }
}

/// Plain-data description of a configuration, by algorithm name
///
/// The key lengths are informational; they are recomputed from the curve
/// when the descriptor is turned back into a [`Configuration`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConfigurationDescriptor {
    pub curve: String,
    pub hash: String,
    pub symmetric: String,
    pub derived_key_size: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub public_key_length: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub private_key_length: usize,
}

impl TryFrom<&ConfigurationDescriptor> for Configuration {
    type Error = Error;

    fn try_from(descriptor: &ConfigurationDescriptor) -> Result<Self> {
        Configuration::new(ConfigurationOptions {
            curve: descriptor.curve.parse()?,
            hash: descriptor.hash.parse()?,
            symmetric: descriptor.symmetric.parse()?,
            derived_key_size: descriptor.derived_key_size,
        })
    }
}

impl TryFrom<ConfigurationDescriptor> for Configuration {
    type Error = Error;

    fn try_from(descriptor: ConfigurationDescriptor) -> Result<Self> {
        Configuration::try_from(&descriptor)
    }
}

/// A private key and the public key derived from it
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

/// Curve, hash and symmetric cipher for ECIES, plus the derived key size
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    curve: CurveId,
    hash: HashId,
    symmetric: SymmetricId,
    derived_key_size: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::from_valid_options(ConfigurationOptions::default())
    }
}

impl Configuration {
    /// Validate `options` and build a configuration from them
    ///
    /// Fails with [`Error::InvalidParameter`] when the derived key size is
    /// zero or not a key size the symmetric cipher accepts.
    pub fn new(options: ConfigurationOptions) -> Result<Self> {
        validate::parameter(
            options.derived_key_size > 0,
            "derived_key_size",
            "must be greater than zero",
        )?;
        let symmetric = options.symmetric.capability();
        validate::parameter(
            symmetric.supports_key_length(options.derived_key_size),
            "derived_key_size",
            format!(
                "{} does not accept {}-byte keys (supported: {:?})",
                symmetric.name(),
                options.derived_key_size,
                symmetric.key_lengths()
            ),
        )?;

        let config = Self::from_valid_options(options);
        debug!(
            curve = config.curve.name(),
            hash = config.hash.name(),
            symmetric = config.symmetric.name(),
            derived_key_size = config.derived_key_size,
            "ECIES configuration created"
        );
        Ok(config)
    }

    fn from_valid_options(options: ConfigurationOptions) -> Self {
        Self {
            curve: options.curve,
            hash: options.hash,
            symmetric: options.symmetric,
            derived_key_size: options.derived_key_size,
        }
    }

    /// Default options on the given curve
    pub fn for_curve(curve: CurveId) -> Self {
        Self::from_valid_options(ConfigurationOptions::default().with_curve(curve))
    }

    /// Default options on P-521
    pub fn p521() -> Self {
        Self::for_curve(CurveId::P521)
    }

    /// Default options on secp256k1
    pub fn secp256k1() -> Self {
        Self::for_curve(CurveId::Secp256k1)
    }

    /// Default options on X25519
    pub fn x25519() -> Self {
        Self::for_curve(CurveId::X25519)
    }

    pub fn curve(&self) -> &'static dyn Curve {
        self.curve.capability()
    }

    pub fn hash_function(&self) -> &'static dyn HashFunction {
        self.hash.capability()
    }

    pub fn symmetric(&self) -> &'static dyn SymmetricCipher {
        self.symmetric.capability()
    }

    pub fn curve_id(&self) -> CurveId {
        self.curve
    }

    pub fn hash_id(&self) -> HashId {
        self.hash
    }

    pub fn symmetric_id(&self) -> SymmetricId {
        self.symmetric
    }

    pub fn derived_key_size(&self) -> usize {
        self.derived_key_size
    }

    /// The options this configuration was built from
    pub fn options(&self) -> ConfigurationOptions {
        ConfigurationOptions {
            curve: self.curve,
            hash: self.hash,
            symmetric: self.symmetric,
            derived_key_size: self.derived_key_size,
        }
    }

    /// Describe this configuration by algorithm name
    pub fn describe(&self) -> ConfigurationDescriptor {
        let curve = self.curve();
        ConfigurationDescriptor {
            curve: curve.name().to_string(),
            hash: self.hash.name().to_string(),
            symmetric: self.symmetric.name().to_string(),
            derived_key_size: self.derived_key_size,
            public_key_length: curve.public_key_length(),
            private_key_length: curve.private_key_length(),
        }
    }

    /// Fresh key pair from the operating system RNG
    pub fn key_pair(&self) -> Result<KeyPair> {
        self.key_pair_with_rng(&mut OsRng)
    }

    /// Fresh key pair from `rng`
    pub fn key_pair_with_rng(&self, rng: &mut dyn CryptoRngCore) -> Result<KeyPair> {
        let private_key = self.private_key_with_rng(rng)?;
        let public_key = private_key.public_key().clone();
        Ok(KeyPair {
            private_key,
            public_key,
        })
    }

    /// Import a private key given as bytes or hex text
    pub fn private_key<'a>(&self, raw: impl Into<Input<'a>>) -> Result<PrivateKey> {
        let raw = raw.into().hex_bytes().with_context("private key")?;
        PrivateKey::new(self, &raw)
    }

    /// Generate a private key from the operating system RNG
    pub fn generate_private_key(&self) -> Result<PrivateKey> {
        self.private_key_with_rng(&mut OsRng)
    }

    /// Generate a private key from `rng`
    pub fn private_key_with_rng(&self, rng: &mut dyn CryptoRngCore) -> Result<PrivateKey> {
        PrivateKey::generate(self, rng)
    }

    /// Import a public key given as bytes or hex text
    pub fn public_key<'a>(&self, raw: impl Into<Input<'a>>) -> Result<PublicKey> {
        let raw = raw.into().hex_bytes().with_context("public key")?;
        PublicKey::new(self, &raw)
    }

    /// Encrypt `message` (bytes, or UTF-8 text) for `recipient_public_key`
    /// (bytes, or hex text)
    pub fn encrypt<'m, 'k>(
        &self,
        message: impl Into<Input<'m>>,
        recipient_public_key: impl Into<Input<'k>>,
    ) -> Result<Vec<u8>> {
        self.encrypt_with_rng(message, recipient_public_key, &mut OsRng)
    }

    /// [`encrypt`](Self::encrypt) with an injected RNG for the ephemeral key
    /// and the AEAD nonce
    pub fn encrypt_with_rng<'m, 'k>(
        &self,
        message: impl Into<Input<'m>>,
        recipient_public_key: impl Into<Input<'k>>,
        rng: &mut dyn CryptoRngCore,
    ) -> Result<Vec<u8>> {
        let message = message.into().utf8_bytes();
        let recipient = recipient_public_key
            .into()
            .hex_bytes()
            .with_context("recipient public key")?;
        ecies_encrypt(self, message, &recipient, rng)
    }

    /// Decrypt a wire ciphertext (bytes, or hex text) with `private_key`
    /// (bytes, or hex text)
    ///
    /// Every failure is reported with its detailed kind. Callers that expose
    /// the outcome to a remote party should use
    /// [`decrypt_redacted`](Self::decrypt_redacted).
    pub fn decrypt<'w, 'k>(
        &self,
        wire: impl Into<Input<'w>>,
        private_key: impl Into<Input<'k>>,
    ) -> Result<Vec<u8>> {
        let wire = wire.into().hex_bytes().with_context("ciphertext")?;
        let private_key = private_key
            .into()
            .hex_bytes()
            .with_context("private key")?;
        ecies_decrypt(self, &wire, &private_key)
    }

    /// [`decrypt`](Self::decrypt), with authentication, framing and
    /// algorithm failures all reported as [`Error::DecryptionRejected`]
    pub fn decrypt_redacted<'w, 'k>(
        &self,
        wire: impl Into<Input<'w>>,
        private_key: impl Into<Input<'k>>,
    ) -> Result<Vec<u8>> {
        self.decrypt(wire, private_key).redact()
    }

    /// Digest of `message` (bytes, or UTF-8 text) under the configured hash
    pub fn hash<'a>(&self, message: impl Into<Input<'a>>) -> Vec<u8> {
        self.hash_function().hash(message.into().utf8_bytes())
    }

    /// Deterministic private key bytes from a seed of any length
    ///
    /// The seed is always stretched through HKDF, even when it already has
    /// the private key's length.
    pub fn from_seed<'a>(&self, seed: impl Into<Input<'a>>) -> Result<Vec<u8>> {
        self.curve()
            .from_seed(seed.into().utf8_bytes(), self.hash_function())
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("curve", &self.curve.name())
            .field("hash", &self.hash.name())
            .field("symmetric", &self.symmetric.name())
            .field("derived_key_size", &self.derived_key_size)
            .finish()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ECIES-{}-HKDF-{}-{}",
            self.curve, self.hash, self.symmetric
        )
    }
}

impl PublicKeyEncryption for Configuration {
    fn algorithm(&self) -> String {
        self.to_string()
    }

    fn seal(
        &self,
        recipient_public_key: &[u8],
        plaintext: &[u8],
        rng: &mut dyn CryptoRngCore,
    ) -> Result<Vec<u8>> {
        ecies_encrypt(self, plaintext, recipient_public_key, rng)
    }

    fn open(&self, private_key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        ecies_decrypt(self, ciphertext, private_key)
    }
}
