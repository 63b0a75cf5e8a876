//! Signing configuration

use core::fmt;
use core::str::FromStr;

use eccrypt_api::{CryptoRngCore, Error, Input, Result, ResultExt, SecretVec, SignatureScheme};
use rand::rngs::OsRng;
use tracing::debug;

use crate::traditional::{EcdsaP521, EcdsaSecp256k1};

/// Shared ECDSA P-521 instance
pub static ECDSA_P521: EcdsaP521 = EcdsaP521;

/// Shared ECDSA secp256k1 instance
pub static ECDSA_SECP256K1: EcdsaSecp256k1 = EcdsaSecp256k1;

/// Registered signature schemes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SignatureId {
    /// ECDSA over P-521 with SHA-512
    #[default]
    EcdsaP521,
    /// ECDSA over secp256k1 with SHA-256
    EcdsaSecp256k1,
}

impl SignatureId {
    /// Every registered scheme, in declaration order
    pub const ALL: [SignatureId; 2] = [SignatureId::EcdsaP521, SignatureId::EcdsaSecp256k1];

    pub fn name(self) -> &'static str {
        self.capability().name()
    }

    /// The capability instance behind this identifier
    pub fn capability(self) -> &'static dyn SignatureScheme {
        match self {
            SignatureId::EcdsaP521 => &ECDSA_P521,
            SignatureId::EcdsaSecp256k1 => &ECDSA_SECP256K1,
        }
    }
}

impl fmt::Display for SignatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().replace(['-', '_'], "").as_str() {
            "ECDSAP521" | "P521" => Ok(SignatureId::EcdsaP521),
            "ECDSASECP256K1" | "SECP256K1" | "K256" => Ok(SignatureId::EcdsaSecp256k1),
            _ => Err(Error::UnknownAlgorithm {
                kind: "signature",
                name: s.to_string(),
            }),
        }
    }
}

/// A signing key and its public key
#[derive(Clone, Debug)]
pub struct SigningKeyPair {
    pub private_key: SecretVec,
    pub public_key: Vec<u8>,
}

/// Which signature scheme to sign and verify with
///
/// Independent of the ECIES configuration; the default is ECDSA P-521.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SigningConfiguration {
    scheme: SignatureId,
}

impl SigningConfiguration {
    pub fn new(scheme: SignatureId) -> Self {
        debug!(scheme = scheme.name(), "signing configuration created");
        Self { scheme }
    }

    pub fn scheme(&self) -> &'static dyn SignatureScheme {
        self.scheme.capability()
    }

    pub fn scheme_id(&self) -> SignatureId {
        self.scheme
    }

    /// Fresh key pair from the operating system RNG
    pub fn key_pair(&self) -> Result<SigningKeyPair> {
        self.key_pair_with_rng(&mut OsRng)
    }

    /// Fresh key pair from `rng`
    pub fn key_pair_with_rng(&self, rng: &mut dyn CryptoRngCore) -> Result<SigningKeyPair> {
        let private_key = SecretVec::new(self.scheme().generate_private_key(rng));
        let public_key = self.scheme().public_key(&private_key)?;
        Ok(SigningKeyPair {
            private_key,
            public_key,
        })
    }

    /// Public key for `private_key` (bytes, or hex text)
    pub fn public_key<'a>(&self, private_key: impl Into<Input<'a>>) -> Result<Vec<u8>> {
        let private_key = private_key.into().hex_bytes().with_context("private key")?;
        self.scheme().public_key(&private_key)
    }

    /// Sign `data` (bytes, or UTF-8 text) with `private_key` (bytes, or hex
    /// text)
    pub fn sign<'d, 'k>(
        &self,
        data: impl Into<Input<'d>>,
        private_key: impl Into<Input<'k>>,
    ) -> Result<Vec<u8>> {
        let private_key = private_key.into().hex_bytes().with_context("private key")?;
        self.scheme().sign(data.into().utf8_bytes(), &private_key)
    }

    /// Check `signature` over `data` against `public_key`
    ///
    /// `data` is bytes or UTF-8 text; `signature` and `public_key` are bytes
    /// or hex text.
    pub fn verify<'d, 's, 'k>(
        &self,
        data: impl Into<Input<'d>>,
        signature: impl Into<Input<'s>>,
        public_key: impl Into<Input<'k>>,
    ) -> Result<bool> {
        let Ok(signature) = signature.into().hex_bytes() else {
            return Ok(false);
        };
        let public_key = public_key.into().hex_bytes().with_context("public key")?;
        self.scheme()
            .verify(data.into().utf8_bytes(), &signature, &public_key)
    }
}
