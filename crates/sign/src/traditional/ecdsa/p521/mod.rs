//! ECDSA over NIST P-521 with SHA-512
//!
//! Signing is randomized: every call draws its nonce from the operating
//! system RNG, so signing the same message twice gives different bytes.
//! Signatures use the fixed-width `r || s` encoding, 66 bytes each; public
//! keys are compressed SEC1 points so they interoperate with the P-521 ECIES
//! keys.

use ::p521::ecdsa::signature::{Signer, Verifier};
use ::p521::ecdsa::{Signature, SigningKey, VerifyingKey};
use eccrypt_algorithms::P521;
use eccrypt_api::error::validate;
use eccrypt_api::{CryptoRngCore, Curve, Error, Result, SignatureScheme};
use eccrypt_params::traditional::ecdsa::{
    ECDSA_P521_PRIVATE_KEY_SIZE, ECDSA_P521_PUBLIC_KEY_SIZE, ECDSA_P521_SIGNATURE_SIZE,
};

/// ECDSA signature scheme using NIST P-521 (secp521r1)
#[derive(Clone, Copy, Debug, Default)]
pub struct EcdsaP521;

fn signing_key(private_key: &[u8]) -> Result<SigningKey> {
    validate::key_length(
        "ECDSA P-521 private key",
        private_key.len(),
        ECDSA_P521_PRIVATE_KEY_SIZE,
    )?;
    SigningKey::from_slice(private_key).map_err(|_| Error::InvalidKey {
        context: "ECDSA P-521 private key",
        message: "scalar is zero or not below the group order".into(),
    })
}

fn verifying_key(public_key: &[u8]) -> Result<VerifyingKey> {
    validate::key_length(
        "ECDSA P-521 public key",
        public_key.len(),
        ECDSA_P521_PUBLIC_KEY_SIZE,
    )?;
    VerifyingKey::from_sec1_bytes(public_key).map_err(|_| Error::InvalidKey {
        context: "ECDSA P-521 public key",
        message: "not a compressed point on the curve".into(),
    })
}

impl SignatureScheme for EcdsaP521 {
    fn name(&self) -> &'static str {
        "ECDSA-P521"
    }

    fn public_key_length(&self) -> usize {
        ECDSA_P521_PUBLIC_KEY_SIZE
    }

    fn private_key_length(&self) -> usize {
        ECDSA_P521_PRIVATE_KEY_SIZE
    }

    fn generate_private_key(&self, rng: &mut dyn CryptoRngCore) -> Vec<u8> {
        P521.generate_secret(rng)
    }

    fn public_key(&self, private_key: &[u8]) -> Result<Vec<u8>> {
        signing_key(private_key)?;
        P521.get_public_key(private_key)
    }

    fn sign(&self, data: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
        let key = signing_key(private_key)?;
        let signature: Signature = key.try_sign(data).map_err(|e| Error::SignatureFailed {
            context: "ECDSA P-521",
            message: e.to_string(),
        })?;
        Ok(signature.to_bytes().to_vec())
    }

    fn verify(&self, data: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        let key = verifying_key(public_key)?;
        if signature.len() != ECDSA_P521_SIGNATURE_SIZE {
            return Ok(false);
        }
        let Ok(signature) = Signature::from_slice(signature) else {
            return Ok(false);
        };
        Ok(key.verify(data, &signature).is_ok())
    }
}
