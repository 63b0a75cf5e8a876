//! ECDSA over secp256k1 with SHA-256

use ::k256::ecdsa::signature::{Signer, Verifier};
use ::k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use eccrypt_algorithms::SECP256K1;
use eccrypt_api::error::validate;
use eccrypt_api::{CryptoRngCore, Curve, Error, Result, SignatureScheme};
use eccrypt_params::traditional::ecdsa::{
    ECDSA_K256_PRIVATE_KEY_SIZE, ECDSA_K256_PUBLIC_KEY_SIZE, ECDSA_K256_SIGNATURE_SIZE,
};

/// ECDSA signature scheme using secp256k1
///
/// 64-byte `r || s` signatures (low-S normalised), 65-byte uncompressed
/// public keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct EcdsaSecp256k1;

fn signing_key(private_key: &[u8]) -> Result<SigningKey> {
    validate::key_length(
        "ECDSA secp256k1 private key",
        private_key.len(),
        ECDSA_K256_PRIVATE_KEY_SIZE,
    )?;
    SigningKey::from_slice(private_key).map_err(|_| Error::InvalidKey {
        context: "ECDSA secp256k1 private key",
        message: "scalar is zero or not below the group order".into(),
    })
}

fn verifying_key(public_key: &[u8]) -> Result<VerifyingKey> {
    validate::key_length(
        "ECDSA secp256k1 public key",
        public_key.len(),
        ECDSA_K256_PUBLIC_KEY_SIZE,
    )?;
    VerifyingKey::from_sec1_bytes(public_key).map_err(|_| Error::InvalidKey {
        context: "ECDSA secp256k1 public key",
        message: "not an uncompressed point on the curve".into(),
    })
}

impl SignatureScheme for EcdsaSecp256k1 {
    fn name(&self) -> &'static str {
        "ECDSA-SECP256K1"
    }

    fn public_key_length(&self) -> usize {
        ECDSA_K256_PUBLIC_KEY_SIZE
    }

    fn private_key_length(&self) -> usize {
        ECDSA_K256_PRIVATE_KEY_SIZE
    }

    fn generate_private_key(&self, rng: &mut dyn CryptoRngCore) -> Vec<u8> {
        SECP256K1.generate_secret(rng)
    }

    fn public_key(&self, private_key: &[u8]) -> Result<Vec<u8>> {
        signing_key(private_key)?;
        SECP256K1.get_public_key(private_key)
    }

    fn sign(&self, data: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
        let key = signing_key(private_key)?;
        let signature: Signature = key.try_sign(data).map_err(|e| Error::SignatureFailed {
            context: "ECDSA secp256k1",
            message: e.to_string(),
        })?;
        Ok(signature.to_bytes().to_vec())
    }

    fn verify(&self, data: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        let key = verifying_key(public_key)?;
        if signature.len() != ECDSA_K256_SIGNATURE_SIZE {
            return Ok(false);
        }
        let Ok(signature) = Signature::from_slice(signature) else {
            return Ok(false);
        };
        Ok(key.verify(data, &signature).is_ok())
    }
}
