//! secp256k1 key agreement

use ::k256::elliptic_curve::group::Curve as _;
use ::k256::elliptic_curve::sec1::ToEncodedPoint;
use ::k256::{PublicKey, SecretKey};
use eccrypt_api::error::validate;
use eccrypt_api::{CryptoRngCore, Curve, Error, Result};
use eccrypt_params::traditional::ecdh::{ECDH_K256_PRIVATE_KEY_SIZE, ECDH_K256_PUBLIC_KEY_SIZE};

/// secp256k1 with 32-byte scalars and 65-byte uncompressed SEC1 public keys
#[derive(Clone, Copy, Debug, Default)]
pub struct Secp256k1Curve;

fn secret_key(private_key: &[u8]) -> Result<SecretKey> {
    validate::key_length(
        "secp256k1 private key",
        private_key.len(),
        ECDH_K256_PRIVATE_KEY_SIZE,
    )?;
    SecretKey::from_slice(private_key).map_err(|_| Error::InvalidKey {
        context: "secp256k1 private key",
        message: "scalar is zero or not below the group order".into(),
    })
}

fn public_key(public_key: &[u8]) -> Result<PublicKey> {
    validate::key_length(
        "secp256k1 public key",
        public_key.len(),
        ECDH_K256_PUBLIC_KEY_SIZE,
    )?;
    PublicKey::from_sec1_bytes(public_key).map_err(|_| Error::InvalidKey {
        context: "secp256k1 public key",
        message: "not an uncompressed point on the curve".into(),
    })
}

impl Curve for Secp256k1Curve {
    fn name(&self) -> &'static str {
        "SECP256K1"
    }

    fn public_key_length(&self) -> usize {
        ECDH_K256_PUBLIC_KEY_SIZE
    }

    fn private_key_length(&self) -> usize {
        ECDH_K256_PRIVATE_KEY_SIZE
    }

    fn get_shared_point(&self, private_key: &[u8], public_key_bytes: &[u8]) -> Result<Vec<u8>> {
        let secret = secret_key(private_key)?;
        let public = public_key(public_key_bytes)?;
        let shared = (public.to_projective() * *secret.to_nonzero_scalar()).to_affine();
        Ok(shared.to_encoded_point(true).as_bytes().to_vec())
    }

    fn get_public_key(&self, private_key: &[u8]) -> Result<Vec<u8>> {
        let secret = secret_key(private_key)?;
        Ok(secret
            .public_key()
            .to_encoded_point(false)
            .as_bytes()
            .to_vec())
    }

    fn valid_private_key(&self, private_key: &[u8]) -> bool {
        secret_key(private_key).is_ok()
    }

    fn generate_secret(&self, mut rng: &mut dyn CryptoRngCore) -> Vec<u8> {
        SecretKey::random(&mut rng).to_bytes().to_vec()
    }
}
