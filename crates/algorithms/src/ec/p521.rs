//! NIST P-521 key agreement

use ::p521::elliptic_curve::group::Curve as _;
use ::p521::elliptic_curve::sec1::ToEncodedPoint;
use ::p521::{PublicKey, SecretKey};
use eccrypt_api::error::validate;
use eccrypt_api::{CryptoRngCore, Curve, Error, Result};
use eccrypt_params::traditional::ecdh::{
    ECDH_P521_PRIVATE_KEY_SIZE, ECDH_P521_PUBLIC_KEY_SIZE, ECDH_P521_SEED_EXPANSION_SIZE,
};

/// P-521 with 66-byte scalars and 67-byte compressed SEC1 public keys
#[derive(Clone, Copy, Debug, Default)]
pub struct P521Curve;

fn secret_key(private_key: &[u8]) -> Result<SecretKey> {
    validate::key_length(
        "P-521 private key",
        private_key.len(),
        ECDH_P521_PRIVATE_KEY_SIZE,
    )?;
    SecretKey::from_slice(private_key).map_err(|_| Error::InvalidKey {
        context: "P-521 private key",
        message: "scalar is zero or not below the group order".into(),
    })
}

fn public_key(public_key: &[u8]) -> Result<PublicKey> {
    validate::key_length(
        "P-521 public key",
        public_key.len(),
        ECDH_P521_PUBLIC_KEY_SIZE,
    )?;
    PublicKey::from_sec1_bytes(public_key).map_err(|_| Error::InvalidKey {
        context: "P-521 public key",
        message: "not a compressed point on the curve".into(),
    })
}

impl Curve for P521Curve {
    fn name(&self) -> &'static str {
        "P-521"
    }

    fn public_key_length(&self) -> usize {
        ECDH_P521_PUBLIC_KEY_SIZE
    }

    fn private_key_length(&self) -> usize {
        ECDH_P521_PRIVATE_KEY_SIZE
    }

    fn seed_expansion_length(&self) -> usize {
        ECDH_P521_SEED_EXPANSION_SIZE
    }

    fn get_shared_point(&self, private_key: &[u8], public_key_bytes: &[u8]) -> Result<Vec<u8>> {
        let secret = secret_key(private_key)?;
        let public = public_key(public_key_bytes)?;
        let shared = (public.to_projective() * *secret.to_nonzero_scalar()).to_affine();
        Ok(shared.to_encoded_point(false).as_bytes().to_vec())
    }

    fn get_public_key(&self, private_key: &[u8]) -> Result<Vec<u8>> {
        let secret = secret_key(private_key)?;
        Ok(secret
            .public_key()
            .to_encoded_point(true)
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
