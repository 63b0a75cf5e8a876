//! SHA-2 family hash functions
//!
//! Thin adapters from the `sha2` digests to [`HashFunction`], including the
//! HKDF construction over each digest.

use eccrypt_api::{HashFunction, Result};
use eccrypt_params::utils::hash::{SHA256_OUTPUT_SIZE, SHA512_OUTPUT_SIZE};
use ::sha2::{Digest, Sha256, Sha512};

use crate::kdf::Hkdf;

/// SHA-256 hash function
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hash;

/// SHA-512 hash function
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha512Hash;

impl HashFunction for Sha256Hash {
    fn name(&self) -> &'static str {
        "SHA-256"
    }

    fn output_length(&self) -> usize {
        SHA256_OUTPUT_SIZE
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        Sha256::digest(data).to_vec()
    }

    fn hkdf(
        &self,
        ikm: &[u8],
        salt: Option<&[u8]>,
        info: Option<&[u8]>,
        length: usize,
    ) -> Result<Vec<u8>> {
        Hkdf::<Sha256>::new().derive_key(ikm, salt, info, length)
    }
}

impl HashFunction for Sha512Hash {
    fn name(&self) -> &'static str {
        "SHA-512"
    }

    fn output_length(&self) -> usize {
        SHA512_OUTPUT_SIZE
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        Sha512::digest(data).to_vec()
    }

    fn hkdf(
        &self,
        ikm: &[u8],
        salt: Option<&[u8]>,
        info: Option<&[u8]>,
        length: usize,
    ) -> Result<Vec<u8>> {
        Hkdf::<Sha512>::new().derive_key(ikm, salt, info, length)
    }
}
