//! Digital signature capability
//!
//! Signature schemes share the raw fixed-length key convention of the curve
//! capability but are otherwise independent of the encryption data path.

use rand_core::CryptoRngCore;

use crate::Result;

/// A signature scheme over raw key encodings
pub trait SignatureScheme: Send + Sync {
    /// Returns the name of this signature algorithm
    fn name(&self) -> &'static str;

    /// Length of an encoded public key in bytes
    fn public_key_length(&self) -> usize;

    /// Length of an encoded private key in bytes
    fn private_key_length(&self) -> usize;

    /// Generate a new private key using the provided RNG
    ///
    /// Same requirement on `rng` as [`Curve::generate_secret`](super::Curve::generate_secret).
    fn generate_private_key(&self, rng: &mut dyn CryptoRngCore) -> Vec<u8>;

    /// Public key belonging to `private_key`
    fn public_key(&self, private_key: &[u8]) -> Result<Vec<u8>>;

    /// Sign `data` with `private_key`
    ///
    /// Badly sized keys fail with `InvalidKeyLength`.
    fn sign(&self, data: &[u8], private_key: &[u8]) -> Result<Vec<u8>>;

    /// Verify `signature` over `data`
    ///
    /// Returns `Ok(false)` for a signature that does not verify (including
    /// one that does not parse); `Err` only for unusable public keys.
    fn verify(&self, data: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool>;
}
