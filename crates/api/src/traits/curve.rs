//! Elliptic-curve key agreement capability

use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use super::hash::HashFunction;
use crate::error::{Error, Result};

/// Key agreement over one specific curve
///
/// Keys cross this interface as raw fixed-length encodings. Implementations
/// reject any key argument whose length differs from
/// [`private_key_length`](Curve::private_key_length) or
/// [`public_key_length`](Curve::public_key_length) with
/// [`Error::InvalidKeyLength`] before touching the point arithmetic.
pub trait Curve: Send + Sync {
    /// Registered curve name; also the HKDF label used by [`Curve::from_seed`]
    fn name(&self) -> &'static str;

    /// Length of an encoded public key in bytes
    fn public_key_length(&self) -> usize;

    /// Length of an encoded private scalar in bytes
    fn private_key_length(&self) -> usize;

    /// Number of bytes HKDF produces when stretching a seed.
    ///
    /// May be shorter than the private key when a full-width random value
    /// would usually exceed the group order; the output is left-padded.
    fn seed_expansion_length(&self) -> usize {
        self.private_key_length()
    }

    /// Diffie-Hellman output of `private_key` and `public_key`
    ///
    /// Weierstrass curves return the full SEC1-encoded shared point; X25519
    /// returns the 32-byte u-coordinate.
    fn get_shared_point(&self, private_key: &[u8], public_key: &[u8]) -> Result<Vec<u8>>;

    /// Public key belonging to `private_key`
    fn get_public_key(&self, private_key: &[u8]) -> Result<Vec<u8>>;

    /// Whether `private_key` is a correctly sized, usable scalar
    fn valid_private_key(&self, private_key: &[u8]) -> bool;

    /// Fresh random private key drawn from `rng`
    ///
    /// Candidates that are not valid scalars are discarded and redrawn, so
    /// `rng` must keep producing fresh output. A source stuck on a constant
    /// invalid value, such as all zeroes, never returns.
    fn generate_secret(&self, rng: &mut dyn CryptoRngCore) -> Vec<u8>;

    /// Deterministically turn an arbitrary-length seed into a private key
    fn from_seed(&self, seed: &[u8], hash: &dyn HashFunction) -> Result<Vec<u8>> {
        let expected = self.private_key_length();
        let expanded = Zeroizing::new(hash.hkdf(
            seed,
            None,
            Some(self.name().as_bytes()),
            self.seed_expansion_length(),
        )?);

        if expanded.len() > expected {
            return Err(Error::SeedExpansionFailed {
                expected,
                actual: expanded.len(),
            });
        }

        let mut key = vec![0u8; expected - expanded.len()];
        key.extend_from_slice(&expanded);

        if key.len() != expected || !self.valid_private_key(&key) {
            return Err(Error::SeedExpansionFailed {
                expected,
                actual: key.len(),
            });
        }
        Ok(key)
    }
}
