//! HKDF (RFC 5869) over any block-based digest

use core::marker::PhantomData;

use eccrypt_api::error::{Error, Result};
use eccrypt_params::utils::hash::HKDF_MAX_BLOCKS;
use ::hkdf::SimpleHkdf;
use sha2::digest::core_api::BlockSizeUser;
use sha2::digest::Digest;

/// HKDF instantiated with the digest `D`
#[derive(Clone, Debug, Default)]
pub struct Hkdf<D> {
    _digest: PhantomData<D>,
}

impl<D> Hkdf<D>
where
    D: Digest + BlockSizeUser + Clone,
{
    /// Create a new HKDF instance
    pub fn new() -> Self {
        Self {
            _digest: PhantomData,
        }
    }

    /// Largest output this instance can produce
    pub fn max_output_length() -> usize {
        HKDF_MAX_BLOCKS * <D as Digest>::output_size()
    }

    /// Extract with `salt` (or a zero salt), then expand with `info` (or an
    /// empty label) to `length` bytes
    pub fn derive_key(
        &self,
        ikm: &[u8],
        salt: Option<&[u8]>,
        info: Option<&[u8]>,
        length: usize,
    ) -> Result<Vec<u8>> {
        let hk = SimpleHkdf::<D>::new(salt, ikm);
        let mut okm = vec![0u8; length];
        hk.expand(info.unwrap_or_default(), &mut okm)
            .map_err(|_| Error::KeyDerivationFailed {
                context: "HKDF expand",
                message: format!(
                    "requested {} bytes, at most {} available",
                    length,
                    Self::max_output_length()
                ),
            })?;
        Ok(okm)
    }

    /// Start an operation-style derivation
    pub fn builder(&self) -> HkdfBuilder<'_, D> {
        HkdfBuilder {
            kdf: self,
            ikm: &[],
            salt: None,
            info: None,
            length: <D as Digest>::output_size(),
        }
    }
}

/// Builder for a single HKDF derivation
pub struct HkdfBuilder<'a, D> {
    kdf: &'a Hkdf<D>,
    ikm: &'a [u8],
    salt: Option<&'a [u8]>,
    info: Option<&'a [u8]>,
    length: usize,
}

impl<'a, D> HkdfBuilder<'a, D>
where
    D: Digest + BlockSizeUser + Clone,
{
    /// Input keying material
    pub fn with_ikm(mut self, ikm: &'a [u8]) -> Self {
        self.ikm = ikm;
        self
    }

    /// Extraction salt
    pub fn with_salt(mut self, salt: &'a [u8]) -> Self {
        self.salt = Some(salt);
        self
    }

    /// Expansion context label
    pub fn with_info(mut self, info: &'a [u8]) -> Self {
        self.info = Some(info);
        self
    }

    /// Number of output bytes (defaults to the digest length)
    pub fn with_output_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Run the derivation
    pub fn derive(self) -> Result<Vec<u8>> {
        self.kdf.derive_key(self.ikm, self.salt, self.info, self.length)
    }
}
