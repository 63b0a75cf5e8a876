//! Hash capability, including the HKDF built on it

use crate::error::Result;

/// A deterministic digest function that also drives HKDF
pub trait HashFunction: Send + Sync {
    /// Registered hash name
    fn name(&self) -> &'static str;

    /// Digest length in bytes
    fn output_length(&self) -> usize;

    /// Digest of `data`
    fn hash(&self, data: &[u8]) -> Vec<u8>;

    /// HKDF extract-then-expand over this hash
    ///
    /// `salt` and `info` are optional; `length` may not exceed
    /// `255 * output_length()`.
    fn hkdf(
        &self,
        ikm: &[u8],
        salt: Option<&[u8]>,
        info: Option<&[u8]>,
        length: usize,
    ) -> Result<Vec<u8>>;
}
