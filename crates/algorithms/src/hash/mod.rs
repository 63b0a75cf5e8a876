//! Hash function implementations
//!
//! Every hash is reachable both as a concrete type and through [`HashId`],
//! which maps registered names onto `'static` capability instances.

use core::fmt;
use core::str::FromStr;

use eccrypt_api::{Error, HashFunction};

pub mod sha2;

pub use self::sha2::{Sha256Hash, Sha512Hash};

/// Shared SHA-256 instance
pub static SHA256: Sha256Hash = Sha256Hash;

/// Shared SHA-512 instance
pub static SHA512: Sha512Hash = Sha512Hash;

/// Registered hash functions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashId {
    /// SHA-256
    Sha256,
    /// SHA-512
    Sha512,
}

impl HashId {
    /// Every registered hash, in declaration order
    pub const ALL: [HashId; 2] = [HashId::Sha256, HashId::Sha512];

    /// Registered name
    pub fn name(self) -> &'static str {
        self.capability().name()
    }

    /// The capability instance behind this identifier
    pub fn capability(self) -> &'static dyn HashFunction {
        match self {
            HashId::Sha256 => &SHA256,
            HashId::Sha512 => &SHA512,
        }
    }
}

impl fmt::Display for HashId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace(['-', '_'], "").as_str() {
            "SHA256" => Ok(HashId::Sha256),
            "SHA512" => Ok(HashId::Sha512),
            _ => Err(Error::UnknownAlgorithm {
                kind: "hash",
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests;
