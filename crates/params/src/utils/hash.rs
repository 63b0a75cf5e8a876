//! Constants for hash functions

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Largest HKDF output is 255 blocks of the underlying digest
pub const HKDF_MAX_BLOCKS: usize = 255;
