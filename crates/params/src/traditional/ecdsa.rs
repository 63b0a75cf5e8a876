//! Constants for ECDSA signatures

/// Size of an ECDSA P-521 private key in bytes
pub const ECDSA_P521_PRIVATE_KEY_SIZE: usize = 66;

/// Size of an ECDSA P-521 public key in bytes (compressed format)
pub const ECDSA_P521_PUBLIC_KEY_SIZE: usize = 67;

/// Size of an ECDSA P-521 signature in bytes (r || s)
pub const ECDSA_P521_SIGNATURE_SIZE: usize = 132;

/// Size of an ECDSA secp256k1 private key in bytes
pub const ECDSA_K256_PRIVATE_KEY_SIZE: usize = 32;

/// Size of an ECDSA secp256k1 public key in bytes (uncompressed format)
pub const ECDSA_K256_PUBLIC_KEY_SIZE: usize = 65;

/// Size of an ECDSA secp256k1 signature in bytes (r || s)
pub const ECDSA_K256_SIGNATURE_SIZE: usize = 64;
