//! Constants for Elliptic Curve Diffie-Hellman

/// Size of private key for ECDH using P-521 in bytes
pub const ECDH_P521_PRIVATE_KEY_SIZE: usize = 66;

/// Size of public key for ECDH using P-521 in bytes (compressed format)
pub const ECDH_P521_PUBLIC_KEY_SIZE: usize = 67;

/// Size of the ECDH P-521 shared point in bytes (uncompressed SEC1)
pub const ECDH_P521_SHARED_SECRET_SIZE: usize = 133;

/// HKDF output length used when stretching a seed into a P-521 scalar.
/// 520 bits always stays below the group order once left-padded to 66 bytes.
pub const ECDH_P521_SEED_EXPANSION_SIZE: usize = 65;

/// Size of private key for ECDH using secp256k1 in bytes
pub const ECDH_K256_PRIVATE_KEY_SIZE: usize = 32;

/// Size of public key for ECDH using secp256k1 in bytes (uncompressed format)
pub const ECDH_K256_PUBLIC_KEY_SIZE: usize = 65;

/// Size of the ECDH secp256k1 shared point in bytes (compressed SEC1)
pub const ECDH_K256_SHARED_SECRET_SIZE: usize = 33;

/// Size of private key for X25519 in bytes
pub const X25519_PRIVATE_KEY_SIZE: usize = 32;

/// Size of public key for X25519 in bytes
pub const X25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of shared secret for X25519 in bytes
pub const X25519_SHARED_SECRET_SIZE: usize = 32;
