//! Constants for AEAD ciphers

/// AES-128-GCM key size in bytes
pub const AES128_GCM_KEY_SIZE: usize = 16;

/// AES-256-GCM key size in bytes
pub const AES256_GCM_KEY_SIZE: usize = 32;

/// AES-GCM nonce size in bytes
pub const AES_GCM_NONCE_SIZE: usize = 12;

/// ChaCha20-Poly1305 key size in bytes
pub const CHACHA20POLY1305_KEY_SIZE: usize = 32;

/// ChaCha20-Poly1305 nonce size in bytes
pub const CHACHA20POLY1305_NONCE_SIZE: usize = 12;

/// Authentication tag size shared by both AEADs, in bytes
pub const AEAD_TAG_SIZE: usize = 16;
