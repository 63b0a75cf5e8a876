//! ECDSA signature implementations
//!
//! secp256k1 signs with RFC 6979 deterministic nonces; P-521 signs with
//! OS-random nonces. Neither raises on malformed signatures during
//! verification: anything that does not verify is simply `false`.

pub mod k256;
pub mod p521;

pub use self::k256::EcdsaSecp256k1;
pub use self::p521::EcdsaP521;
