//! Defaults and framing constants for ECIES

/// Default number of symmetric key bytes produced by the KDF
pub const DEFAULT_DERIVED_KEY_SIZE: usize = 32;

/// Separator between the fields of a serialization frame
pub const FRAME_DELIMITER: char = '.';

/// Number of fields in a serialization frame:
/// data length, nonce length, algorithm name, data, nonce
pub const FRAME_PARTS: usize = 5;
