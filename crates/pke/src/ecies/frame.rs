//! Self-describing ciphertext frame
//!
//! `<hex_data_len>.<hex_nonce_len>.<algorithm>.<data_hex>.<nonce_hex>`
//!
//! Both length fields are lowercase hexadecimal counts of the characters in
//! the hex field they describe, so `"20"` announces 32 hex characters, i.e.
//! 16 bytes.

use core::fmt;
use core::str::FromStr;

use eccrypt_api::error::validate;
use eccrypt_api::{Error, Result};
use eccrypt_params::ecies::{FRAME_DELIMITER, FRAME_PARTS};

/// A parsed serialization frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// AEAD output, tag included
    pub data: Vec<u8>,
    /// AEAD nonce
    pub nonce: Vec<u8>,
    /// Name of the symmetric cipher that produced `data`
    pub algorithm: String,
}

impl Frame {
    /// Assemble a frame, rejecting algorithm names the format cannot carry
    pub fn new(data: Vec<u8>, nonce: Vec<u8>, algorithm: impl Into<String>) -> Result<Self> {
        let algorithm = algorithm.into();
        check_algorithm_name(&algorithm)?;
        Ok(Self {
            data,
            nonce,
            algorithm,
        })
    }

    /// Fail with [`Error::AlgorithmMismatch`] unless the frame was produced
    /// by `expected`
    pub fn verify_algorithm(&self, expected: &'static str) -> Result<()> {
        if self.algorithm != expected {
            return Err(Error::AlgorithmMismatch {
                expected,
                found: self.algorithm.clone(),
            });
        }
        Ok(())
    }

    /// ASCII bytes of the textual frame
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data_hex = hex::encode(&self.data);
        let nonce_hex = hex::encode(&self.nonce);
        write!(
            f,
            "{:x}{d}{:x}{d}{}{d}{}{d}{}",
            data_hex.len(),
            nonce_hex.len(),
            self.algorithm,
            data_hex,
            nonce_hex,
            d = FRAME_DELIMITER
        )
    }
}

impl FromStr for Frame {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        deserialize(s.as_bytes())
    }
}

fn check_algorithm_name(algorithm: &str) -> Result<()> {
    validate::parameter(
        !algorithm.is_empty(),
        "frame algorithm",
        "algorithm name is empty",
    )?;
    validate::parameter(
        !algorithm.contains(FRAME_DELIMITER),
        "frame algorithm",
        format!("algorithm name {algorithm:?} contains the frame delimiter"),
    )
}

/// Encode `data` and `nonce` into a frame tagged with `algorithm`
pub fn serialize(data: &[u8], nonce: &[u8], algorithm: &str) -> Result<Vec<u8>> {
    check_algorithm_name(algorithm)?;
    let frame = Frame {
        data: data.to_vec(),
        nonce: nonce.to_vec(),
        algorithm: algorithm.to_string(),
    };
    Ok(frame.to_bytes())
}

fn parse_length(field: &str) -> Result<usize> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::MalformedFrame {
            reason: "length prefix is not a hexadecimal number",
        });
    }
    usize::from_str_radix(field, 16).map_err(|_| Error::MalformedFrame {
        reason: "length prefix out of range",
    })
}

/// Parse a frame, checking every length prefix against its field
pub fn deserialize(frame: &[u8]) -> Result<Frame> {
    let text = core::str::from_utf8(frame).map_err(|_| Error::MalformedFrame {
        reason: "frame is not valid UTF-8",
    })?;

    let parts: Vec<&str> = text.split(FRAME_DELIMITER).collect();
    let [data_len, nonce_len, algorithm, data_hex, nonce_hex] = parts[..] else {
        tracing::trace!(parts = parts.len(), expected = FRAME_PARTS, "bad frame shape");
        return Err(Error::MalformedFrame {
            reason: "expected five dot-separated fields",
        });
    };

    if parse_length(data_len)? != data_hex.len() {
        return Err(Error::MalformedFrame {
            reason: "data length prefix does not match the data field",
        });
    }
    if parse_length(nonce_len)? != nonce_hex.len() {
        return Err(Error::MalformedFrame {
            reason: "nonce length prefix does not match the nonce field",
        });
    }

    let data = hex::decode(data_hex).map_err(|_| Error::MalformedFrame {
        reason: "data field is not valid hexadecimal",
    })?;
    let nonce = hex::decode(nonce_hex).map_err(|_| Error::MalformedFrame {
        reason: "nonce field is not valid hexadecimal",
    })?;

    Ok(Frame {
        data,
        nonce,
        algorithm: algorithm.to_string(),
    })
}
