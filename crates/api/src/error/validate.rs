//! Validation helpers that raise the matching [`Error`] variant

use super::types::{Error, Result};

/// Fail with [`Error::InvalidKeyLength`] unless `actual == expected`.
pub fn key_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKeyLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Fail with [`Error::InvalidParameter`] unless `condition` holds.
pub fn parameter(condition: bool, context: &'static str, message: impl Into<String>) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            message: message.into(),
        });
    }
    Ok(())
}
