//! Error handling extension traits

use super::types::{Error, Result};

/// Extension trait for Result types
pub trait ResultExt<T, E>: Sized {
    /// Add context to an error when converting to [`Error`]
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>;

    /// Collapse decryption-rejection errors into [`Error::DecryptionRejected`]
    fn redact(self) -> Result<T>
    where
        E: Into<Error>;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(|e| e.into().with_context(context))
    }

    fn redact(self) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(|e| e.into().redact())
    }
}
