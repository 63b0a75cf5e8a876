//! Error type definitions for eccrypt operations

use thiserror::Error as ThisError;

/// Primary error type for key handling, framing and encryption operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Key byte length does not match what the curve or scheme declares
    #[error("{context}: invalid key length (expected {expected}, got {actual})")]
    InvalidKeyLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Key has the right length but is not a valid scalar or point
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Deterministic seed expansion did not produce a usable private key
    #[error("Seed expansion failed: expected a valid {expected}-byte key, got {actual} bytes")]
    SeedExpansionFailed { expected: usize, actual: usize },

    /// AEAD tag verification failed
    #[error("Authentication failed: {context}")]
    AuthenticationFailed { context: &'static str },

    /// Serialization frame does not parse into five length-consistent parts
    #[error("Malformed frame: {reason}")]
    MalformedFrame { reason: &'static str },

    /// Frame is tagged with a different symmetric algorithm than the one configured
    #[error("Algorithm mismatch: expected {expected}, frame declares {found}")]
    AlgorithmMismatch {
        expected: &'static str,
        found: String,
    },

    /// Externally observable decryption failure with the detailed reason removed
    #[error("Decryption rejected")]
    DecryptionRejected,

    /// HKDF could not produce the requested output
    #[error("Key derivation failed: {context}: {message}")]
    KeyDerivationFailed {
        context: &'static str,
        message: String,
    },

    /// Invalid configuration or call parameter
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Input could not be normalised (bad hex, bad UTF-8)
    #[error("Encoding error: {context}: {message}")]
    Encoding {
        context: &'static str,
        message: String,
    },

    /// Algorithm identifier not registered
    #[error("Unknown {kind} algorithm: {name}")]
    UnknownAlgorithm { kind: &'static str, name: String },

    /// Signature generation failed inside the primitive
    #[error("Signature generation failed: {context}: {message}")]
    SignatureFailed {
        context: &'static str,
        message: String,
    },
}

/// Result type for eccrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// True for every failure a decrypting party must report as a single
    /// "decryption rejected" outcome.
    pub fn is_decryption_rejection(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed { .. }
                | Self::AlgorithmMismatch { .. }
                | Self::MalformedFrame { .. }
                | Self::DecryptionRejected
        )
    }

    /// Collapse decryption-rejection kinds into [`Error::DecryptionRejected`].
    ///
    /// Other errors (bad key lengths, bad configuration) are caller mistakes
    /// rather than attacker-controlled outcomes and pass through unchanged.
    pub fn redact(self) -> Self {
        if self.is_decryption_rejection() {
            tracing::debug!(error = %self, "redacting decryption failure");
            Self::DecryptionRejected
        } else {
            self
        }
    }

    /// Replace the context of context-carrying variants
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKeyLength { expected, actual, .. } => Self::InvalidKeyLength {
                context,
                expected,
                actual,
            },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::AuthenticationFailed { .. } => Self::AuthenticationFailed { context },
            Self::KeyDerivationFailed { message, .. } => {
                Self::KeyDerivationFailed { context, message }
            }
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Encoding { message, .. } => Self::Encoding { context, message },
            Self::SignatureFailed { message, .. } => Self::SignatureFailed { context, message },
            other => other,
        }
    }
}
