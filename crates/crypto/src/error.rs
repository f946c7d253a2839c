//! Error types for key handling and signing.

use thiserror::Error;

/// Errors produced by key generation, key encoding and signing.
///
/// Reasons carry the underlying library message only; key material is never
/// formatted into an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Key generation failed: {reason}")]
    KeyGenerationFailed { reason: String },

    #[error("Key encoding failed: {reason}")]
    EncodingFailed { reason: String },

    #[error("Key decoding failed: {reason}")]
    DecodingFailed { reason: String },

    #[error("Signing failed: {reason}")]
    SigningFailed { reason: String },

    #[error("Signature verification failed: {reason}")]
    VerificationFailed { reason: String },
}

impl CryptoError {
    pub(crate) fn key_generation(err: impl std::fmt::Display) -> Self {
        Self::KeyGenerationFailed {
            reason: err.to_string(),
        }
    }

    pub(crate) fn encoding(err: impl std::fmt::Display) -> Self {
        Self::EncodingFailed {
            reason: err.to_string(),
        }
    }

    pub(crate) fn decoding(err: impl std::fmt::Display) -> Self {
        Self::DecodingFailed {
            reason: err.to_string(),
        }
    }

    pub(crate) fn signing(err: impl std::fmt::Display) -> Self {
        Self::SigningFailed {
            reason: err.to_string(),
        }
    }

    pub(crate) fn verification(err: impl std::fmt::Display) -> Self {
        Self::VerificationFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;
