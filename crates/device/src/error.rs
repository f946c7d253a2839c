//! Error types for device registry operations and boundary validation.

use serde::Serialize;
use sigchain_crypto::CryptoError;
use thiserror::Error;
use uuid::Uuid;

/// How a failure should be surfaced to the caller of a transport adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Fault {
    /// Malformed or out-of-range input
    ClientInput,
    NotFound,
    /// Duplicate device identifier
    Conflict,
    /// Key generation, encoding or signing failure
    Internal,
}

impl Fault {
    /// Conventional HTTP status for this fault class.
    pub fn status_code(&self) -> u16 {
        match self {
            Fault::ClientInput => 400,
            Fault::NotFound => 404,
            Fault::Conflict => 409,
            Fault::Internal => 500,
        }
    }
}

/// Input rejected before it reaches the registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(r#"algorithm can be "RSA" or "ECC" (got {0:?})"#)]
    InvalidAlgorithm(String),

    #[error("label is too long: {length} characters (max {max})")]
    LabelTooLong { length: usize, max: usize },

    #[error("data must be between {min} and {max} characters (got {length})")]
    DataSize {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

impl ValidationError {
    pub fn fault(&self) -> Fault {
        Fault::ClientInput
    }
}

impl From<sigchain_crypto::ParseAlgorithmError> for ValidationError {
    fn from(err: sigchain_crypto::ParseAlgorithmError) -> Self {
        ValidationError::InvalidAlgorithm(err.0)
    }
}

/// Errors returned by [`crate::DeviceStore`] operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("device not found: {key}")]
    DeviceNotFound { key: Uuid },

    #[error("transaction {counter} not found for device {key}")]
    TransactionNotFound { key: Uuid, counter: u64 },

    #[error("device already exists: {key}")]
    DeviceAlreadyExists { key: Uuid },

    #[error("key generation failed for device {key}: {source}")]
    KeyGeneration {
        key: Uuid,
        #[source]
        source: CryptoError,
    },

    #[error("signing failed for device {key}: {source}")]
    Signing {
        key: Uuid,
        #[source]
        source: CryptoError,
    },

    #[error("device registry lock poisoned")]
    LockPoisoned,
}

impl RegistryError {
    pub fn fault(&self) -> Fault {
        match self {
            RegistryError::DeviceNotFound { .. } | RegistryError::TransactionNotFound { .. } => {
                Fault::NotFound
            }
            RegistryError::DeviceAlreadyExists { .. } => Fault::Conflict,
            RegistryError::KeyGeneration { .. }
            | RegistryError::Signing { .. }
            | RegistryError::LockPoisoned => Fault::Internal,
        }
    }
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
