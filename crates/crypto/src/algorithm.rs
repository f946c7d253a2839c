//! Signature algorithms a device can be bound to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Signature scheme of a device, fixed at creation.
///
/// On the wire this is exactly `"ECC"` or `"RSA"`; deserialization goes
/// through [`FromStr`], so anything else fails with [`ParseAlgorithmError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Algorithm {
    /// ECDSA over NIST P-384 with SHA-256
    #[serde(rename = "ECC")]
    Ecc,
    /// RSA PKCS#1 v1.5 with SHA-256
    #[serde(rename = "RSA")]
    Rsa,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Ecc, Algorithm::Rsa];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Ecc => "ECC",
            Algorithm::Rsa => "RSA",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an algorithm literal other than `ECC` or `RSA`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(r#"algorithm can be "RSA" or "ECC" (got {0:?})"#)]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ECC" => Ok(Algorithm::Ecc),
            "RSA" => Ok(Algorithm::Rsa),
            other => Err(ParseAlgorithmError(other.to_string())),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = ParseAlgorithmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
