//! Configuration management for Sigchain.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Result};

/// Smallest RSA modulus the signer can produce a PKCS#1 v1.5 / SHA-256
/// signature with (DigestInfo + 11 bytes of padding).
pub const MIN_RSA_MODULUS_BITS: usize = 512;

/// Largest RSA modulus accepted by the key decoder.
pub const MAX_RSA_MODULUS_BITS: usize = 4096;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub registry: RegistryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RegistryConfig {
    /// RSA modulus size for newly created devices.
    ///
    /// The default of 512 bits is a demonstration parameter and is NOT secure.
    pub rsa_modulus_bits: usize,
    /// Include private keys when devices are rendered for a caller.
    pub expose_private_keys: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            rsa_modulus_bits: MIN_RSA_MODULUS_BITS,
            expose_private_keys: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback filter when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let bits = self.registry.rsa_modulus_bits;
        if !(MIN_RSA_MODULUS_BITS..=MAX_RSA_MODULUS_BITS).contains(&bits) {
            return Err(Error::Config(format!(
                "registry.rsa_modulus_bits must be within {}..={} (got {})",
                MIN_RSA_MODULUS_BITS, MAX_RSA_MODULUS_BITS, bits
            )));
        }
        if bits % 8 != 0 {
            return Err(Error::Config(format!(
                "registry.rsa_modulus_bits must be a multiple of 8 (got {})",
                bits
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(Error::Config("logging.level must not be empty".to_string()));
        }
        Ok(())
    }
}
