//! Core functionality for the Sigchain signing service.
//!
//! This crate provides the shared error type, configuration, and logging
//! setup used across the Sigchain workspace.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, LogFormat, LoggingConfig, RegistryConfig};
pub use error::{Error, Result};
