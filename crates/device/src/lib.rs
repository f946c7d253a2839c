//! Signature device management for the Sigchain signing service.
//!
//! A device is a registered identity bound to one asymmetric key pair. Each
//! transaction it signs embeds the previous transaction's signature (or, for
//! the first one, the device key), forming a tamper-evident chain.
//!
//! # Core Concepts
//!
//! - **Device**: key pair, label, signing counter and transaction history
//! - **Chain link**: the value from the previous transaction embedded in the
//!   next signed payload
//! - **Counter**: per-device sequence number, always equal to the number of
//!   signed transactions
//!
//! # Concurrency
//!
//! [`DeviceRegistry`] guards all devices with one reader/writer lock. Lookups
//! run concurrently; device creation and transaction signing are exclusive.
//!
//! # Integration Points
//!
//! Transports talk to a [`DeviceStore`] through [`api::handle`], which maps
//! every failure to a [`Fault`] class.

pub mod api;
pub mod device;
pub mod error;
pub mod registry;
pub mod store;
pub mod types;

pub use api::{handle, handle_json, parse_request, Request, Response, SecretExposure};
pub use device::{
    chain_payload, genesis_link, Device, DeviceWithSecrets, PrivateKeyPem, Transaction,
};
pub use error::{Fault, RegistryError, RegistryResult, ValidationError};
pub use registry::DeviceRegistry;
pub use store::DeviceStore;
pub use types::{
    CreateDeviceInput, CreateTransactionInput, Label, TransactionData, MAX_DATA_CHARS,
    MAX_LABEL_CHARS, MIN_DATA_CHARS,
};

pub use sigchain_crypto::Algorithm;
