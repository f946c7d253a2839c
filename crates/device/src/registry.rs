//! In-memory, thread-safe device registry.
//!
//! All devices live in one map behind a single `RwLock`: `list`/`find` take
//! the read lock, `create_device`/`create_transaction` take the write lock.
//!
//! # Atomicity
//!
//! - Device creation checks for the key and inserts under one write-lock
//!   acquisition. Key generation happens before that, outside the lock.
//! - Transaction creation reads the counter and previous link, signs, appends
//!   and increments under one write-lock acquisition, so two concurrent
//!   transactions on a device can never share a counter.
//! - Every fallible step runs before the device is mutated. A failed signing
//!   attempt leaves the device exactly as it was.
//!
//! A poisoned lock is reported as [`RegistryError::LockPoisoned`] on every
//! later call rather than papered over.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sigchain_crypto::AlgorithmRegistry;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::device::{Device, Transaction};
use crate::error::{RegistryError, RegistryResult};
use crate::store::DeviceStore;
use crate::types::{CreateDeviceInput, CreateTransactionInput};

/// Concurrent collection of signature devices.
///
/// Cloning is cheap and yields a handle to the same registry.
#[derive(Debug, Clone)]
pub struct DeviceRegistry {
    devices: Arc<RwLock<HashMap<Uuid, Device>>>,
    algorithms: AlgorithmRegistry,
}

impl DeviceRegistry {
    pub fn new(algorithms: AlgorithmRegistry) -> Self {
        Self {
            devices: Arc::new(RwLock::new(HashMap::new())),
            algorithms,
        }
    }

    pub fn algorithms(&self) -> &AlgorithmRegistry {
        &self.algorithms
    }

    /// Snapshot of every device, in no particular order.
    pub fn list_devices(&self) -> RegistryResult<Vec<Device>> {
        Ok(self.read()?.values().cloned().collect())
    }

    pub fn find_device(&self, key: Uuid) -> RegistryResult<Device> {
        self.read()?
            .get(&key)
            .cloned()
            .ok_or(RegistryError::DeviceNotFound { key })
    }

    pub fn find_transaction(&self, key: Uuid, counter: u64) -> RegistryResult<Transaction> {
        let devices = self.read()?;
        let device = devices
            .get(&key)
            .ok_or(RegistryError::DeviceNotFound { key })?;

        usize::try_from(counter)
            .ok()
            .and_then(|index| device.transactions().get(index))
            .cloned()
            .ok_or(RegistryError::TransactionNotFound { key, counter })
    }

    pub fn create_device(&self, input: CreateDeviceInput) -> RegistryResult<Device> {
        let CreateDeviceInput {
            key,
            algorithm,
            label,
        } = input;

        // Cheap rejection before spending entropy on a key pair.
        if self.read()?.contains_key(&key) {
            warn!(device_id = %key, "Rejected duplicate device");
            return Err(RegistryError::DeviceAlreadyExists { key });
        }

        let keys = self
            .algorithms
            .generate(algorithm)
            .map_err(|source| RegistryError::KeyGeneration { key, source })?;
        let device = Device::new(key, algorithm, label, keys);

        match self.write()?.entry(key) {
            Entry::Occupied(_) => {
                warn!(device_id = %key, "Rejected duplicate device");
                Err(RegistryError::DeviceAlreadyExists { key })
            }
            Entry::Vacant(slot) => {
                info!(
                    device_id = %key,
                    algorithm = %algorithm,
                    fingerprint = %device.fingerprint(),
                    "Device created"
                );
                Ok(slot.insert(device).clone())
            }
        }
    }

    pub fn create_transaction(&self, input: CreateTransactionInput) -> RegistryResult<Transaction> {
        let key = input.device_key;
        let mut devices = self.write()?;
        let device = devices
            .get_mut(&key)
            .ok_or(RegistryError::DeviceNotFound { key })?;

        let payload = device.next_payload(input.data.as_str());
        let signature = self
            .algorithms
            .sign(
                device.algorithm(),
                device.private_key().expose(),
                payload.as_bytes(),
            )
            .map_err(|source| {
                warn!(device_id = %key, error = %source, "Signing failed");
                RegistryError::Signing { key, source }
            })?;

        let transaction = Transaction {
            signature,
            signed_data: payload,
        };
        device.append(transaction.clone());

        debug!(
            device_id = %key,
            counter = device.counter(),
            "Transaction signed"
        );

        Ok(transaction)
    }

    fn read(&self) -> RegistryResult<RwLockReadGuard<'_, HashMap<Uuid, Device>>> {
        self.devices.read().map_err(|e| {
            error!(error = %e, "Device registry lock poisoned");
            RegistryError::LockPoisoned
        })
    }

    fn write(&self) -> RegistryResult<RwLockWriteGuard<'_, HashMap<Uuid, Device>>> {
        self.devices.write().map_err(|e| {
            error!(error = %e, "Device registry lock poisoned");
            RegistryError::LockPoisoned
        })
    }

    #[cfg(test)]
    fn insert_for_test(&self, device: Device) {
        self.write().unwrap().insert(device.key(), device);
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new(AlgorithmRegistry::default())
    }
}

impl DeviceStore for DeviceRegistry {
    fn list_devices(&self) -> RegistryResult<Vec<Device>> {
        DeviceRegistry::list_devices(self)
    }

    fn find_device(&self, key: Uuid) -> RegistryResult<Device> {
        DeviceRegistry::find_device(self, key)
    }

    fn find_transaction(&self, key: Uuid, counter: u64) -> RegistryResult<Transaction> {
        DeviceRegistry::find_transaction(self, key, counter)
    }

    fn create_device(&self, input: CreateDeviceInput) -> RegistryResult<Device> {
        DeviceRegistry::create_device(self, input)
    }

    fn create_transaction(&self, input: CreateTransactionInput) -> RegistryResult<Transaction> {
        DeviceRegistry::create_transaction(self, input)
    }
}
