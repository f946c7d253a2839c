//! Storage seam for signature devices.

use uuid::Uuid;

use crate::device::{Device, Transaction};
use crate::error::RegistryResult;
use crate::types::{CreateDeviceInput, CreateTransactionInput};

/// Device and transaction operations offered to transport adapters.
///
/// [`crate::DeviceRegistry`] is the in-memory implementation. Persistent
/// back-ends implement the same contract: unique keys, and per device a
/// gap-free counter that always equals the number of stored transactions.
pub trait DeviceStore: Send + Sync {
    /// Snapshot of every device, in no particular order.
    fn list_devices(&self) -> RegistryResult<Vec<Device>>;

    fn find_device(&self, key: Uuid) -> RegistryResult<Device>;

    /// The transaction signed with `counter` on device `key`.
    fn find_transaction(&self, key: Uuid, counter: u64) -> RegistryResult<Transaction>;

    fn create_device(&self, input: CreateDeviceInput) -> RegistryResult<Device>;

    /// Signs `input.data` as the device's next chained transaction.
    fn create_transaction(&self, input: CreateTransactionInput) -> RegistryResult<Transaction>;
}
