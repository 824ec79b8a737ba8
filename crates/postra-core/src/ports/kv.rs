use async_trait::async_trait;

use crate::error::StoreError;

/// A single buffered write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KvWrite {
    Set { key: Vec<u8>, value: Vec<u8> },
    Remove { key: Vec<u8> },
}

/// Durable keyed store backing both the id sequence and the post records.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read a value. `Ok(None)` means the key is absent.
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// All entries whose key starts with `prefix`, in ascending key order.
    async fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError>;

    /// Apply a batch of writes atomically: either every write lands or none does.
    async fn apply(&self, writes: Vec<KvWrite>) -> Result<(), StoreError>;
}
