//! In-memory keyed store.
//!
//! An ordered map behind an async RwLock. Batches are applied under a single
//! write lock, so readers see either none or all of a batch.
//! Note: Data is lost on process restart unless exported.

use std::collections::BTreeMap;
use std::ops::Bound;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postra_core::error::StoreError;
use postra_core::ports::{KvStore, KvWrite};

#[derive(Default)]
pub struct InMemoryKvStore {
    map: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_empty(&self) -> bool {
        self.map.read().await.is_empty()
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.map.read().await.get(key).cloned())
    }

    async fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError> {
        let map = self.map.read().await;
        let range = map.range::<[u8], _>((Bound::Included(prefix), Bound::Unbounded));
        Ok(range
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    async fn apply(&self, writes: Vec<KvWrite>) -> Result<(), StoreError> {
        let mut map = self.map.write().await;
        for write in writes {
            match write {
                KvWrite::Set { key, value } => {
                    map.insert(key, value);
                }
                KvWrite::Remove { key } => {
                    map.remove(&key);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(key: &str, value: &str) -> KvWrite {
        KvWrite::Set {
            key: key.as_bytes().to_vec(),
            value: value.as_bytes().to_vec(),
        }
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemoryKvStore::new();
        store.apply(vec![set("key1", "value1")]).await.unwrap();
        assert_eq!(store.get(b"key1").await.unwrap(), Some(b"value1".to_vec()));
        assert_eq!(store.get(b"key2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemoryKvStore::new();
        store.apply(vec![set("key1", "value1")]).await.unwrap();
        store
            .apply(vec![KvWrite::Remove {
                key: b"key1".to_vec(),
            }])
            .await
            .unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_scan_prefix_stays_inside_prefix() {
        let store = InMemoryKvStore::new();
        store
            .apply(vec![
                set("a", "0"),
                set("p/2", "2"),
                set("p/1", "1"),
                set("q/1", "x"),
            ])
            .await
            .unwrap();

        let entries = store.scan_prefix(b"p/").await.unwrap();
        let keys: Vec<&[u8]> = entries.iter().map(|(k, _)| k.as_slice()).collect();
        assert_eq!(keys, [b"p/1".as_slice(), b"p/2".as_slice()]);
    }
}
