//! Write-buffering unit of work.
//!
//! Commands read and write through a [`UnitOfWork`] layered over the base
//! store. Nothing reaches the base store until [`UnitOfWork::commit`], which
//! hands the whole batch to [`KvStore::apply`]. Dropping an uncommitted unit
//! discards its writes and events.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::PostEvent;
use crate::error::StoreError;
use crate::ports::{KvStore, KvWrite};

/// Pending writes (`None` marks a removal) plus events awaiting commit.
pub struct UnitOfWork<'a> {
    base: &'a dyn KvStore,
    pending: Mutex<BTreeMap<Vec<u8>, Option<Vec<u8>>>>,
    events: Mutex<Vec<PostEvent>>,
}

impl<'a> UnitOfWork<'a> {
    pub fn new(base: &'a dyn KvStore) -> Self {
        Self {
            base,
            pending: Mutex::new(BTreeMap::new()),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Queue an event to be released only if the unit commits.
    pub async fn record_event(&self, event: PostEvent) {
        self.events.lock().await.push(event);
    }

    /// Apply all pending writes atomically and return the queued events.
    pub async fn commit(self) -> Result<Vec<PostEvent>, StoreError> {
        let writes: Vec<KvWrite> = self
            .pending
            .into_inner()
            .into_iter()
            .map(|(key, value)| match value {
                Some(value) => KvWrite::Set { key, value },
                None => KvWrite::Remove { key },
            })
            .collect();

        if !writes.is_empty() {
            tracing::debug!(writes = writes.len(), "Committing unit of work");
            self.base.apply(writes).await?;
        }
        Ok(self.events.into_inner())
    }
}

#[async_trait]
impl<'a> KvStore for UnitOfWork<'a> {
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        if let Some(value) = self.pending.lock().await.get(key) {
            return Ok(value.clone());
        }
        self.base.get(key).await
    }

    async fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError> {
        let mut merged: BTreeMap<Vec<u8>, Vec<u8>> =
            self.base.scan_prefix(prefix).await?.into_iter().collect();

        let pending = self.pending.lock().await;
        for (key, value) in pending.range(prefix.to_vec()..) {
            if !key.starts_with(prefix) {
                break;
            }
            match value {
                Some(value) => merged.insert(key.clone(), value.clone()),
                None => merged.remove(key),
            };
        }
        Ok(merged.into_iter().collect())
    }

    async fn apply(&self, writes: Vec<KvWrite>) -> Result<(), StoreError> {
        let mut pending = self.pending.lock().await;
        for write in writes {
            match write {
                KvWrite::Set { key, value } => pending.insert(key, Some(value)),
                KvWrite::Remove { key } => pending.insert(key, None),
            };
        }
        Ok(())
    }
}
