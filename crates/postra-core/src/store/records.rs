use crate::domain::Post;
use crate::error::StoreError;
use crate::ports::{KvStore, KvWrite};

use super::POST_VALUE_PREFIX;

/// Post records keyed by id.
pub struct RecordStore<'a> {
    kv: &'a dyn KvStore,
}

impl<'a> RecordStore<'a> {
    pub fn new(kv: &'a dyn KvStore) -> Self {
        Self { kv }
    }

    /// Fetch a post. A missing id is [`StoreError::NotFound`].
    pub async fn get(&self, id: u64) -> Result<Post, StoreError> {
        tracing::debug!(post_id = id, "Loading post");
        let bytes = self
            .kv
            .get(&record_key(id))
            .await?
            .ok_or(StoreError::NotFound)?;
        decode(&bytes)
    }

    pub async fn set(&self, id: u64, post: &Post) -> Result<(), StoreError> {
        self.kv.apply(vec![record_write(id, post)?]).await
    }

    pub async fn remove(&self, id: u64) -> Result<(), StoreError> {
        self.kv
            .apply(vec![KvWrite::Remove {
                key: record_key(id),
            }])
            .await
    }

    /// Every stored post in ascending id order.
    pub async fn list(&self) -> Result<Vec<Post>, StoreError> {
        self.kv
            .scan_prefix(POST_VALUE_PREFIX)
            .await?
            .iter()
            .map(|(_, value)| decode(value))
            .collect()
    }
}

pub(crate) fn record_key(id: u64) -> Vec<u8> {
    let mut key = Vec::with_capacity(POST_VALUE_PREFIX.len() + 8);
    key.extend_from_slice(POST_VALUE_PREFIX);
    key.extend_from_slice(&id.to_be_bytes());
    key
}

pub(crate) fn record_write(id: u64, post: &Post) -> Result<KvWrite, StoreError> {
    let value = serde_json::to_vec(post).map_err(|e| StoreError::Codec(e.to_string()))?;
    Ok(KvWrite::Set {
        key: record_key(id),
        value,
    })
}

fn decode(bytes: &[u8]) -> Result<Post, StoreError> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Codec(e.to_string()))
}
