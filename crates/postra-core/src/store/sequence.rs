use crate::error::StoreError;
use crate::ports::{KvStore, KvWrite};

use super::POST_COUNT_KEY;

/// Monotonic post id sequence.
///
/// The counter only moves forward; there is no reset or decrement, so an id
/// is never handed out twice even after its post is deleted.
pub struct IdentitySequence<'a> {
    kv: &'a dyn KvStore,
}

impl<'a> IdentitySequence<'a> {
    pub fn new(kv: &'a dyn KvStore) -> Self {
        Self { kv }
    }

    /// The id the next call to [`next`](Self::next) will return.
    pub async fn peek(&self) -> Result<u64, StoreError> {
        match self.kv.get(POST_COUNT_KEY).await? {
            Some(bytes) => decode_count(&bytes),
            None => Ok(0),
        }
    }

    /// Return the current value and persist its successor.
    pub async fn next(&self) -> Result<u64, StoreError> {
        let current = self.peek().await?;
        let successor = current
            .checked_add(1)
            .ok_or_else(|| StoreError::Backend("post sequence exhausted".to_string()))?;
        self.kv.apply(vec![count_write(successor)]).await?;
        tracing::debug!(issued = current, "Post id issued");
        Ok(current)
    }
}

/// Write setting the counter outright. Only genesis import uses this.
pub(crate) fn count_write(count: u64) -> KvWrite {
    KvWrite::Set {
        key: POST_COUNT_KEY.to_vec(),
        value: count.to_be_bytes().to_vec(),
    }
}

fn decode_count(bytes: &[u8]) -> Result<u64, StoreError> {
    let raw: [u8; 8] = bytes
        .try_into()
        .map_err(|_| StoreError::Codec(format!("post count has {} bytes", bytes.len())))?;
    Ok(u64::from_be_bytes(raw))
}
