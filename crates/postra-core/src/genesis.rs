//! Genesis import and export.
//!
//! Genesis loading is a separate path from the lifecycle commands: the whole
//! collection is checked first, then written in one batch without events or
//! ownership checks.

use std::collections::HashSet;

use crate::domain::{GenesisState, Params};
use crate::error::{GenesisError, StoreError};
use crate::ports::{KvStore, KvWrite};
use crate::store::{IdentitySequence, PARAMS_KEY, RecordStore};

impl GenesisState {
    /// Check the collection against the declared count.
    ///
    /// Posts are visited in the order given. Each post is first checked for a
    /// repeated id, then for an id at or beyond `post_count`. Params are
    /// validated last.
    pub fn validate(&self) -> Result<(), GenesisError> {
        let mut seen = HashSet::with_capacity(self.post_list.len());
        for post in &self.post_list {
            if !seen.insert(post.id) {
                return Err(GenesisError::DuplicateId(post.id));
            }
            if post.id >= self.post_count {
                return Err(GenesisError::IdOutOfRange {
                    id: post.id,
                    count: self.post_count,
                });
            }
        }

        self.params.validate()
    }
}

/// Validate `state` and, only if it passes, load it into `store` atomically.
pub async fn init_genesis(store: &dyn KvStore, state: &GenesisState) -> Result<(), GenesisError> {
    if let Err(err) = state.validate() {
        tracing::warn!(error = %err, "Genesis rejected");
        return Err(err);
    }

    let mut writes = Vec::with_capacity(state.post_list.len() + 2);
    writes.push(params_write(&state.params)?);
    for post in &state.post_list {
        writes.push(crate::store::records::record_write(post.id, post)?);
    }
    writes.push(crate::store::sequence::count_write(state.post_count));

    store.apply(writes).await?;
    tracing::info!(
        posts = state.post_list.len(),
        post_count = state.post_count,
        "Genesis loaded"
    );
    Ok(())
}

/// Read the current state back out as a genesis document.
pub async fn export_genesis(store: &dyn KvStore) -> Result<GenesisState, GenesisError> {
    let params = match store.get(PARAMS_KEY).await? {
        Some(bytes) => {
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Codec(e.to_string()))?
        }
        None => Params::default(),
    };

    Ok(GenesisState {
        params,
        post_list: RecordStore::new(store).list().await?,
        post_count: IdentitySequence::new(store).peek().await?,
    })
}

fn params_write(params: &Params) -> Result<KvWrite, StoreError> {
    let value = serde_json::to_vec(params).map_err(|e| StoreError::Codec(e.to_string()))?;
    Ok(KvWrite::Set {
        key: PARAMS_KEY.to_vec(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Post;
    use crate::store::unit_of_work::tests::MapStore;

    fn post(id: u64) -> Post {
        Post::new(
            id,
            "postra1abcd".into(),
            format!("Post {id}"),
            "https://example.com".into(),
            "b".repeat(64),
            1_700_000_000,
        )
    }

    fn state(ids: &[u64], post_count: u64) -> GenesisState {
        GenesisState {
            params: Params::default(),
            post_list: ids.iter().copied().map(post).collect(),
            post_count,
        }
    }

    #[test]
    fn test_default_genesis_is_valid() {
        assert!(GenesisState::default().validate().is_ok());
    }

    #[test]
    fn test_valid_genesis() {
        assert!(state(&[0, 1], 2).validate().is_ok());
        // Gaps left by deletions are fine.
        assert!(state(&[1, 4], 7).validate().is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let err = state(&[0, 0], 2).validate().unwrap_err();
        assert!(matches!(err, GenesisError::DuplicateId(0)));
    }

    #[test]
    fn test_id_out_of_range() {
        let err = state(&[0, 2], 2).validate().unwrap_err();
        assert!(matches!(err, GenesisError::IdOutOfRange { id: 2, count: 2 }));

        let err = state(&[0], 0).validate().unwrap_err();
        assert!(matches!(err, GenesisError::IdOutOfRange { id: 0, count: 0 }));
    }

    #[test]
    fn test_first_failure_in_input_order_wins() {
        // id 5 is out of range before the duplicate 0 is reached.
        let err = state(&[0, 5, 0], 2).validate().unwrap_err();
        assert!(matches!(err, GenesisError::IdOutOfRange { id: 5, .. }));

        // An out-of-range id fails on first sight, before it can repeat.
        let err = state(&[3, 3], 2).validate().unwrap_err();
        assert!(matches!(err, GenesisError::IdOutOfRange { id: 3, .. }));
    }

    #[tokio::test]
    async fn test_init_then_export_round_trips() {
        let store = MapStore::default();
        let genesis = state(&[0, 2], 3);

        init_genesis(&store, &genesis).await.unwrap();
        let exported = export_genesis(&store).await.unwrap();

        assert_eq!(exported, genesis);
        assert!(exported.validate().is_ok());
    }

    #[tokio::test]
    async fn test_invalid_genesis_writes_nothing() {
        let store = MapStore::default();

        let err = init_genesis(&store, &state(&[0, 0], 2)).await.unwrap_err();
        assert!(matches!(err, GenesisError::DuplicateId(0)));
        assert!(store.map.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_export_empty_store() {
        let store = MapStore::default();
        assert_eq!(export_genesis(&store).await.unwrap(), GenesisState::default());
    }
}
