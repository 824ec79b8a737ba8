//! JSON state file persistence.
//!
//! The state file is a genesis document: loading it runs the full genesis
//! consistency check before anything reaches the store, and saving exports
//! the live store.

use std::path::{Path, PathBuf};

use thiserror::Error;

use postra_core::domain::GenesisState;
use postra_core::error::GenesisError;
use postra_core::genesis::{export_genesis, init_genesis};
use postra_core::ports::KvStore;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to access state file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed state file {path}: {source}")]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Genesis(#[from] GenesisError),
}

/// A genesis-format JSON file holding the whole store.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file. A missing file is an empty genesis.
    pub async fn read(&self) -> Result<GenesisState, SnapshotError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => self.decode(&bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No state file, starting empty");
                Ok(GenesisState::default())
            }
            Err(source) => Err(self.io_error(source)),
        }
    }

    /// Read a file that must exist, such as a genesis document named by the user.
    pub async fn read_existing(&self) -> Result<GenesisState, SnapshotError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        self.decode(&bytes)
    }

    pub async fn write(&self, state: &GenesisState) -> Result<(), SnapshotError> {
        let json = serde_json::to_vec_pretty(state).map_err(|source| SnapshotError::Format {
            path: self.path.clone(),
            source,
        })?;

        // Write beside the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        tracing::debug!(
            path = %self.path.display(),
            posts = state.post_list.len(),
            "State file written"
        );
        Ok(())
    }

    fn decode(&self, bytes: &[u8]) -> Result<GenesisState, SnapshotError> {
        serde_json::from_slice(bytes).map_err(|source| SnapshotError::Format {
            path: self.path.clone(),
            source,
        })
    }

    /// Read, validate and load the file into `store`.
    pub async fn load_into(&self, store: &dyn KvStore) -> Result<GenesisState, SnapshotError> {
        let state = self.read().await?;
        init_genesis(store, &state).await?;
        Ok(state)
    }

    /// Export `store` and write it out.
    pub async fn save_from(&self, store: &dyn KvStore) -> Result<(), SnapshotError> {
        let state = export_genesis(store).await?;
        self.write(&state).await
    }

    fn io_error(&self, source: std::io::Error) -> SnapshotError {
        SnapshotError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryKvStore;
    use postra_core::domain::Post;

    fn genesis() -> GenesisState {
        GenesisState {
            post_list: vec![Post::new(
                1,
                "postra1aa".into(),
                "Kept".into(),
                "https://example.com".into(),
                "c".repeat(64),
                1_700_000_000,
            )],
            post_count: 4,
            ..GenesisState::default()
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_genesis() {
        let dir = tempfile::tempdir().unwrap();
        let file = SnapshotFile::new(dir.path().join("state.json"));
        assert_eq!(file.read().await.unwrap(), GenesisState::default());
    }

    #[tokio::test]
    async fn test_read_existing_requires_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = SnapshotFile::new(dir.path().join("missing.json"));

        let err = file.read_existing().await.unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::Io { ref source, .. } if source.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = SnapshotFile::new(dir.path().join("state.json"));

        let source = InMemoryKvStore::new();
        init_genesis(&source, &genesis()).await.unwrap();
        file.save_from(&source).await.unwrap();

        let target = InMemoryKvStore::new();
        let loaded = file.load_into(&target).await.unwrap();
        assert_eq!(loaded, genesis());
        assert_eq!(export_genesis(&target).await.unwrap(), genesis());
    }

    #[tokio::test]
    async fn test_inconsistent_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = SnapshotFile::new(dir.path().join("state.json"));

        let mut bad = genesis();
        bad.post_count = 1;
        file.write(&bad).await.unwrap();

        let store = InMemoryKvStore::new();
        let err = file.load_into(&store).await.unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::Genesis(GenesisError::IdOutOfRange { id: 1, count: 1 })
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_garbage_file_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = SnapshotFile::new(path).read().await.unwrap_err();
        assert!(matches!(err, SnapshotError::Format { .. }));
    }
}
