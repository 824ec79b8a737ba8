//! Application state - the store, the service over it, and the file it
//! persists to.

use std::sync::Arc;

use postra_core::PostService;
use postra_infra::{
    HexAddressCodec, InMemoryKvStore, SnapshotError, SnapshotFile, SystemClock, TracingEventSink,
};

use crate::config::CliConfig;

pub struct AppState {
    pub store: Arc<InMemoryKvStore>,
    pub service: PostService,
    pub codec: HexAddressCodec,
    pub snapshot: SnapshotFile,
}

impl AppState {
    /// Build the state and load the configured state file, which must pass
    /// the genesis consistency check.
    pub async fn load(config: &CliConfig) -> Result<Self, SnapshotError> {
        let store = Arc::new(InMemoryKvStore::new());
        let snapshot = SnapshotFile::new(config.state_file.clone());
        snapshot.load_into(store.as_ref()).await?;

        let codec = HexAddressCodec::new(config.address_prefix.clone());
        let service = PostService::new(
            store.clone(),
            Arc::new(codec.clone()),
            Arc::new(SystemClock),
            Arc::new(TracingEventSink),
        );

        tracing::debug!(path = %snapshot.path().display(), "Application state initialized");

        Ok(Self {
            store,
            service,
            codec,
            snapshot,
        })
    }

    /// Write the live store back to the state file.
    pub async fn persist(&self) -> Result<(), SnapshotError> {
        self.snapshot.save_from(self.store.as_ref()).await
    }
}
