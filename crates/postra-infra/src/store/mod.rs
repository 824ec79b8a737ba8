//! Keyed store implementations.

mod memory;

#[cfg(feature = "snapshot")]
mod snapshot;

pub use memory::InMemoryKvStore;

#[cfg(feature = "snapshot")]
pub use snapshot::{SnapshotError, SnapshotFile};
