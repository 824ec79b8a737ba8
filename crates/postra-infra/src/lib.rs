//! # Postra Infrastructure
//!
//! Concrete implementations of the ports defined in `postra-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory adapters only
//! - `snapshot` - JSON state file persistence

pub mod address;
pub mod clock;
pub mod events;
pub mod store;

// Re-exports
pub use address::HexAddressCodec;
pub use clock::{ManualClock, SystemClock};
pub use events::{InMemoryEventSink, TracingEventSink};
pub use store::InMemoryKvStore;

#[cfg(feature = "snapshot")]
pub use store::{SnapshotError, SnapshotFile};
