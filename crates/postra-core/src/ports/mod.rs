//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod address;
mod events;
mod kv;
mod time;

pub use address::AddressCodec;
pub use events::EventSink;
pub use kv::{KvStore, KvWrite};
pub use time::TimeSource;
