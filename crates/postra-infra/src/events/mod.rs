//! Event sink implementations.

mod logged;
mod memory;

pub use logged::TracingEventSink;
pub use memory::InMemoryEventSink;
