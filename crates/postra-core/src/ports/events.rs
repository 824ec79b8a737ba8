use async_trait::async_trait;

use crate::domain::Event;

/// Event sink - receives events from committed commands.
///
/// Emission is fire-and-forget; sinks handle their own delivery failures.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: Event);
}
