//! Event sink that writes events to the tracing log.

use async_trait::async_trait;

use postra_core::domain::Event;
use postra_core::ports::EventSink;

/// Logs each event at info level with its attributes flattened.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

#[async_trait]
impl EventSink for TracingEventSink {
    async fn emit(&self, event: Event) {
        let attributes = event
            .attributes
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(" ");
        tracing::info!(kind = %event.kind, %attributes, "Event emitted");
    }
}
