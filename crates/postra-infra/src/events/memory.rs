//! In-memory event sink.
//!
//! Keeps every emitted event and fans it out to live subscribers.
//! Works within a single process only.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{RwLock, broadcast};

use postra_core::domain::Event;
use postra_core::ports::EventSink;

/// In-memory event sink with a retained log and broadcast subscribers.
pub struct InMemoryEventSink {
    log: Arc<RwLock<Vec<Event>>>,
    sender: broadcast::Sender<Event>,
}

impl InMemoryEventSink {
    pub fn new(buffer_size: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer_size);
        Self {
            log: Arc::new(RwLock::new(Vec::new())),
            sender,
        }
    }

    /// Receive every event emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Every event emitted so far, oldest first.
    pub async fn events(&self) -> Vec<Event> {
        self.log.read().await.clone()
    }

    /// Emitted events of one kind.
    pub async fn events_of(&self, kind: &str) -> Vec<Event> {
        self.log
            .read()
            .await
            .iter()
            .filter(|e| e.kind == kind)
            .cloned()
            .collect()
    }
}

impl Default for InMemoryEventSink {
    fn default() -> Self {
        Self::new(100)
    }
}

#[async_trait]
impl EventSink for InMemoryEventSink {
    async fn emit(&self, event: Event) {
        self.log.write().await.push(event.clone());

        // Ignore send errors (no subscribers)
        if self.sender.send(event).is_err() {
            tracing::debug!("No subscribers for events");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: &str) -> Event {
        Event {
            kind: kind.to_string(),
            attributes: vec![("id".to_string(), "0".to_string())],
        }
    }

    #[tokio::test]
    async fn test_emit_is_logged() {
        let sink = InMemoryEventSink::default();
        sink.emit(event("post_created")).await;
        sink.emit(event("post_deleted")).await;

        assert_eq!(sink.events().await.len(), 2);
        assert_eq!(sink.events_of("post_deleted").await.len(), 1);
    }

    #[tokio::test]
    async fn test_subscriber_receives_events() {
        let sink = InMemoryEventSink::default();
        let mut rx = sink.subscribe();

        sink.emit(event("post_created")).await;
        assert_eq!(rx.recv().await.unwrap().kind, "post_created");
    }
}
