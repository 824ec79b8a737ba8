//! Domain events emitted by committed lifecycle commands.

use serde::{Deserialize, Serialize};

use super::Post;

/// A named event with ordered string attributes, as accepted by an event sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: String,
    pub attributes: Vec<(String, String)>,
}

impl Event {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Post lifecycle events.
///
/// Both variants carry a snapshot of the post; for deletions this is the
/// state immediately before removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostEvent {
    Created(Post),
    Deleted(Post),
}

impl PostEvent {
    pub const CREATED: &'static str = "post_created";
    pub const DELETED: &'static str = "post_deleted";

    pub fn kind(&self) -> &'static str {
        match self {
            PostEvent::Created(_) => Self::CREATED,
            PostEvent::Deleted(_) => Self::DELETED,
        }
    }
}

impl From<PostEvent> for Event {
    fn from(event: PostEvent) -> Self {
        let kind = event.kind().to_string();
        let post = match event {
            PostEvent::Created(post) | PostEvent::Deleted(post) => post,
        };
        Event {
            kind,
            attributes: vec![
                ("id".to_string(), post.id.to_string()),
                ("creator".to_string(), post.creator),
                ("title".to_string(), post.title),
                ("content_uri".to_string(), post.content_uri),
                ("content_hash".to_string(), post.content_hash),
            ],
        }
    }
}
