//! Post lifecycle service - create, update and delete with ownership checks.
//!
//! Check order is part of the contract. Update runs: address, fields,
//! existence, ownership. Delete runs: address, existence, ownership.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::domain::{Params, Post, PostEvent};
use crate::error::{PostError, StoreError};
use crate::ports::{AddressCodec, EventSink, KvStore, TimeSource};
use crate::store::{IdentitySequence, PARAMS_KEY, RecordStore, UnitOfWork};
use crate::validation::validate_post_fields;

/// Command to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    pub creator: String,
    pub title: String,
    pub content_uri: String,
    pub content_hash: String,
}

/// Command to replace a post's title and content fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePost {
    pub actor: String,
    pub id: u64,
    pub title: String,
    pub content_uri: String,
    pub content_hash: String,
}

/// Command to delete a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePost {
    pub actor: String,
    pub id: u64,
}

/// Orchestrates the post lifecycle over injected ports.
///
/// Each command runs in its own [`UnitOfWork`]: either every write and event
/// of the command lands, or none does. Commands are serialized so the id
/// sequence never hands the same value to two callers.
pub struct PostService {
    store: Arc<dyn KvStore>,
    address_codec: Arc<dyn AddressCodec>,
    clock: Arc<dyn TimeSource>,
    events: Arc<dyn EventSink>,
    serial: Mutex<()>,
}

impl PostService {
    pub fn new(
        store: Arc<dyn KvStore>,
        address_codec: Arc<dyn AddressCodec>,
        clock: Arc<dyn TimeSource>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            store,
            address_codec,
            clock,
            events,
            serial: Mutex::new(()),
        }
    }

    /// Create a post and return its id.
    pub async fn create_post(&self, cmd: CreatePost) -> Result<u64, PostError> {
        let _serial = self.serial.lock().await;

        self.address_codec.string_to_bytes(&cmd.creator)?;
        validate_post_fields(&cmd.title, &cmd.content_uri, &cmd.content_hash)?;

        let uow = UnitOfWork::new(self.store.as_ref());
        let id = IdentitySequence::new(&uow)
            .next()
            .await
            .map_err(|e| persist_failure("failed to get next id", e))?;

        let post = Post::new(
            id,
            cmd.creator,
            cmd.title,
            cmd.content_uri,
            cmd.content_hash,
            self.clock.now().timestamp(),
        );

        RecordStore::new(&uow)
            .set(id, &post)
            .await
            .map_err(|e| persist_failure("failed to set post", e))?;

        let creator = post.creator.clone();
        uow.record_event(PostEvent::Created(post)).await;
        self.commit(uow).await?;
        tracing::info!(post_id = id, creator = %creator, "Post created");

        Ok(id)
    }

    /// Replace title and content fields of an owned post.
    ///
    /// Emits no event.
    pub async fn update_post(&self, cmd: UpdatePost) -> Result<(), PostError> {
        let _serial = self.serial.lock().await;

        self.address_codec.string_to_bytes(&cmd.actor)?;
        validate_post_fields(&cmd.title, &cmd.content_uri, &cmd.content_hash)?;

        let uow = UnitOfWork::new(self.store.as_ref());
        let records = RecordStore::new(&uow);
        let existing = load_post(&records, cmd.id).await?;

        if !existing.is_owned_by(&cmd.actor) {
            tracing::warn!(post_id = cmd.id, actor = %cmd.actor, "Update denied: incorrect owner");
            return Err(PostError::Unauthorized);
        }

        let updated = existing.revised(cmd.title, cmd.content_uri, cmd.content_hash);
        records
            .set(cmd.id, &updated)
            .await
            .map_err(|e| persist_failure("failed to update post", e))?;

        self.commit(uow).await?;
        tracing::info!(post_id = cmd.id, creator = %updated.creator, "Post updated");

        Ok(())
    }

    /// Delete an owned post. Its id is never issued again.
    pub async fn delete_post(&self, cmd: DeletePost) -> Result<(), PostError> {
        let _serial = self.serial.lock().await;

        self.address_codec.string_to_bytes(&cmd.actor)?;

        let uow = UnitOfWork::new(self.store.as_ref());
        let records = RecordStore::new(&uow);
        let existing = load_post(&records, cmd.id).await?;

        if !existing.is_owned_by(&cmd.actor) {
            tracing::warn!(post_id = cmd.id, actor = %cmd.actor, "Delete denied: incorrect owner");
            return Err(PostError::Unauthorized);
        }

        records
            .remove(cmd.id)
            .await
            .map_err(|e| persist_failure("failed to delete post", e))?;

        uow.record_event(PostEvent::Deleted(existing)).await;
        self.commit(uow).await?;
        tracing::info!(post_id = cmd.id, creator = %cmd.actor, "Post deleted");

        Ok(())
    }

    pub async fn get_post(&self, id: u64) -> Result<Post, PostError> {
        load_post(&RecordStore::new(self.store.as_ref()), id).await
    }

    /// All live posts in ascending id order.
    pub async fn list_posts(&self) -> Result<Vec<Post>, PostError> {
        Ok(RecordStore::new(self.store.as_ref()).list().await?)
    }

    /// The id the next created post will receive.
    pub async fn post_count(&self) -> Result<u64, PostError> {
        Ok(IdentitySequence::new(self.store.as_ref()).peek().await?)
    }

    pub async fn params(&self) -> Result<Params, PostError> {
        match self.store.get(PARAMS_KEY).await? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| PostError::PersistFailure(format!("failed to decode params: {e}"))),
            None => Ok(Params::default()),
        }
    }

    async fn commit(&self, uow: UnitOfWork<'_>) -> Result<(), PostError> {
        let events = uow
            .commit()
            .await
            .map_err(|e| persist_failure("failed to commit", e))?;
        for event in events {
            self.events.emit(event.into()).await;
        }
        Ok(())
    }
}

async fn load_post(records: &RecordStore<'_>, id: u64) -> Result<Post, PostError> {
    match records.get(id).await {
        Ok(post) => Ok(post),
        Err(StoreError::NotFound) => Err(PostError::PostNotFound(id)),
        Err(e) => Err(persist_failure("failed to get post", e)),
    }
}

fn persist_failure(context: &str, err: StoreError) -> PostError {
    tracing::error!(error = %err, "{context}");
    PostError::PersistFailure(format!("{context}: {err}"))
}
