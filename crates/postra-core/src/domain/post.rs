use serde::{Deserialize, Serialize};

/// Post entity - a titled pointer to off-chain content owned by its creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub creator: String,
    pub title: String,
    pub content_uri: String,
    pub content_hash: String,
    /// Unix seconds of the block that created the post.
    pub created_at: i64,
}

impl Post {
    /// Build a freshly created post.
    pub fn new(
        id: u64,
        creator: String,
        title: String,
        content_uri: String,
        content_hash: String,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            creator,
            title,
            content_uri,
            content_hash,
            created_at,
        }
    }

    /// Replace the mutable fields, keeping id, creator and creation time.
    pub fn revised(&self, title: String, content_uri: String, content_hash: String) -> Self {
        Self {
            id: self.id,
            creator: self.creator.clone(),
            title,
            content_uri,
            content_hash,
            created_at: self.created_at,
        }
    }

    pub fn is_owned_by(&self, actor: &str) -> bool {
        self.creator == actor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revised_keeps_identity_fields() {
        let post = Post::new(
            7,
            "postra1aa".into(),
            "Old".into(),
            "https://a".into(),
            "h".into(),
            1_700_000_000,
        );
        let updated = post.revised("New".into(), "ipfs://b".into(), "h2".into());

        assert_eq!(updated.id, 7);
        assert_eq!(updated.creator, "postra1aa");
        assert_eq!(updated.created_at, 1_700_000_000);
        assert_eq!(updated.title, "New");
        assert_eq!(updated.content_uri, "ipfs://b");
    }
}
