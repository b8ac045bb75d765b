//! MemoryBackend - Reference Storage
//!
//! TigerStyle: Process-local map behind an async RwLock.
//!
//! No network, no persistence. The duplicate check and the insert happen
//! under one write guard, so concurrent adds of the same id cannot both
//! succeed.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::backend::{AuthorNameSource, IdPolicy, StorageBackend};
use super::error::{StorageError, StorageResult};
use super::post::Post;

// =============================================================================
// MemoryBackend
// =============================================================================

/// In-memory storage backend. Defines the reference semantics.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    posts: RwLock<BTreeMap<i64, Post>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-loaded with posts. Later duplicates win.
    #[must_use]
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let map = posts.into_iter().map(|p| (p.id, p)).collect();
        Self {
            posts: RwLock::new(map),
        }
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    /// True when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

// =============================================================================
// StorageBackend Implementation
// =============================================================================

#[async_trait]
impl StorageBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memdb"
    }

    fn id_policy(&self) -> IdPolicy {
        IdPolicy::CallerAssigned
    }

    fn author_name_source(&self) -> AuthorNameSource {
        AuthorNameSource::Stored
    }

    async fn list_posts(&self) -> StorageResult<Vec<Post>> {
        let posts: Vec<Post> = self.posts.read().await.values().cloned().collect();
        tracing::info!(count = posts.len(), "retrieved posts");
        Ok(posts)
    }

    async fn add_post(&self, post: &Post) -> StorageResult<i64> {
        let mut posts = self.posts.write().await;
        if posts.contains_key(&post.id) {
            tracing::error!(post_id = post.id, "error adding post: duplicate id");
            return Err(StorageError::DuplicateKey { id: post.id });
        }
        posts.insert(post.id, post.clone());

        tracing::info!(post_id = post.id, "post added");
        Ok(post.id)
    }

    async fn update_post(&self, post: &Post) -> StorageResult<()> {
        let mut posts = self.posts.write().await;
        let Some(stored) = posts.get_mut(&post.id) else {
            tracing::error!(post_id = post.id, "error updating post: not found");
            return Err(StorageError::EntryNotExist { id: post.id });
        };
        stored.clone_from(post);

        tracing::info!(post_id = post.id, "post updated");
        Ok(())
    }

    async fn delete_post(&self, post: &Post) -> StorageResult<()> {
        if self.posts.write().await.remove(&post.id).is_none() {
            tracing::error!(post_id = post.id, "error deleting post: not found");
            return Err(StorageError::EntryNotExist { id: post.id });
        }

        tracing::info!(post_id = post.id, "post deleted");
        Ok(())
    }

    async fn ping(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn close(&self) {
        tracing::debug!("memory backend closed");
    }
}

// =============================================================================
// Tests
// =============================================================================
