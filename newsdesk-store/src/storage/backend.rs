//! Storage Backend Trait
//!
//! TigerStyle: Abstract interface for post storage.
//!
//! All implementations must satisfy the same trait contract. Callers hold
//! `Arc<dyn StorageBackend>` and never name a concrete backend.

use async_trait::async_trait;

use super::error::StorageResult;
use super::post::Post;

/// Who decides a new post's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    /// `Post::id` is stored as given; reuse fails with `DuplicateKey`.
    CallerAssigned,
    /// `Post::id` is ignored; the backend draws the id from a sequence.
    ///
    /// A sequence value colliding with an existing row still fails with
    /// `DuplicateKey`, but the conflicting id is unknown and reported as 0.
    BackendAssigned,
}

/// Where `Post::author_name` comes from on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorNameSource {
    /// Stored with the post; the caller keeps it consistent.
    Stored,
    /// Joined from the authors table; the value written is ignored and a
    /// post without a matching author is not listed.
    Joined,
}

/// Abstract storage backend for posts.
///
/// TigerStyle: All operations are async, return explicit errors.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Short backend name for logs and health output.
    fn name(&self) -> &'static str;

    /// How ids of new posts are chosen.
    fn id_policy(&self) -> IdPolicy;

    /// How `author_name` is produced on read.
    fn author_name_source(&self) -> AuthorNameSource;

    /// List every stored post in ascending id order.
    ///
    /// All-or-nothing: on error no partial result is returned.
    async fn list_posts(&self) -> StorageResult<Vec<Post>>;

    /// Insert a new post.
    ///
    /// Returns the id the post was stored under. Fails with `DuplicateKey`
    /// if that id is already present.
    async fn add_post(&self, post: &Post) -> StorageResult<i64>;

    /// Replace every field but `id` of the post with `post.id`.
    ///
    /// Fails with `EntryNotExist` when nothing matched.
    async fn update_post(&self, post: &Post) -> StorageResult<()>;

    /// Remove the post with `post.id`. Other fields are ignored.
    ///
    /// Fails with `EntryNotExist` when nothing was removed.
    async fn delete_post(&self, post: &Post) -> StorageResult<()>;

    /// Verify the backing medium is reachable without mutating it.
    async fn ping(&self) -> StorageResult<()>;

    /// Release backend resources. Safe to call more than once.
    async fn close(&self);
}
