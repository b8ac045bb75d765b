//! Contract Suite
//!
//! Backend-agnostic checks every `StorageBackend` must pass. Each check
//! expects an empty backend whose author rows (if any) already cover the
//! sample posts, and leaves the backend in whatever state it ends in.

use super::backend::{AuthorNameSource, IdPolicy, StorageBackend};
use super::error::StorageError;
use super::post::Post;
use crate::constants::POST_ID_NONEXISTENT;
use crate::samples::sample_posts;

/// Add all sample posts, asserting each lands under its own id.
pub(crate) async fn seed(backend: &dyn StorageBackend) -> Vec<Post> {
    assert_eq!(
        backend.id_policy(),
        IdPolicy::CallerAssigned,
        "contract suite seeds with explicit ids"
    );

    let posts = sample_posts();
    for post in &posts {
        let id = backend.add_post(post).await.unwrap();
        assert_eq!(id, post.id);
    }
    posts
}

pub(crate) async fn add_then_list(backend: &dyn StorageBackend) {
    let post = sample_posts().remove(0);
    backend.add_post(&post).await.unwrap();

    let listed = backend.list_posts().await.unwrap();
    let matching: Vec<&Post> = listed.iter().filter(|p| p.id == post.id).collect();
    assert_eq!(matching, vec![&post]);
}

pub(crate) async fn list_returns_all_in_id_order(backend: &dyn StorageBackend) {
    let posts = seed(backend).await;
    assert_eq!(backend.list_posts().await.unwrap(), posts);
}

pub(crate) async fn add_duplicate_rejected(backend: &dyn StorageBackend) {
    seed(backend).await;

    let mut dup = sample_posts().remove(0);
    dup.title = "Imposter".to_string();
    let err = backend.add_post(&dup).await.unwrap_err();
    assert_eq!(err, StorageError::DuplicateKey { id: dup.id });

    let listed = backend.list_posts().await.unwrap();
    let same_id: Vec<&Post> = listed.iter().filter(|p| p.id == dup.id).collect();
    assert_eq!(same_id.len(), 1);
    assert_eq!(same_id[0].title, "Post 1");
}

pub(crate) async fn update_replaces_fields(backend: &dyn StorageBackend) {
    seed(backend).await;

    let mut target = sample_posts().remove(0);
    target.title = "Updated title".to_string();
    target.content = "Updated content".to_string();
    target.author_id = 3;
    target.author_name = "Travis".to_string();
    target.created_at = 1_700_000_000;
    target.published_at = 1_700_003_600;

    backend.update_post(&target).await.unwrap();

    let listed = backend.list_posts().await.unwrap();
    let updated = listed.iter().find(|p| p.id == target.id).unwrap();
    assert_eq!(updated, &target);
    assert_eq!(listed.len(), 5);
}

pub(crate) async fn update_with_same_values_succeeds(backend: &dyn StorageBackend) {
    let posts = seed(backend).await;
    backend.update_post(&posts[1]).await.unwrap();
    assert_eq!(backend.list_posts().await.unwrap(), posts);
}

pub(crate) async fn update_missing_is_entry_not_exist(backend: &dyn StorageBackend) {
    let posts = seed(backend).await;

    let mut ghost = posts[0].clone();
    ghost.id = POST_ID_NONEXISTENT;
    ghost.title = "Updated title".to_string();

    let err = backend.update_post(&ghost).await.unwrap_err();
    assert_eq!(err, StorageError::EntryNotExist { id: POST_ID_NONEXISTENT });
    assert_eq!(backend.list_posts().await.unwrap(), posts);
}

pub(crate) async fn delete_missing_is_entry_not_exist(backend: &dyn StorageBackend) {
    let posts = seed(backend).await;

    let err = backend
        .delete_post(&Post::with_only_id(POST_ID_NONEXISTENT))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(backend.list_posts().await.unwrap(), posts);
}

pub(crate) async fn delete_all_leaves_empty(backend: &dyn StorageBackend) {
    let posts = seed(backend).await;

    for post in &posts {
        backend.delete_post(post).await.unwrap();
        let remaining = backend.list_posts().await.unwrap();
        assert!(
            remaining.iter().all(|p| p.id != post.id),
            "post {} was not deleted",
            post.id
        );
    }

    assert!(backend.list_posts().await.unwrap().is_empty());
}

pub(crate) async fn delete_then_readd(backend: &dyn StorageBackend) {
    let posts = seed(backend).await;

    backend.delete_post(&Post::with_only_id(3)).await.unwrap();
    let listed = backend.list_posts().await.unwrap();
    assert_eq!(listed.len(), 4);
    assert!(listed.iter().all(|p| p.id != 3));

    // Absent again: a second delete and an update both miss
    assert!(backend
        .delete_post(&Post::with_only_id(3))
        .await
        .unwrap_err()
        .is_not_found());
    assert!(backend.update_post(&posts[2]).await.unwrap_err().is_not_found());

    backend.add_post(&posts[2]).await.unwrap();
    assert_eq!(backend.list_posts().await.unwrap(), posts);
}

pub(crate) async fn ping_succeeds(backend: &dyn StorageBackend) {
    backend.ping().await.unwrap();
}

/// Stored author names come back verbatim, even if inconsistent with the id.
pub(crate) async fn stored_author_name_is_verbatim(backend: &dyn StorageBackend) {
    assert_eq!(backend.author_name_source(), AuthorNameSource::Stored);

    let mut post = sample_posts().remove(0);
    post.author_name = "Pen Name".to_string();
    backend.add_post(&post).await.unwrap();

    let listed = backend.list_posts().await.unwrap();
    assert_eq!(listed[0].author_name, "Pen Name");
}
