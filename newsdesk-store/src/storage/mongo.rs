//! MongoBackend - Document Storage
//!
//! TigerStyle: One denormalized document per post, uniqueness from an index.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      MongoBackend                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Client: mongodb::Client (pooled, lazily connected)          │
//! │  Collection: posts { id, title, content, author_id,          │
//! │                      author_name, created_at, published_at } │
//! │  Index: id_1 { id: 1 } unique                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Without the `id_1` index duplicate ids would be accepted, so
//! [`MongoBackend::provision`] must run before the first write.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::{ClientOptions, FindOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};

use super::backend::{AuthorNameSource, IdPolicy, StorageBackend};
use super::error::{StorageError, StorageResult};
use super::post::Post;
use crate::constants::{
    MONGO_DUPLICATE_KEY_CODE, MONGO_NAMESPACE_EXISTS_CODE, POSTS_COLLECTION_NAME,
    POSTS_ID_INDEX_NAME,
};

// =============================================================================
// Config
// =============================================================================

/// Connection descriptor for [`MongoBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database name
    pub db_name: String,
}

impl MongoConfig {
    /// Connection URI understood by the driver.
    #[must_use]
    pub fn connection_string(&self) -> String {
        format!("mongodb://{}:{}/", self.host, self.port)
    }
}

// =============================================================================
// MongoBackend
// =============================================================================

/// MongoDB storage backend.
pub struct MongoBackend {
    client: Client,
    db_name: String,
    closed: AtomicBool,
}

impl MongoBackend {
    /// Connect using a config.
    ///
    /// # Errors
    /// Returns `ConnectDb` if the server cannot be reached.
    pub async fn connect(config: &MongoConfig) -> StorageResult<Self> {
        Self::connect_uri(&config.connection_string(), &config.db_name).await
    }

    /// Connect using a full connection URI.
    ///
    /// The driver connects lazily, so a ping is issued here to surface an
    /// unreachable server as `ConnectDb` rather than on first use.
    ///
    /// # Errors
    /// Returns `ConnectDb` if the URI is invalid or the server is unreachable.
    pub async fn connect_uri(uri: &str, db_name: &str) -> StorageResult<Self> {
        let connect_err = |e: MongoError| {
            tracing::error!(error = %e, "error connecting to mongo");
            StorageError::connection(e.to_string())
        };

        let options = ClientOptions::parse(uri).await.map_err(connect_err)?;
        let client = Client::with_options(options).map_err(connect_err)?;
        client
            .database(db_name)
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(connect_err)?;

        Ok(Self {
            client,
            db_name: db_name.to_string(),
            closed: AtomicBool::new(false),
        })
    }

    /// Create the `posts` collection and its unique `id` index if absent.
    ///
    /// Idempotent, and tolerant of a concurrent provisioner winning the race.
    ///
    /// # Errors
    /// Returns `Provision` if listing or creation fails.
    pub async fn provision(&self) -> StorageResult<()> {
        let provision_err = |e: MongoError| {
            tracing::error!(error = %e, "error provisioning posts collection");
            StorageError::provision(e.to_string())
        };

        let db = self.database();
        let names = db
            .list_collection_names(None)
            .await
            .map_err(provision_err)?;
        if !names.iter().any(|n| n == POSTS_COLLECTION_NAME) {
            match db.create_collection(POSTS_COLLECTION_NAME, None).await {
                Ok(()) => tracing::info!(collection = POSTS_COLLECTION_NAME, "collection created"),
                Err(e) if command_code(&e) == Some(MONGO_NAMESPACE_EXISTS_CODE) => {}
                Err(e) => return Err(provision_err(e)),
            }
        }

        let posts = self.posts();
        let indexes = posts.list_index_names().await.map_err(provision_err)?;
        if !indexes.iter().any(|n| n == POSTS_ID_INDEX_NAME) {
            let model = IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build();
            posts.create_index(model, None).await.map_err(provision_err)?;
            tracing::info!(index = POSTS_ID_INDEX_NAME, "unique index created");
        }

        Ok(())
    }

    /// The database this backend writes to.
    #[must_use]
    pub fn database(&self) -> Database {
        self.client.database(&self.db_name)
    }

    fn posts(&self) -> Collection<Post> {
        self.database().collection(POSTS_COLLECTION_NAME)
    }
}

// =============================================================================
// Error Mapping
// =============================================================================

fn is_duplicate_key(e: &MongoError) -> bool {
    match &*e.kind {
        ErrorKind::Write(WriteFailure::WriteError(we)) => we.code == MONGO_DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn command_code(e: &MongoError) -> Option<i32> {
    match &*e.kind {
        ErrorKind::Command(ce) => Some(ce.code),
        _ => None,
    }
}

fn id_filter(id: i64) -> Document {
    doc! { "id": id }
}

// =============================================================================
// StorageBackend Implementation
// =============================================================================

#[async_trait]
impl StorageBackend for MongoBackend {
    fn name(&self) -> &'static str {
        "mongo"
    }

    fn id_policy(&self) -> IdPolicy {
        IdPolicy::CallerAssigned
    }

    fn author_name_source(&self) -> AuthorNameSource {
        AuthorNameSource::Stored
    }

    async fn list_posts(&self) -> StorageResult<Vec<Post>> {
        let read_err = |e: MongoError| {
            tracing::error!(error = %e, "error requesting posts");
            StorageError::read(e.to_string())
        };

        let options = FindOptions::builder().sort(doc! { "id": 1 }).build();
        let cursor = self.posts().find(None, options).await.map_err(read_err)?;
        let posts: Vec<Post> = cursor.try_collect().await.map_err(read_err)?;

        tracing::info!(count = posts.len(), "retrieved posts");
        Ok(posts)
    }

    async fn add_post(&self, post: &Post) -> StorageResult<i64> {
        if let Err(e) = self.posts().insert_one(post, None).await {
            if is_duplicate_key(&e) {
                tracing::error!(post_id = post.id, "error adding post: duplicate id");
                return Err(StorageError::DuplicateKey { id: post.id });
            }
            tracing::error!(error = %e, post_id = post.id, "error adding post");
            return Err(StorageError::write(e.to_string()));
        }

        tracing::info!(post_id = post.id, "post added");
        Ok(post.id)
    }

    async fn update_post(&self, post: &Post) -> StorageResult<()> {
        let update = doc! {
            "$set": {
                "title": post.title.as_str(),
                "content": post.content.as_str(),
                "author_id": post.author_id,
                "author_name": post.author_name.as_str(),
                "created_at": post.created_at,
                "published_at": post.published_at,
            }
        };

        let result = self
            .posts()
            .update_one(id_filter(post.id), update, None)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, post_id = post.id, "error updating post");
                StorageError::write(e.to_string())
            })?;

        // Matched, not modified: rewriting identical values is still a hit.
        if result.matched_count == 0 {
            tracing::error!(post_id = post.id, "error updating post: not found");
            return Err(StorageError::EntryNotExist { id: post.id });
        }

        tracing::info!(post_id = post.id, "post updated");
        Ok(())
    }

    async fn delete_post(&self, post: &Post) -> StorageResult<()> {
        let result = self
            .posts()
            .delete_one(id_filter(post.id), None)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, post_id = post.id, "error deleting post");
                StorageError::write(e.to_string())
            })?;

        if result.deleted_count == 0 {
            tracing::error!(post_id = post.id, "error deleting post: not found");
            return Err(StorageError::EntryNotExist { id: post.id });
        }

        tracing::info!(post_id = post.id, "post deleted");
        Ok(())
    }

    async fn ping(&self) -> StorageResult<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(StorageError::not_responding("client is closed"));
        }
        self.database()
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| StorageError::not_responding(e.to_string()))?;
        Ok(())
    }

    async fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        self.client.clone().shutdown().await;
        tracing::info!("mongo client closed");
    }
}

// =============================================================================
// Tests (require running MongoDB)
// =============================================================================
