//! Newsdesk Store - Post Storage Contract
//!
//! TigerStyle: One contract, three storage paradigms.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            StorageBackend (trait)            │
//! ├──────────────┬───────────────┬──────────────┤
//! │ MemoryBackend│PostgresBackend│ MongoBackend │
//! │  BTreeMap +  │ posts JOIN    │ denormalized │
//! │  RwLock      │ authors       │ + unique idx │
//! └──────────────┴───────────────┴──────────────┘
//! ```
//!
//! Every backend reports failures through the same [`StorageError`]
//! taxonomy, so callers never see driver-specific error types.
//!
//! # Usage
//!
//! ```rust
//! use newsdesk_store::{MemoryBackend, Post, StorageBackend};
//!
//! # tokio_test::block_on(async {
//! let store = MemoryBackend::new();
//! let post = Post::new(1, "Title".into(), "Body".into(), 1, "Mark".into());
//! store.add_post(&post).await.unwrap();
//! assert_eq!(store.list_posts().await.unwrap(), vec![post]);
//! # });
//! ```
//!
//! # Features
//!
//! - **`postgres`** - [`PostgresBackend`] over sqlx
//! - **`mongo`** - [`MongoBackend`] over the official MongoDB driver

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod constants;
pub mod samples;
pub mod storage;

// Re-export common types
pub use constants::*;
pub use storage::{
    Author, AuthorNameSource, IdPolicy, MemoryBackend, Post, PostBuilder, StorageBackend,
    StorageError, StorageResult,
};

#[cfg(feature = "postgres")]
pub use storage::{PostgresBackend, PostgresConfig};

#[cfg(feature = "mongo")]
pub use storage::{MongoBackend, MongoConfig};
