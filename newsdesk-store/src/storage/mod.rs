//! Storage - Backend Trait and Implementations
//!
//! TigerStyle: Abstract storage, one observable behavior.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    StorageBackend Trait                      │
//! └─────────────────────────────────────────────────────────────┘
//!          ↑                    ↑                    ↑
//!          │                    │                    │
//! ┌────────┴────────┐  ┌────────┴────────┐  ┌───────┴────────┐
//! │  MemoryBackend  │  │ PostgresBackend │  │  MongoBackend  │
//! │   (reference)   │  │  (posts⋈authors)│  │ (denormalized) │
//! └─────────────────┘  └─────────────────┘  └────────────────┘
//! ```
//!
//! # Contract
//!
//! The in-memory backend defines the reference semantics. The shared
//! contract suite in `contract` runs against every backend; where a backend
//! cannot match the reference it says so through [`IdPolicy`] or
//! [`AuthorNameSource`] and the suite asserts that divergence.

mod backend;
mod error;
mod memory;
mod post;

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(test)]
pub(crate) mod contract;

pub use backend::{AuthorNameSource, IdPolicy, StorageBackend};
pub use error::{StorageError, StorageResult};
pub use memory::MemoryBackend;
pub use post::{Author, Post, PostBuilder};

#[cfg(feature = "postgres")]
pub use postgres::{PostgresBackend, PostgresConfig};

#[cfg(feature = "mongo")]
pub use mongo::{MongoBackend, MongoConfig};
