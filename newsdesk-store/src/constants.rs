//! Constants - TigerStyle named limits and identifiers
//!
//! Collection and index names, server error codes and pool limits shared
//! between the backends and their tests.

// =============================================================================
// Relational
// =============================================================================

/// Maximum connections in the PostgreSQL pool
pub const PG_POOL_CONNECTIONS_MAX: u32 = 10;

/// Time a caller waits for a pooled PostgreSQL connection, in milliseconds
pub const PG_POOL_ACQUIRE_TIMEOUT_MS: u64 = 3_000;

// =============================================================================
// Document
// =============================================================================

/// Collection holding one document per post
pub const POSTS_COLLECTION_NAME: &str = "posts";

/// Name MongoDB assigns to an ascending single-field index on `id`
pub const POSTS_ID_INDEX_NAME: &str = "id_1";

/// MongoDB server error code for a unique index violation
pub const MONGO_DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB server error code for creating a collection that already exists
pub const MONGO_NAMESPACE_EXISTS_CODE: i32 = 48;

// =============================================================================
// Test fixtures
// =============================================================================

/// An id no fixture ever uses
pub const POST_ID_NONEXISTENT: i64 = 999_999;
