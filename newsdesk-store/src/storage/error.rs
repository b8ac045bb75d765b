//! Storage Errors
//!
//! TigerStyle: One taxonomy for every backend. Driver errors are
//! stringified at the boundary so no driver type leaks through the contract.

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors surfaced by any [`StorageBackend`](super::StorageBackend).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Update or delete targeted an id that is not stored.
    #[error("entry does not exist: post {id}")]
    EntryNotExist {
        /// Targeted post id
        id: i64,
    },

    /// Add targeted an id that is already stored.
    #[error("duplicate key: post {id} already exists")]
    DuplicateKey {
        /// Conflicting post id
        id: i64,
    },

    /// Backend construction could not reach the database.
    #[error("unable to establish DB connection: {0}")]
    ConnectDb(String),

    /// Ping failed against a constructed backend.
    #[error("DB not responding: {0}")]
    DbNotResponding(String),

    /// Schema or index provisioning failed.
    #[error("provisioning failed: {0}")]
    Provision(String),

    /// Unclassified driver failure while reading.
    #[error("read failed: {0}")]
    Read(String),

    /// Unclassified driver failure while writing.
    #[error("write failed: {0}")]
    Write(String),
}

impl StorageError {
    /// Construct a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectDb(msg.into())
    }

    /// Construct a not-responding error.
    pub fn not_responding(msg: impl Into<String>) -> Self {
        Self::DbNotResponding(msg.into())
    }

    /// Construct a provisioning error.
    pub fn provision(msg: impl Into<String>) -> Self {
        Self::Provision(msg.into())
    }

    /// Construct a read error.
    pub fn read(msg: impl Into<String>) -> Self {
        Self::Read(msg.into())
    }

    /// Construct a write error.
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }

    /// True for [`StorageError::EntryNotExist`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EntryNotExist { .. })
    }

    /// True for [`StorageError::DuplicateKey`].
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }

    /// True when the database itself is unreachable.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::ConnectDb(_) | Self::DbNotResponding(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StorageError::EntryNotExist { id: 3 }.to_string(),
            "entry does not exist: post 3"
        );
        assert_eq!(
            StorageError::DuplicateKey { id: 1 }.to_string(),
            "duplicate key: post 1 already exists"
        );
        assert_eq!(
            StorageError::connection("refused").to_string(),
            "unable to establish DB connection: refused"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(StorageError::EntryNotExist { id: 1 }.is_not_found());
        assert!(!StorageError::EntryNotExist { id: 1 }.is_duplicate());
        assert!(StorageError::DuplicateKey { id: 1 }.is_duplicate());
        assert!(StorageError::not_responding("timeout").is_unavailable());
        assert!(StorageError::connection("refused").is_unavailable());
        assert!(!StorageError::write("boom").is_unavailable());
    }
}
