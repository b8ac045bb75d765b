//! Post - the single content entity
//!
//! TigerStyle: Explicit fields, builder for non-default construction.

use chrono::Utc;
use serde::{Deserialize, Serialize};

// =============================================================================
// Post
// =============================================================================

/// A published article.
///
/// Field names are the wire names for both JSON and BSON. Missing fields
/// decode to their zero value, so `{"id": 3}` is a complete delete target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    /// Unique identifier within a backend
    pub id: i64,
    /// Headline
    pub title: String,
    /// Body text
    pub content: String,
    /// Reference to the author
    pub author_id: i64,
    /// Author display name (joined or stored, see `AuthorNameSource`)
    pub author_name: String,
    /// Creation time, Unix seconds
    pub created_at: i64,
    /// Publication time, Unix seconds
    pub published_at: i64,
}

impl Post {
    /// Create a post stamped with the current time.
    #[must_use]
    pub fn new(
        id: i64,
        title: String,
        content: String,
        author_id: i64,
        author_name: String,
    ) -> Self {
        PostBuilder::new(title, content, author_id, author_name)
            .with_id(id)
            .build()
    }

    /// Create a builder for more complex post construction.
    #[must_use]
    pub fn builder(
        title: String,
        content: String,
        author_id: i64,
        author_name: String,
    ) -> PostBuilder {
        PostBuilder::new(title, content, author_id, author_name)
    }

    /// A post carrying only an id, enough to target a delete.
    #[must_use]
    pub fn with_only_id(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

// =============================================================================
// Post Builder
// =============================================================================

/// Builder for Post with fluent API.
#[derive(Debug)]
pub struct PostBuilder {
    title: String,
    content: String,
    author_id: i64,
    author_name: String,
    id: Option<i64>,
    created_at: Option<i64>,
    published_at: Option<i64>,
}

impl PostBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new(title: String, content: String, author_id: i64, author_name: String) -> Self {
        Self {
            title,
            content,
            author_id,
            author_name,
            id: None,
            created_at: None,
            published_at: None,
        }
    }

    /// Set the id. Backends with `IdPolicy::BackendAssigned` ignore it.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set publication timestamp.
    #[must_use]
    pub fn with_published_at(mut self, published_at: i64) -> Self {
        self.published_at = Some(published_at);
        self
    }

    /// Build the post. Unset timestamps default to now, an unset id to 0.
    #[must_use]
    pub fn build(self) -> Post {
        let now = Utc::now().timestamp();
        Post {
            id: self.id.unwrap_or_default(),
            title: self.title,
            content: self.content,
            author_id: self.author_id,
            author_name: self.author_name,
            created_at: self.created_at.unwrap_or(now),
            published_at: self.published_at.unwrap_or(now),
        }
    }
}

// =============================================================================
// Author
// =============================================================================

/// A row of the relational `authors` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Author id, referenced by `Post::author_id`
    pub id: i64,
    /// Display name
    pub name: String,
}

impl Author {
    /// Create an author.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
