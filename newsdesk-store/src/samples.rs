//! Samples - canonical fixture data
//!
//! Five posts by three authors, one day apart starting 2022-02-01 12:00 UTC.
//! Used by the test suites and by `--seed` at startup.

use crate::storage::{Author, Post, PostBuilder};

/// First sample timestamp (2022-02-01 12:00:00 UTC)
pub const SAMPLE_EPOCH_SECS: i64 = 1_643_723_400;

/// Seconds between consecutive sample posts
pub const SAMPLE_STEP_SECS: i64 = 86_400;

/// Authors referenced by [`sample_posts`].
#[must_use]
pub fn sample_authors() -> Vec<Author> {
    vec![
        Author::new(1, "Mark"),
        Author::new(2, "Tom"),
        Author::new(3, "Travis"),
    ]
}

/// The five canonical posts, ids 1 through 5.
#[must_use]
pub fn sample_posts() -> Vec<Post> {
    let authors = sample_authors();
    // post n -> author id
    let author_of = [1, 2, 1, 3, 2];

    (1..=5_i64)
        .zip(author_of)
        .map(|(n, author_id)| {
            let author = authors
                .iter()
                .find(|a| a.id == author_id)
                .map(|a| a.name.clone())
                .unwrap_or_default();
            let ts = SAMPLE_EPOCH_SECS + (n - 1) * SAMPLE_STEP_SECS;

            PostBuilder::new(
                format!("Post {n}"),
                format!("This is the content of post {n}"),
                author_id,
                author,
            )
            .with_id(n)
            .with_created_at(ts)
            .with_published_at(ts)
            .build()
        })
        .collect()
}
