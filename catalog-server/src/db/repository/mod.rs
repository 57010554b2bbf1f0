//! Repository Module
//!
//! CRUD and query operations for the SurrealDB catalog tables.

pub mod banner_image;
pub mod category;
pub mod product;

// Re-exports
pub use banner_image::BannerImageRepository;
pub use category::CategoryRepository;
pub use product::ProductRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:key" accepted everywhere, bare keys too
// =============================================================================

/// Strip an optional `table:` prefix so callers may pass either form
pub(crate) fn record_key<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::record_key;

    #[test]
    fn record_key_strips_table_prefix() {
        assert_eq!(record_key("product", "product:abc123"), "abc123");
        assert_eq!(record_key("product", "abc123"), "abc123");
        // Only the matching table prefix is stripped
        assert_eq!(record_key("product", "category:abc"), "category:abc");
    }
}
