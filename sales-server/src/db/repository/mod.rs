//! Repository Module
//!
//! Query functions over the SQLite pool, one module per table.

pub mod sales;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
