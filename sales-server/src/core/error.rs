use thiserror::Error;

use crate::db::RepoError;

/// Fatal startup and serve errors
///
/// Request-level failures are [`shared::AppError`]s; these only surface from
/// `main` and end the process.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] RepoError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
