//! Data models
//!
//! Shared between sales-server and the dashboard client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.

pub mod sale;

// Re-exports
pub use sale::*;
