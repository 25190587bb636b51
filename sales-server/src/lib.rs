//! Sales Server - retail sales dashboard backend
//!
//! Serves paginated, filtered sales transactions, whole-table filter options
//! and filtered aggregates over a SQLite `sales` table.
//!
//! # Modules
//!
//! - [`core`] - configuration, state, server lifecycle
//! - [`api`] - HTTP routes and handlers
//! - [`db`] - pool, migrations, predicate builder, repository, CSV import
//! - [`utils`] - logging

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

pub use crate::core::{Config, Server, ServerError, ServerState};
pub use crate::db::DbService;

/// Load `.env` and initialize logging from the resulting configuration
pub fn setup_environment() -> Config {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    utils::init_logger(&config.log_level, config.log_dir.as_deref());
    config
}
