//! Shared request state

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;

/// State handed to every handler
///
/// Cheap to clone: the pool is reference counted.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
