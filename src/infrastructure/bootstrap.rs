//! Infrastructure bootstrap helpers for runtime wiring.

use tracing::info;

use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations, DbPool};
use crate::adapter::outbound::sqlite::SqliteTodoStore;
use crate::error::Result;
use crate::infrastructure::config::database::DatabaseConfig;

/// Open the configured database and bring its schema up to date.
///
/// # Errors
/// Returns an error if the pool cannot be built or a migration fails.
pub fn prepare_database(config: &DatabaseConfig) -> Result<DbPool> {
    let pool = create_pool(&config.url, config.pool_size)?;
    run_migrations(&pool)?;
    info!(url = %config.url, "database ready");
    Ok(pool)
}

/// Build the SQLite-backed store used by the HTTP server.
///
/// # Errors
/// Same as [`prepare_database`].
pub fn build_store(config: &DatabaseConfig) -> Result<SqliteTodoStore> {
    prepare_database(config).map(SqliteTodoStore::new)
}
