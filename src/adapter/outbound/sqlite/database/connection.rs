//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling, migration support, and connection
//! configuration for SQLite databases.

use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// URL that selects a private in-memory database per connection.
const MEMORY_URL: &str = ":memory:";

/// Milliseconds a writer waits on a locked database before failing.
const BUSY_TIMEOUT_MS: u32 = 5000;

/// Applies connection pragmas every time the pool opens a connection.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), r2d2::Error> {
        diesel::sql_query(format!("PRAGMA busy_timeout={BUSY_TIMEOUT_MS}"))
            .execute(conn)
            .map_err(r2d2::Error::QueryError)?;
        Ok(())
    }
}

/// Create a connection pool for the given database URL.
///
/// An in-memory URL is limited to one long-lived connection, since every
/// SQLite connection to `:memory:` opens its own empty database.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str, max_size: u32) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let builder = Pool::builder().connection_customizer(Box::new(SqlitePragmas));

    let builder = if database_url == MEMORY_URL {
        builder.max_size(1).idle_timeout(None).max_lifetime(None)
    } else {
        builder.max_size(max_size)
    };

    let pool = builder
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))?;
    debug!(url = database_url, max_size = pool.max_size(), "sqlite pool ready");
    Ok(pool)
}

/// Run all pending database migrations.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Database(e.to_string()))?;
    if !applied.is_empty() {
        info!(count = applied.len(), "applied database migrations");
    }
    Ok(())
}
