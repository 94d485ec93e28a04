use tempfile::TempDir;
use todopad::adapter::outbound::sqlite::database::{create_pool, run_migrations, DbPool};
use todopad::adapter::outbound::SqliteTodoStore;

/// Temporary SQLite database file for integration tests.
///
/// The directory (and database) is removed when the value is dropped.
pub struct TempDb {
    _dir: TempDir,
    url: String,
    pool: DbPool,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let url = dir.path().join("todopad.db").display().to_string();
        let pool = create_pool(&url, 4).expect("create sqlite pool");
        run_migrations(&pool).expect("run migrations");

        Self {
            _dir: dir,
            url,
            pool,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn store(&self) -> SqliteTodoStore {
        SqliteTodoStore::new(self.pool.clone())
    }
}
