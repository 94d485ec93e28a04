//! SQLite todo store implementation using Diesel.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use super::database::model::{NewTodoRow, TodoChangeset, TodoRow};
use super::database::schema::todos;
use super::database::DbPool;
use crate::domain::{TodoDraft, TodoId, TodoItem};
use crate::error::{Error, Result};
use crate::port::TodoStore;

/// SQLite-backed todo store.
///
/// Diesel calls block, so every operation checks a connection out of the
/// pool on tokio's blocking thread pool.
#[derive(Clone)]
pub struct SqliteTodoStore {
    pool: DbPool,
}

impl SqliteTodoStore {
    /// Create a new SQLite todo store.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn from_row(row: TodoRow) -> Result<TodoItem> {
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| Error::Parse(e.to_string()))?
            .with_timezone(&Utc);

        Ok(TodoItem {
            id: TodoId::new(row.id),
            title: row.title,
            description: row.description,
            created_at,
        })
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
            f(&mut conn)
        })
        .await
        .map_err(|e| Error::Database(e.to_string()))?
    }
}

impl TodoStore for SqliteTodoStore {
    async fn create(&self, draft: TodoDraft) -> Result<TodoItem> {
        let item = self
            .with_conn(move |conn| {
                let row = NewTodoRow {
                    title: draft.title(),
                    description: draft.description(),
                    created_at: Utc::now().to_rfc3339(),
                };

                let stored: TodoRow = diesel::insert_into(todos::table)
                    .values(&row)
                    .returning(TodoRow::as_returning())
                    .get_result(conn)
                    .map_err(|e| Error::Database(e.to_string()))?;

                Self::from_row(stored)
            })
            .await?;

        info!(id = %item.id, title = %item.title, "todo created");
        Ok(item)
    }

    async fn list_all(&self) -> Result<Vec<TodoItem>> {
        let items: Vec<TodoItem> = self
            .with_conn(|conn| {
                let rows: Vec<TodoRow> = todos::table
                    .order(todos::id.asc())
                    .select(TodoRow::as_select())
                    .load(conn)
                    .map_err(|e| Error::Database(e.to_string()))?;

                rows.into_iter().map(Self::from_row).collect()
            })
            .await?;

        debug!(count = items.len(), "listed todos");
        Ok(items)
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<TodoItem>> {
        self.with_conn(move |conn| {
            let row: Option<TodoRow> = todos::table
                .find(id.get())
                .select(TodoRow::as_select())
                .first(conn)
                .optional()
                .map_err(|e| Error::Database(e.to_string()))?;

            row.map(Self::from_row).transpose()
        })
        .await
    }

    async fn update(&self, id: TodoId, draft: TodoDraft) -> Result<TodoItem> {
        let item = self
            .with_conn(move |conn| {
                let changes = TodoChangeset {
                    title: draft.title(),
                    description: draft.description(),
                };

                let row: Option<TodoRow> = diesel::update(todos::table.find(id.get()))
                    .set(&changes)
                    .returning(TodoRow::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(|e| Error::Database(e.to_string()))?;

                row.map(Self::from_row)
                    .transpose()?
                    .ok_or(Error::NotFound { id })
            })
            .await?;

        info!(id = %item.id, title = %item.title, "todo updated");
        Ok(item)
    }

    async fn delete(&self, id: TodoId) -> Result<()> {
        let deleted = self
            .with_conn(move |conn| {
                diesel::delete(todos::table.find(id.get()))
                    .execute(conn)
                    .map_err(|e| Error::Database(e.to_string()))
            })
            .await?;

        if deleted == 0 {
            return Err(Error::NotFound { id });
        }

        info!(id = %id, "todo deleted");
        Ok(())
    }
}
