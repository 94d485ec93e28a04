//! In-memory store implementation for testing.

use std::collections::BTreeMap;

use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::{TodoDraft, TodoId, TodoItem};
use crate::error::{Error, Result};
use crate::port::TodoStore;

#[derive(Debug, Default)]
struct Inner {
    last_id: i32,
    items: BTreeMap<TodoId, TodoItem>,
}

/// In-memory store for testing purposes.
///
/// Mirrors the SQLite store: ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for MemoryStore {
    async fn create(&self, draft: TodoDraft) -> Result<TodoItem> {
        let mut inner = self.inner.write();
        inner.last_id += 1;
        let mut item = TodoItem {
            id: TodoId::new(inner.last_id),
            title: String::new(),
            description: String::new(),
            created_at: Utc::now(),
        };
        item.apply(draft);
        inner.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn list_all(&self) -> Result<Vec<TodoItem>> {
        Ok(self.inner.read().items.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<TodoItem>> {
        Ok(self.inner.read().items.get(&id).cloned())
    }

    async fn update(&self, id: TodoId, draft: TodoDraft) -> Result<TodoItem> {
        let mut inner = self.inner.write();
        let item = inner.items.get_mut(&id).ok_or(Error::NotFound { id })?;
        item.apply(draft);
        Ok(item.clone())
    }

    async fn delete(&self, id: TodoId) -> Result<()> {
        self.inner
            .write()
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or(Error::NotFound { id })
    }
}
