//! Persistence port for todo items.

use std::future::Future;

use crate::domain::{TodoDraft, TodoId, TodoItem};
use crate::error::Result;

/// Storage operations for todo items.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`) and cheap to share
///   behind an `Arc`; request handlers receive the store as application data.
/// - Ids are assigned by the store, increase monotonically and are never
///   reused after a delete.
/// - `update` and `delete` report a missing id as [`Error::NotFound`](crate::error::Error::NotFound).
pub trait TodoStore: Send + Sync + 'static {
    /// Persist a new item with a fresh id and the current time.
    fn create(&self, draft: TodoDraft) -> impl Future<Output = Result<TodoItem>> + Send;

    /// Every stored item in primary-key order.
    fn list_all(&self) -> impl Future<Output = Result<Vec<TodoItem>>> + Send;

    /// Look up an item by id.
    fn find_by_id(&self, id: TodoId) -> impl Future<Output = Result<Option<TodoItem>>> + Send;

    /// Overwrite title and description of an existing item.
    fn update(&self, id: TodoId, draft: TodoDraft) -> impl Future<Output = Result<TodoItem>> + Send;

    /// Permanently remove an item.
    fn delete(&self, id: TodoId) -> impl Future<Output = Result<()>> + Send;
}
