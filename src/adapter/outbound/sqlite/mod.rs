//! SQLite persistence adapter.
//!
//! Provides the SQLite-backed [`TodoStore`](crate::port::TodoStore)
//! implementation using Diesel ORM.

pub mod database;
pub mod store;

pub use store::SqliteTodoStore;
