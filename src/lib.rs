//! Todopad - a server-rendered todo list backed by SQLite.
//!
//! Items are created, listed, edited and deleted through plain HTML forms.
//! Persistence goes through the [`port::TodoStore`] trait, implemented by a
//! Diesel/SQLite adapter for production and an in-memory adapter for tests.
//!
//! # Modules
//!
//! - [`domain`] - `TodoItem`, `TodoDraft` and their validation rules
//! - [`port`] - The `TodoStore` persistence trait
//! - [`adapter`] - SQLite and memory stores, actix-web routes, CLI
//! - [`infrastructure`] - Configuration, logging and startup wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use todopad::adapter::outbound::MemoryStore;
//! use todopad::domain::TodoDraft;
//! use todopad::port::TodoStore;
//!
//! # async fn demo() -> todopad::error::Result<()> {
//! let store = MemoryStore::new();
//! let draft = TodoDraft::try_new(Some("Buy milk"), Some("2% from the store"))?;
//! let item = store.create(draft).await?;
//! assert_eq!(item.id.get(), 1);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
