//! Outbound adapters (driven side).

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteTodoStore;
