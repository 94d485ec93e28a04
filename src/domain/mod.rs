//! Todo domain types and validation rules.

pub mod error;
pub mod id;
pub mod todo;

pub use error::DomainError;
pub use id::TodoId;
pub use todo::{TodoDraft, TodoItem, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
