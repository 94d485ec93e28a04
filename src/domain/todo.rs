//! Todo item types.
//!
//! - [`TodoItem`] - A persisted task record
//! - [`TodoDraft`] - Validated title/description accepted by create and update
//!
//! # Examples
//!
//! ```
//! use todopad::domain::todo::TodoDraft;
//!
//! let draft = TodoDraft::try_new(Some(" Buy milk "), Some("2% from the store")).unwrap();
//! assert_eq!(draft.title(), "Buy milk");
//! ```

use chrono::{DateTime, Utc};

use super::error::DomainError;
use super::id::TodoId;

/// Maximum title length in characters.
pub const TITLE_MAX_LEN: usize = 40;

/// Maximum description length in characters.
pub const DESCRIPTION_MAX_LEN: usize = 100;

/// A persisted todo item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// Store-assigned primary key.
    pub id: TodoId,
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// When the item was first stored.
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Overwrite the editable fields, leaving id and creation time intact.
    pub fn apply(&mut self, draft: TodoDraft) {
        self.title = draft.title;
        self.description = draft.description;
    }
}

/// Validated input for creating or editing a todo item.
///
/// Fields are trimmed; blank or oversized values are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    title: String,
    description: String,
}

impl TodoDraft {
    /// Validate raw form values.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] naming the first offending field.
    pub fn try_new(title: Option<&str>, description: Option<&str>) -> Result<Self, DomainError> {
        let title = required("title", title, TITLE_MAX_LEN)?;
        let description = required("description", description, DESCRIPTION_MAX_LEN)?;
        Ok(Self { title, description })
    }

    /// Validated title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Validated description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

fn required(field: &'static str, value: Option<&str>, max: usize) -> Result<String, DomainError> {
    let value = value.ok_or(DomainError::MissingField { field })?.trim();
    if value.is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    let actual = value.chars().count();
    if actual > max {
        return Err(DomainError::TooLong { field, max, actual });
    }
    Ok(value.to_string())
}
