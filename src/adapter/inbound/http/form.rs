//! Form payloads submitted by the HTML views.

use serde::Deserialize;

use crate::domain::{DomainError, TodoDraft};

/// Fields posted by the create and edit forms.
///
/// Both fields are optional at the extraction layer so a missing field
/// surfaces as a validation error rather than a generic extractor failure.
/// `desc` is accepted for forms that still use the short field name.
#[derive(Debug, Default, Deserialize)]
pub struct TodoForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "desc")]
    pub description: Option<String>,
}

impl TodoForm {
    /// Validate the submitted values.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] for a missing, blank or oversized field.
    pub fn into_draft(self) -> Result<TodoDraft, DomainError> {
        TodoDraft::try_new(self.title.as_deref(), self.description.as_deref())
    }
}
