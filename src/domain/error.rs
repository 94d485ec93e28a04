//! Domain validation errors for todo input.
//!
//! These errors are returned by [`TodoDraft::try_new`](super::todo::TodoDraft::try_new)
//! when submitted form values break the entity's invariants.
//!
//! # Examples
//!
//! ```
//! use todopad::domain::error::DomainError;
//! use todopad::domain::todo::TodoDraft;
//!
//! let result = TodoDraft::try_new(Some("   "), Some("anything"));
//! assert!(matches!(result, Err(DomainError::EmptyField { field: "title" })));
//! ```

use thiserror::Error;

/// Errors that occur when todo input violates domain rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required form field was not submitted at all.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    /// A required field was submitted but is blank.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Name of the blank field.
        field: &'static str,
    },

    /// A field exceeds its maximum length.
    #[error("{field} must be at most {max} characters, got {actual}")]
    TooLong {
        /// Name of the oversized field.
        field: &'static str,
        /// Maximum allowed length in characters.
        max: usize,
        /// Submitted length in characters.
        actual: usize,
    },
}
