//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::Deserialize;

/// Todo item identifier - newtype over the store-assigned primary key.
///
/// Ids are assigned by the store and never reused, so a `TodoId` seen once
/// always refers to the same (possibly deleted) item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i32);

impl TodoId {
    /// Create a new `TodoId` from a raw key.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw key value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for TodoId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}
