//! Type-safe book identifier.
//!
//! [`BookId`] is a newtype wrapper around the store's `INTEGER PRIMARY KEY`
//! so that book identifiers cannot be confused with other integers.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a book.
///
/// Assigned by the store's autoincrement on insert and immutable
/// thereafter. Serializes as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i64, example = 1)]
pub struct BookId(i64);

impl BookId {
    /// Wraps a raw row id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw row id, as bound into SQL statements.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<BookId> for i64 {
    fn from(id: BookId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&BookId::new(12)).ok();
        assert_eq!(json.as_deref(), Some("12"));
    }

    #[test]
    fn display_is_the_raw_id() {
        assert_eq!(BookId::new(3).to_string(), "3");
    }

    #[test]
    fn orders_by_raw_id() {
        assert!(BookId::new(1) < BookId::new(2));
        assert_eq!(i64::from(BookId::from(9)), 9);
    }
}
