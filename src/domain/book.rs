//! The catalog's single entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::BookId;

/// A persisted book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Store-assigned identifier.
    pub id: BookId,
    /// Book title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Free-form genre label.
    pub genre: String,
}

/// Book fields without an identifier, as accepted by create and update.
///
/// Unknown JSON fields (including a client-supplied `id`) are ignored;
/// all three fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"title": "Dune", "author": "Herbert", "genre": "SciFi"}))]
pub struct NewBook {
    /// Book title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Free-form genre label.
    pub genre: String,
}

impl NewBook {
    /// Attaches an identifier, producing a full [`Book`].
    #[must_use]
    pub fn with_id(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            genre: self.genre,
        }
    }
}
