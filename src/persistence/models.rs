//! Database row shapes for the `books` table.

use crate::domain::{Book, BookId};

/// A `books` row as selected by `SELECT id, title, author, genre`.
pub type BookRow = (i64, String, String, String);

impl From<BookRow> for Book {
    fn from((id, title, author, genre): BookRow) -> Self {
        Self {
            id: BookId::new(id),
            title,
            author,
            genre,
        }
    }
}
