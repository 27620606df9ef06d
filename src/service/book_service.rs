//! Book service: typed catalog operations over the SQLite store.

use sqlx::SqlitePool;

use crate::domain::{Book, BookId, NewBook};
use crate::error::CatalogError;
use crate::persistence::models::BookRow;

/// Persistence service for books.
///
/// Holds a clone of the shared [`SqlitePool`]; the pool provides its own
/// synchronization, so the service is freely cloneable across handlers.
/// Every method runs exactly one statement, with caller values bound as
/// parameters.
#[derive(Debug, Clone)]
pub struct BookService {
    pool: SqlitePool,
}

impl BookService {
    /// Creates a new `BookService` over the given pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Inserts a book and returns it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PersistenceError`] on constraint or
    /// connectivity failure.
    pub async fn create(&self, book: NewBook) -> Result<Book, CatalogError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO books (title, author, genre) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .fetch_one(&self.pool)
        .await?;

        let book = book.with_id(BookId::new(id));
        tracing::info!(book_id = %book.id, title = %book.title, "book created");
        Ok(book)
    }

    /// Returns every book, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PersistenceError`] on database failure.
    pub async fn list(&self) -> Result<Vec<Book>, CatalogError> {
        let rows = sqlx::query_as::<_, BookRow>(
            "SELECT id, title, author, genre FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = rows.len(), "books listed");
        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Looks up a single book.
    ///
    /// Returns `Ok(None)` when no row matches; absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PersistenceError`] on database failure.
    pub async fn get_by_id(&self, id: BookId) -> Result<Option<Book>, CatalogError> {
        let row = sqlx::query_as::<_, BookRow>(
            "SELECT id, title, author, genre FROM books WHERE id = ?",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        tracing::debug!(book_id = %id, found = row.is_some(), "book fetched");
        Ok(row.map(Book::from))
    }

    /// Overwrites title, author and genre of the row matching `book.id`.
    ///
    /// Returns `false` when no row matched; nothing is written in that case.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PersistenceError`] on database failure.
    pub async fn update(&self, book: &Book) -> Result<bool, CatalogError> {
        let result = sqlx::query("UPDATE books SET title = ?, author = ?, genre = ? WHERE id = ?")
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.genre)
            .bind(book.id.get())
            .execute(&self.pool)
            .await?;

        let matched = result.rows_affected() > 0;
        tracing::info!(book_id = %book.id, matched, "book updated");
        Ok(matched)
    }

    /// Deletes the row matching `id`.
    ///
    /// Returns `false` when no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PersistenceError`] on database failure.
    pub async fn delete(&self, id: BookId) -> Result<bool, CatalogError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        let matched = result.rows_affected() > 0;
        tracing::info!(book_id = %id, matched, "book deleted");
        Ok(matched)
    }

    /// Returns every book whose title contains `needle`, ordered by id.
    ///
    /// Matching uses SQLite `LIKE`, so it is case-insensitive for ASCII.
    /// Wildcard characters in `needle` match literally.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PersistenceError`] on database failure.
    pub async fn search_by_title(&self, needle: &str) -> Result<Vec<Book>, CatalogError> {
        let pattern = format!("%{}%", escape_like(needle));
        let rows = sqlx::query_as::<_, BookRow>(
            r"SELECT id, title, author, genre FROM books WHERE title LIKE ? ESCAPE '\' ORDER BY id",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(needle, count = rows.len(), "books searched");
        Ok(rows.into_iter().map(Book::from).collect())
    }
}

/// Escapes `LIKE` metacharacters so `s` matches literally under
/// `ESCAPE '\'`.
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
