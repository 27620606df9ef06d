//! Book CRUD handlers: list, create, get, update, delete, search.
//!
//! Extractor rejections are taken as `Result`s and converted into
//! [`CatalogError::InvalidRequest`], so malformed ids and bodies always
//! produce the structured 400 body. The path id is checked before the
//! service is called.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::SearchParams;
use crate::app_state::AppState;
use crate::domain::{Book, BookId, NewBook};
use crate::error::{CatalogError, ErrorResponse};

/// `GET /books` — List all books.
///
/// # Errors
///
/// Returns [`CatalogError::PersistenceError`] on storage failure.
#[utoipa::path(
    get,
    path = "/api/v1/books",
    tag = "Books",
    summary = "List books",
    description = "Returns every book in the catalog, ordered by id. An empty catalog yields an empty array.",
    responses(
        (status = 200, description = "All books", body = Vec<Book>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Result<impl IntoResponse, CatalogError> {
    let books = state.book_service.list().await?;
    Ok(Json(books))
}

/// `POST /books` — Create a book.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRequest`] on a malformed body, or
/// [`CatalogError::PersistenceError`] on storage failure.
#[utoipa::path(
    post,
    path = "/api/v1/books",
    tag = "Books",
    summary = "Create a book",
    description = "Inserts a book and returns it with its store-assigned id. Any `id` in the body is ignored.",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    body: Result<Json<NewBook>, JsonRejection>,
) -> Result<impl IntoResponse, CatalogError> {
    let Json(new_book) = body?;
    let book = state.book_service.create(new_book).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// `GET /books/{id}` — Get a single book.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRequest`] for a non-integer id,
/// [`CatalogError::BookNotFound`] if no such book exists, or
/// [`CatalogError::PersistenceError`] on storage failure.
#[utoipa::path(
    get,
    path = "/api/v1/books/{id}",
    tag = "Books",
    summary = "Get a book",
    params(
        ("id" = i64, Path, description = "Book id"),
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Non-integer id", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, CatalogError> {
    let Path(id) = id?;
    let id = BookId::new(id);
    let book = state
        .book_service
        .get_by_id(id)
        .await?
        .ok_or(CatalogError::BookNotFound(id))?;
    Ok(Json(book))
}

/// `PUT /books/{id}` — Replace a book's fields.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRequest`] for a non-integer id or a
/// malformed body, [`CatalogError::BookNotFound`] if no such book exists,
/// or [`CatalogError::PersistenceError`] on storage failure.
#[utoipa::path(
    put,
    path = "/api/v1/books/{id}",
    tag = "Books",
    summary = "Update a book",
    description = "Overwrites title, author and genre. The id comes from the path; any `id` in the body is ignored.",
    params(
        ("id" = i64, Path, description = "Book id"),
    ),
    request_body = NewBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Malformed id or body", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<NewBook>, JsonRejection>,
) -> Result<impl IntoResponse, CatalogError> {
    let Path(id) = id?;
    let Json(fields) = body?;
    let book = fields.with_id(BookId::new(id));

    if !state.book_service.update(&book).await? {
        return Err(CatalogError::BookNotFound(book.id));
    }
    Ok(Json(book))
}

/// `DELETE /books/{id}` — Remove a book.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRequest`] for a non-integer id,
/// [`CatalogError::BookNotFound`] if no such book exists, or
/// [`CatalogError::PersistenceError`] on storage failure.
#[utoipa::path(
    delete,
    path = "/api/v1/books/{id}",
    tag = "Books",
    summary = "Delete a book",
    params(
        ("id" = i64, Path, description = "Book id"),
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Non-integer id", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, CatalogError> {
    let Path(id) = id?;
    let id = BookId::new(id);

    if !state.book_service.delete(id).await? {
        return Err(CatalogError::BookNotFound(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /books/search?title=...` — Search books by title substring.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRequest`] if `title` is missing, or
/// [`CatalogError::PersistenceError`] on storage failure.
#[utoipa::path(
    get,
    path = "/api/v1/books/search",
    tag = "Books",
    summary = "Search books by title",
    description = "Returns books whose title contains the given substring (ASCII case-insensitive).",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>),
        (status = 400, description = "Missing title parameter", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, CatalogError> {
    let Query(params) = params?;
    let books = state.book_service.search_by_title(&params.title).await?;
    Ok(Json(books))
}

/// `PUT`/`DELETE /books/search` — `search` shadows `{id}` here, so these
/// answer the same 400 a non-integer id gets.
async fn search_is_not_an_id() -> CatalogError {
    CatalogError::InvalidRequest("invalid book id: search".to_string())
}

/// Book routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/search",
            get(search_books)
                .put(search_is_not_an_id)
                .delete(search_is_not_an_id),
        )
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
}
