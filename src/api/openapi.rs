//! OpenAPI document for the catalog API.

use axum::Router;
use utoipa::OpenApi;

use crate::api::handlers::{books, system};
use crate::app_state::AppState;
use crate::domain::{Book, BookId, NewBook};
use crate::error::{ErrorBody, ErrorResponse};

/// Aggregated OpenAPI description of every endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "book-catalog",
        description = "CRUD and title search over a catalog of books."
    ),
    paths(
        books::list_books,
        books::create_book,
        books::get_book,
        books::update_book,
        books::delete_book,
        books::search_books,
        system::health_handler,
    ),
    components(schemas(Book, NewBook, BookId, ErrorResponse, ErrorBody, system::HealthResponse)),
    tags(
        (name = "Books", description = "Catalog management"),
        (name = "System", description = "Health and metadata"),
    )
)]
pub struct ApiDoc;

/// Serves Swagger UI at `/swagger-ui` and the document at
/// `/api-docs/openapi.json`.
#[cfg(feature = "swagger-ui")]
pub fn routes() -> Router<AppState> {
    Router::new().merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
}

/// Serves the document at `/api-docs/openapi.json`.
#[cfg(not(feature = "swagger-ui"))]
pub fn routes() -> Router<AppState> {
    use axum::Json;
    use axum::routing::get;

    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
