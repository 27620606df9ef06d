//! Domain layer: the book entity and its identifier.
//!
//! These types are shared by the service layer (row mapping) and the REST
//! layer (JSON bodies and OpenAPI schemas).

pub mod book;
pub mod book_id;

pub use book::{Book, NewBook};
pub use book_id::BookId;
