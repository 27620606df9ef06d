//! Service layer: the book persistence service.
//!
//! [`BookService`] owns the store handle and translates each typed
//! operation into a single parameterized SQL statement.

pub mod book_service;

pub use book_service::BookService;
