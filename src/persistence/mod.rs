//! Persistence layer: SQLite pool bootstrap and row models.
//!
//! The pool is opened once at startup and cloned into the application
//! state; [`crate::service::BookService`] issues all statements against it.

pub mod models;
pub mod sqlite;

pub use sqlite::{connect, ensure_schema};
