//! # book-catalog
//!
//! REST API for a catalog of books backed by SQLite.
//!
//! Requests are plain request/response glue: handlers decode JSON and path
//! parameters, call one [`service::BookService`] method, and the service
//! runs one parameterized statement against the shared pool.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── BookService (service/)
//!     │
//!     └── SQLite pool (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
