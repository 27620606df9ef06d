//! Data Transfer Objects for REST request/response serialization.
//!
//! Book bodies reuse [`crate::domain::Book`] and [`crate::domain::NewBook`]
//! directly; this module holds the request shapes that exist only at the
//! HTTP boundary.

pub mod book_dto;

pub use book_dto::*;
