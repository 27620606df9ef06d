//! Book-related request DTOs.

use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for `GET /books/search`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Substring to look for in book titles.
    pub title: String,
}
