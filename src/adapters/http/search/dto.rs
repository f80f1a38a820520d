//! HTTP DTOs for the search endpoint.

use serde::{Deserialize, Serialize};

use crate::adapters::http::authors::AuthorResponse;
use crate::adapters::http::books::BookResponse;
use crate::application::handlers::SearchResults;

/// Query parameters for search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Combined search response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub books: Vec<BookResponse>,
    pub authors: Vec<AuthorResponse>,
}

impl From<SearchResults> for SearchResponse {
    fn from(results: SearchResults) -> Self {
        Self {
            books: results.books.into_iter().map(Into::into).collect(),
            authors: results.authors.into_iter().map(Into::into).collect(),
        }
    }
}
