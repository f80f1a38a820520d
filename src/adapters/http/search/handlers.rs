//! HTTP handler for the search endpoint.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::SearchHandler;
use crate::ports::{AuthorRepository, BookRepository};

use super::dto::{SearchParams, SearchResponse};

/// Shared state for the search endpoint.
#[derive(Clone)]
pub struct SearchAppState {
    pub books: Arc<dyn BookRepository>,
    pub authors: Arc<dyn AuthorRepository>,
}

/// GET /search?q=
pub async fn search(
    State(state): State<SearchAppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let handler = SearchHandler::new(state.books.clone(), state.authors.clone());
    let results = handler.handle(&params.q).await?;
    Ok(Json(results.into()))
}
