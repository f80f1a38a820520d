//! HTTP route for search.

use axum::{routing::get, Router};

use super::handlers::{search, SearchAppState};

/// Creates the search router. Mounted at the API root.
pub fn search_routes(state: SearchAppState) -> Router {
    Router::new().route("/search", get(search)).with_state(state)
}
