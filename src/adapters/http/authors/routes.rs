//! HTTP routes for author endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    create_author, delete_author, get_author, list_authors, update_author, AuthorsAppState,
};

/// Creates the author router with all endpoints.
pub fn author_routes(state: AuthorsAppState) -> Router {
    Router::new()
        .route("/", post(create_author))
        .route("/", get(list_authors))
        .route("/:id", get(get_author))
        .route("/:id", put(update_author))
        .route("/:id", delete(delete_author))
        .with_state(state)
}
