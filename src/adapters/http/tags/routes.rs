//! HTTP routes for tag endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    assign_tag, create_tag, delete_tag, get_tag, list_tags, unassign_tag, update_tag,
    TagsAppState,
};

/// Creates the tag router with all endpoints.
pub fn tag_routes(state: TagsAppState) -> Router {
    Router::new()
        .route("/", post(create_tag))
        .route("/", get(list_tags))
        .route("/:id", get(get_tag))
        .route("/:id", put(update_tag))
        .route("/:id", delete(delete_tag))
        .route("/:id/books", post(assign_tag))
        .route("/:id/books/:book_id", delete(unassign_tag))
        .with_state(state)
}
