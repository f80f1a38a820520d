//! HTTP routes for reading-goal endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    create_goal, delete_goal, get_goal_for_book, list_goals, update_goal, GoalsAppState,
};

/// Creates the goal router with all endpoints.
pub fn goal_routes(state: GoalsAppState) -> Router {
    Router::new()
        .route("/", post(create_goal))
        .route("/", get(list_goals))
        .route("/book/:book_id", get(get_goal_for_book))
        .route("/:id", put(update_goal))
        .route("/:id", delete(delete_goal))
        .with_state(state)
}
