//! HTTP routes for reading-session endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    delete_session, get_session, list_sessions, record_session, update_session,
    SessionsAppState,
};

/// Creates the session router with all endpoints.
pub fn session_routes(state: SessionsAppState) -> Router {
    Router::new()
        .route("/", post(record_session))
        .route("/", get(list_sessions))
        .route("/:id", get(get_session))
        .route("/:id", put(update_session))
        .route("/:id", delete(delete_session))
        .with_state(state)
}
