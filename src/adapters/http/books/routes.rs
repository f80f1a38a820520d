//! HTTP routes for book endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    create_book, delete_book, get_book, list_books, update_book, BooksAppState,
};

/// Creates the book router with all endpoints.
pub fn book_routes(state: BooksAppState) -> Router {
    Router::new()
        .route("/", post(create_book))
        .route("/", get(list_books))
        .route("/:id", get(get_book))
        .route("/:id", put(update_book))
        .route("/:id", delete(delete_book))
        .with_state(state)
}
