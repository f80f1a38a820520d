//! Book HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::BookResponse;
pub use handlers::BooksAppState;
pub use routes::book_routes;
