//! Author HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::AuthorResponse;
pub use handlers::AuthorsAppState;
pub use routes::author_routes;
