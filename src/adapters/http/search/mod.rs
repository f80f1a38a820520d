//! Search HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use handlers::SearchAppState;
pub use routes::search_routes;
