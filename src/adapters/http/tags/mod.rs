//! Tag HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use handlers::TagsAppState;
pub use routes::tag_routes;
