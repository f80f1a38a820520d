//! Reading-session HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use handlers::SessionsAppState;
pub use routes::session_routes;
