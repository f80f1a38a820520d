//! Reading-goal HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use handlers::GoalsAppState;
pub use routes::goal_routes;
