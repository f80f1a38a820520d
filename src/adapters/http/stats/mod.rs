//! Derived-data HTTP adapter: statistics, streak, heatmap, status
//! metadata.

mod handlers;
mod routes;

pub use handlers::StatsAppState;
pub use routes::stats_routes;
