//! HTTP routes for the derived-data endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    get_heatmap, get_streak, reading_statuses, statistics_authors, statistics_books,
    statistics_complete, statistics_goals, statistics_overview, statistics_records,
    statistics_tags, statistics_time_based, StatsAppState,
};

/// Creates the router for statistics, streak, heatmap, and status
/// metadata. Mounted at the API root.
pub fn stats_routes(state: StatsAppState) -> Router {
    Router::new()
        .route("/statistics/overview", get(statistics_overview))
        .route("/statistics/authors", get(statistics_authors))
        .route("/statistics/tags", get(statistics_tags))
        .route("/statistics/time-based", get(statistics_time_based))
        .route("/statistics/goals", get(statistics_goals))
        .route("/statistics/books", get(statistics_books))
        .route("/statistics/records", get(statistics_records))
        .route("/statistics/complete", get(statistics_complete))
        .route("/streak", get(get_streak))
        .route("/heatmap/:year", get(get_heatmap))
        .route("/readingstatus", get(reading_statuses))
        .with_state(state)
}
