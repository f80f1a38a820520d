//! HTTP handlers for statistics, streak, heatmap, and reading-status
//! endpoints.
//!
//! The report structs serialize straight to the response body; no
//! separate DTO layer is needed for derived data.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::{HeatmapHandler, StatisticsHandler, StreakHandler};
use crate::domain::foundation::{StatusMetadata, ALL_STATUSES};
use crate::domain::stats::{
    AuthorStats, BookStats, CompleteStats, GoalStats, HeatmapDay, OverviewStats,
    PersonalRecords, StreakSummary, TagStats, TimeStats,
};
use crate::ports::{
    AuthorRepository, BookRepository, GoalRepository, ResponseCache, SessionRepository,
    TagRepository,
};

/// Shared state for the derived-data endpoints.
#[derive(Clone)]
pub struct StatsAppState {
    pub books: Arc<dyn BookRepository>,
    pub authors: Arc<dyn AuthorRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub goals: Arc<dyn GoalRepository>,
    pub cache: Arc<dyn ResponseCache>,
    pub statistics_ttl: Duration,
    pub streak_ttl: Duration,
    pub heatmap_ttl: Duration,
}

impl StatsAppState {
    fn statistics_handler(&self) -> StatisticsHandler {
        StatisticsHandler::new(
            self.books.clone(),
            self.authors.clone(),
            self.tags.clone(),
            self.sessions.clone(),
            self.goals.clone(),
            self.cache.clone(),
            self.statistics_ttl,
        )
    }

    fn streak_handler(&self) -> StreakHandler {
        StreakHandler::new(self.sessions.clone(), self.cache.clone(), self.streak_ttl)
    }

    fn heatmap_handler(&self) -> HeatmapHandler {
        HeatmapHandler::new(self.sessions.clone(), self.cache.clone(), self.heatmap_ttl)
    }
}

/// GET /statistics/overview
pub async fn statistics_overview(
    State(state): State<StatsAppState>,
) -> Result<Json<OverviewStats>, ApiError> {
    Ok(Json(state.statistics_handler().overview().await?))
}

/// GET /statistics/authors
pub async fn statistics_authors(
    State(state): State<StatsAppState>,
) -> Result<Json<AuthorStats>, ApiError> {
    Ok(Json(state.statistics_handler().authors().await?))
}

/// GET /statistics/tags
pub async fn statistics_tags(
    State(state): State<StatsAppState>,
) -> Result<Json<TagStats>, ApiError> {
    Ok(Json(state.statistics_handler().tags().await?))
}

/// GET /statistics/time-based
pub async fn statistics_time_based(
    State(state): State<StatsAppState>,
) -> Result<Json<TimeStats>, ApiError> {
    Ok(Json(state.statistics_handler().time_based().await?))
}

/// GET /statistics/goals
pub async fn statistics_goals(
    State(state): State<StatsAppState>,
) -> Result<Json<GoalStats>, ApiError> {
    Ok(Json(state.statistics_handler().goals().await?))
}

/// GET /statistics/books
pub async fn statistics_books(
    State(state): State<StatsAppState>,
) -> Result<Json<BookStats>, ApiError> {
    Ok(Json(state.statistics_handler().books().await?))
}

/// GET /statistics/records
pub async fn statistics_records(
    State(state): State<StatsAppState>,
) -> Result<Json<PersonalRecords>, ApiError> {
    Ok(Json(state.statistics_handler().records().await?))
}

/// GET /statistics/complete
pub async fn statistics_complete(
    State(state): State<StatsAppState>,
) -> Result<Json<CompleteStats>, ApiError> {
    Ok(Json(state.statistics_handler().complete().await?))
}

/// GET /streak
pub async fn get_streak(
    State(state): State<StatsAppState>,
) -> Result<Json<StreakSummary>, ApiError> {
    Ok(Json(state.streak_handler().handle().await?))
}

/// GET /heatmap/:year
pub async fn get_heatmap(
    State(state): State<StatsAppState>,
    Path(year): Path<String>,
) -> Result<Json<Vec<HeatmapDay>>, ApiError> {
    let year: i32 = year
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid year"))?;
    if !(1900..=2200).contains(&year) {
        return Err(ApiError::bad_request("Year out of range"));
    }

    Ok(Json(state.heatmap_handler().handle(year).await?))
}

/// GET /readingstatus
pub async fn reading_statuses() -> Json<Vec<StatusMetadata>> {
    Json(ALL_STATUSES.clone())
}
