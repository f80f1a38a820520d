//! HeatmapHandler - cached per-year heatmap query.

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::cache::keys;
use crate::domain::foundation::DomainError;
use crate::domain::stats::{heatmap_for_year, HeatmapDay};
use crate::ports::{get_or_compute, ResponseCache, SessionRepository};

/// Handler for the heatmap endpoint. One cache entry per year.
pub struct HeatmapHandler {
    sessions: Arc<dyn SessionRepository>,
    cache: Arc<dyn ResponseCache>,
    ttl: Duration,
}

impl HeatmapHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        cache: Arc<dyn ResponseCache>,
        ttl: Duration,
    ) -> Self {
        Self {
            sessions,
            cache,
            ttl,
        }
    }

    pub async fn handle(&self, year: i32) -> Result<Vec<HeatmapDay>, DomainError> {
        let sessions = self.sessions.clone();
        get_or_compute(
            self.cache.as_ref(),
            &keys::heatmap_year(year),
            Some(self.ttl),
            || async move {
                let rows = sessions.list_for_year(year).await?;
                Ok(heatmap_for_year(&rows, year))
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cache::InMemoryCache;
    use crate::application::handlers::test_support::MockSessionRepository;
    use crate::domain::foundation::{BookId, SessionId, Timestamp};
    use crate::domain::reading::ReadingSession;
    use chrono::Datelike;

    #[tokio::test]
    async fn groups_sessions_by_day_for_the_year() {
        let today = Timestamp::today_utc();
        let book_id = BookId::new();
        let sessions = vec![
            ReadingSession::new(SessionId::new(), book_id, today, 25, None).unwrap(),
            ReadingSession::new(SessionId::new(), BookId::new(), today, 30, None).unwrap(),
        ];
        let handler = HeatmapHandler::new(
            Arc::new(MockSessionRepository::with_sessions(sessions)),
            Arc::new(InMemoryCache::new()),
            Duration::from_secs(900),
        );

        let days = handler.handle(today.year()).await.unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].pages, 55);
    }

    #[tokio::test]
    async fn year_without_sessions_is_empty() {
        let handler = HeatmapHandler::new(
            Arc::new(MockSessionRepository::default()),
            Arc::new(InMemoryCache::new()),
            Duration::from_secs(900),
        );

        let days = handler.handle(1999).await.unwrap();
        assert!(days.is_empty());
    }

    #[tokio::test]
    async fn caches_per_year() {
        let cache = Arc::new(InMemoryCache::new());
        let handler = HeatmapHandler::new(
            Arc::new(MockSessionRepository::default()),
            cache.clone(),
            Duration::from_secs(900),
        );

        handler.handle(2023).await.unwrap();
        handler.handle(2024).await.unwrap();

        assert!(cache.get(&keys::heatmap_year(2023)).await.is_some());
        assert!(cache.get(&keys::heatmap_year(2024)).await.is_some());
    }
}
