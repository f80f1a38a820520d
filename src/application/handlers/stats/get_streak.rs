//! StreakHandler - cached query for the reading streak.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use crate::adapters::cache::keys;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::stats::{compute_streaks, StreakSummary};
use crate::ports::{get_or_compute, ResponseCache, SessionRepository};

/// Handler for the streak endpoint. Cached under a fixed key; any session
/// write invalidates it.
pub struct StreakHandler {
    sessions: Arc<dyn SessionRepository>,
    cache: Arc<dyn ResponseCache>,
    ttl: Duration,
}

impl StreakHandler {
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

    pub async fn handle(&self) -> Result<StreakSummary, DomainError> {
        let sessions = self.sessions.clone();
        get_or_compute(
            self.cache.as_ref(),
            keys::STREAK,
            Some(self.ttl),
            || async move {
                let all = sessions.list_all().await?;
                let dates: Vec<NaiveDate> = all.iter().map(|s| s.date()).collect();
                Ok(compute_streaks(&dates, Timestamp::today_utc()))
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
    use crate::domain::foundation::{BookId, SessionId};
    use crate::domain::reading::ReadingSession;
    use chrono::Duration as ChronoDuration;

    fn session(days_ago: i64) -> ReadingSession {
        ReadingSession::new(
            SessionId::new(),
            BookId::new(),
            Timestamp::today_utc() - ChronoDuration::days(days_ago),
            10,
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn computes_and_caches_streak() {
        let sessions = Arc::new(MockSessionRepository::with_sessions(vec![
            session(2),
            session(1),
            session(0),
        ]));
        let cache = Arc::new(InMemoryCache::new());
        let handler = StreakHandler::new(sessions, cache.clone(), Duration::from_secs(3600));

        let streak = handler.handle().await.unwrap();
        assert_eq!(streak.current_streak, 3);
        assert_eq!(streak.longest_streak, 3);
        assert!(cache.get(keys::STREAK).await.is_some());
    }

    #[tokio::test]
    async fn empty_history_yields_zero_streaks() {
        let handler = StreakHandler::new(
            Arc::new(MockSessionRepository::default()),
            Arc::new(InMemoryCache::new()),
            Duration::from_secs(3600),
        );

        let streak = handler.handle().await.unwrap();
        assert_eq!(streak.current_streak, 0);
        assert_eq!(streak.longest_streak, 0);
    }
}
