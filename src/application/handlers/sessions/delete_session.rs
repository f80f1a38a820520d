//! DeleteSessionHandler.

use std::sync::Arc;

use chrono::Datelike;

use crate::adapters::cache::keys;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::{ResponseCache, SessionRepository};

/// Handler for deleting reading sessions.
pub struct DeleteSessionHandler {
    sessions: Arc<dyn SessionRepository>,
    cache: Arc<dyn ResponseCache>,
}

impl DeleteSessionHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { sessions, cache }
    }

    pub async fn handle(&self, id: SessionId) -> Result<(), DomainError> {
        // fetch first so the affected heatmap year is known
        let session = self.sessions.find_by_id(&id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", id),
            )
        })?;
        self.sessions.delete(&id).await?;

        keys::invalidate_statistics(self.cache.as_ref()).await;
        keys::invalidate_streak(self.cache.as_ref()).await;
        keys::invalidate_heatmap_year(self.cache.as_ref(), session.date().year()).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cache::InMemoryCache;
    use crate::application::handlers::test_support::MockSessionRepository;
    use crate::domain::foundation::{BookId, Timestamp};
    use crate::domain::reading::ReadingSession;
    use chrono::Duration;
    use serde_json::json;

    #[tokio::test]
    async fn delete_removes_session_and_invalidates() {
        let date = Timestamp::today_utc() - Duration::days(1);
        let session =
            ReadingSession::new(SessionId::new(), BookId::new(), date, 20, None).unwrap();
        let sessions = Arc::new(MockSessionRepository::with_sessions(vec![session.clone()]));
        let cache = Arc::new(InMemoryCache::new());
        cache.put("streak", json!(1), None).await;
        cache
            .put(&keys::heatmap_year(date.year()), json!(2), None)
            .await;

        let handler = DeleteSessionHandler::new(sessions.clone(), cache.clone());
        handler.handle(*session.id()).await.unwrap();

        assert_eq!(sessions.count().await, 0);
        assert!(cache.get("streak").await.is_none());
        assert!(cache.get(&keys::heatmap_year(date.year())).await.is_none());
    }

    #[tokio::test]
    async fn deleting_missing_session_is_not_found() {
        let sessions = Arc::new(MockSessionRepository::default());
        let handler = DeleteSessionHandler::new(sessions, Arc::new(InMemoryCache::new()));

        let result = handler.handle(SessionId::new()).await;
        assert!(matches!(
            result.unwrap_err().code,
            ErrorCode::SessionNotFound
        ));
    }
}
