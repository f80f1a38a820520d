//! UpdateSessionHandler - the replace-with-conflict-check update path.
//!
//! Unlike the create path, update does NOT re-aggregate pages: the
//! caller's values replace the stored ones wholesale. Moving a session
//! onto a date that already holds another session for the same book is a
//! conflict, not a merge. This create/update asymmetry is deliberate and
//! mirrors how the two endpoints are used: create records another sitting,
//! update corrects a mistaken entry.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::adapters::cache::keys;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::reading::ReadingSession;
use crate::ports::{ResponseCache, SessionRepository};

/// Command to update a session's date, pages, and summary.
#[derive(Debug, Clone)]
pub struct UpdateSessionCommand {
    pub id: SessionId,
    pub date: NaiveDate,
    pub pages_read: i32,
    pub summary: Option<String>,
}

/// Handler for updating reading sessions.
pub struct UpdateSessionHandler {
    sessions: Arc<dyn SessionRepository>,
    cache: Arc<dyn ResponseCache>,
}

impl UpdateSessionHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { sessions, cache }
    }

    pub async fn handle(
        &self,
        command: UpdateSessionCommand,
    ) -> Result<ReadingSession, DomainError> {
        let mut session = self
            .sessions
            .find_by_id(&command.id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::SessionNotFound,
                    format!("Session not found: {}", command.id),
                )
            })?;

        let old_date = session.date();

        if command.date != old_date {
            let conflict = self
                .sessions
                .find_by_book_and_date(session.book_id(), command.date)
                .await?;
            if let Some(other) = conflict {
                if other.id() != session.id() {
                    return Err(DomainError::new(
                        ErrorCode::DuplicateSession,
                        format!(
                            "A session already exists for book {} on {}",
                            session.book_id(),
                            command.date
                        ),
                    ));
                }
            }
        }

        session.apply_update(command.date, command.pages_read, command.summary)?;
        self.sessions.update(&session).await?;

        keys::invalidate_statistics(self.cache.as_ref()).await;
        keys::invalidate_streak(self.cache.as_ref()).await;
        keys::invalidate_heatmap_year(self.cache.as_ref(), old_date.year()).await;
        if command.date.year() != old_date.year() {
            keys::invalidate_heatmap_year(self.cache.as_ref(), command.date.year()).await;
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cache::InMemoryCache;
    use crate::application::handlers::test_support::MockSessionRepository;
    use crate::domain::foundation::{BookId, Timestamp};
    use chrono::Duration;

    fn day(offset: i64) -> NaiveDate {
        Timestamp::today_utc() - Duration::days(offset)
    }

    fn session(book_id: BookId, date: NaiveDate, pages: i32) -> ReadingSession {
        ReadingSession::new(SessionId::new(), book_id, date, pages, None).unwrap()
    }

    #[tokio::test]
    async fn update_replaces_pages_instead_of_summing() {
        let existing = session(BookId::new(), day(2), 50);
        let sessions = Arc::new(MockSessionRepository::with_sessions(vec![existing.clone()]));
        let handler = UpdateSessionHandler::new(sessions.clone(), Arc::new(InMemoryCache::new()));

        let updated = handler
            .handle(UpdateSessionCommand {
                id: *existing.id(),
                date: day(2),
                pages_read: 30,
                summary: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.pages_read(), 30);
    }

    #[tokio::test]
    async fn moving_onto_an_occupied_date_conflicts_and_changes_nothing() {
        let book_id = BookId::new();
        let first = session(book_id, day(3), 40);
        let second = session(book_id, day(2), 60);
        let sessions = Arc::new(MockSessionRepository::with_sessions(vec![
            first.clone(),
            second.clone(),
        ]));
        let handler = UpdateSessionHandler::new(sessions.clone(), Arc::new(InMemoryCache::new()));

        let result = handler
            .handle(UpdateSessionCommand {
                id: *second.id(),
                date: day(3),
                pages_read: 60,
                summary: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err().code,
            ErrorCode::DuplicateSession
        ));
        // both original rows are unchanged
        let stored_first = sessions.find_by_id(first.id()).await.unwrap().unwrap();
        let stored_second = sessions.find_by_id(second.id()).await.unwrap().unwrap();
        assert_eq!(stored_first.pages_read(), 40);
        assert_eq!(stored_first.date(), day(3));
        assert_eq!(stored_second.pages_read(), 60);
        assert_eq!(stored_second.date(), day(2));
    }

    #[tokio::test]
    async fn keeping_the_same_date_is_not_a_conflict() {
        let existing = session(BookId::new(), day(2), 50);
        let sessions = Arc::new(MockSessionRepository::with_sessions(vec![existing.clone()]));
        let handler = UpdateSessionHandler::new(sessions, Arc::new(InMemoryCache::new()));

        let updated = handler
            .handle(UpdateSessionCommand {
                id: *existing.id(),
                date: day(2),
                pages_read: 55,
                summary: Some("fixed count".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(updated.pages_read(), 55);
        assert_eq!(updated.summary(), Some("fixed count"));
    }

    #[tokio::test]
    async fn moving_to_a_free_date_succeeds() {
        let existing = session(BookId::new(), day(5), 50);
        let sessions = Arc::new(MockSessionRepository::with_sessions(vec![existing.clone()]));
        let handler = UpdateSessionHandler::new(sessions.clone(), Arc::new(InMemoryCache::new()));

        let updated = handler
            .handle(UpdateSessionCommand {
                id: *existing.id(),
                date: day(4),
                pages_read: 50,
                summary: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.date(), day(4));
    }

    #[tokio::test]
    async fn missing_session_is_not_found() {
        let sessions = Arc::new(MockSessionRepository::default());
        let handler = UpdateSessionHandler::new(sessions, Arc::new(InMemoryCache::new()));

        let result = handler
            .handle(UpdateSessionCommand {
                id: SessionId::new(),
                date: day(1),
                pages_read: 10,
                summary: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err().code,
            ErrorCode::SessionNotFound
        ));
    }
}
