//! ListSessionsHandler.

use std::sync::Arc;

use crate::domain::foundation::{BookId, DomainError, ErrorCode, SessionId};
use crate::domain::reading::ReadingSession;
use crate::ports::SessionRepository;

/// Query to list sessions, optionally restricted to one book.
#[derive(Debug, Clone, Default)]
pub struct ListSessionsQuery {
    pub book_id: Option<BookId>,
}

/// Handler for listing reading sessions.
pub struct ListSessionsHandler {
    sessions: Arc<dyn SessionRepository>,
}

impl ListSessionsHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn handle(
        &self,
        query: ListSessionsQuery,
    ) -> Result<Vec<ReadingSession>, DomainError> {
        match query.book_id {
            Some(book_id) => self.sessions.list_for_book(&book_id).await,
            None => self.sessions.list_all().await,
        }
    }
}

/// Handler for fetching one session.
pub struct GetSessionHandler {
    sessions: Arc<dyn SessionRepository>,
}

impl GetSessionHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, id: SessionId) -> Result<ReadingSession, DomainError> {
        self.sessions.find_by_id(&id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", id),
            )
        })
    }
}
