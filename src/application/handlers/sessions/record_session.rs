//! RecordSessionHandler - the merge-on-conflict create path.
//!
//! At most one session exists per (book, date). Recording a second
//! reading for the same pair merges the new pages into the existing
//! session instead of inserting a duplicate row.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::adapters::cache::keys;
use crate::domain::foundation::{BookId, DomainError, ErrorCode, SessionId};
use crate::domain::reading::ReadingSession;
use crate::ports::{BookRepository, ResponseCache, SessionRepository};

/// Command to record pages read for a book on a date.
#[derive(Debug, Clone)]
pub struct RecordSessionCommand {
    pub book_id: BookId,
    pub date: NaiveDate,
    pub pages_read: i32,
    pub summary: Option<String>,
}

/// Outcome of recording: the stored session, and whether it was merged
/// into an existing same-day row.
#[derive(Debug, Clone)]
pub struct RecordSessionResult {
    pub session: ReadingSession,
    pub merged: bool,
}

/// Handler for recording reading sessions.
pub struct RecordSessionHandler {
    sessions: Arc<dyn SessionRepository>,
    books: Arc<dyn BookRepository>,
    cache: Arc<dyn ResponseCache>,
}

impl RecordSessionHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        books: Arc<dyn BookRepository>,
        cache: Arc<dyn ResponseCache>,
    ) -> Self {
        Self {
            sessions,
            books,
            cache,
        }
    }

    pub async fn handle(
        &self,
        command: RecordSessionCommand,
    ) -> Result<RecordSessionResult, DomainError> {
        if self.books.find_by_id(&command.book_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::BookNotFound,
                format!("Book not found: {}", command.book_id),
            ));
        }

        let result = match self
            .sessions
            .find_by_book_and_date(&command.book_id, command.date)
            .await?
        {
            Some(mut existing) => {
                existing.merge_pages(command.pages_read, command.summary)?;
                self.sessions.update(&existing).await?;
                tracing::debug!(
                    session_id = %existing.id(),
                    date = %command.date,
                    "session_merged"
                );
                RecordSessionResult {
                    session: existing,
                    merged: true,
                }
            }
            None => {
                let session = ReadingSession::new(
                    SessionId::new(),
                    command.book_id,
                    command.date,
                    command.pages_read,
                    command.summary,
                )?;
                self.sessions.save(&session).await?;
                RecordSessionResult {
                    session,
                    merged: false,
                }
            }
        };

        keys::invalidate_statistics(self.cache.as_ref()).await;
        keys::invalidate_streak(self.cache.as_ref()).await;
        keys::invalidate_heatmap_year(self.cache.as_ref(), command.date.year()).await;
        Ok(result)
    }
}
