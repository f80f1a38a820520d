//! Reading-session repository port.
//!
//! The `find_by_book_and_date` lookup is what the application-layer upsert
//! rule builds on: at most one session exists per (book, date) pair, dates
//! compared by calendar day only.

use crate::domain::foundation::{BookId, DomainError, SessionId};
use crate::domain::reading::ReadingSession;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Repository port for ReadingSession persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, session: &ReadingSession) -> Result<(), DomainError>;

    /// Update an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, session: &ReadingSession) -> Result<(), DomainError>;

    /// Find a session by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<ReadingSession>, DomainError>;

    /// Find the session for a (book, date) pair, if one exists.
    async fn find_by_book_and_date(
        &self,
        book_id: &BookId,
        date: NaiveDate,
    ) -> Result<Option<ReadingSession>, DomainError>;

    /// List all sessions for one book, ascending by date.
    async fn list_for_book(&self, book_id: &BookId) -> Result<Vec<ReadingSession>, DomainError>;

    /// List all sessions within one calendar year, ascending by date.
    async fn list_for_year(&self, year: i32) -> Result<Vec<ReadingSession>, DomainError>;

    /// List every session, ascending by date.
    async fn list_all(&self) -> Result<Vec<ReadingSession>, DomainError>;

    /// Delete a session by ID.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &SessionId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SessionRepository) {}
    }
}
