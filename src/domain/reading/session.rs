//! Reading session entity.
//!
//! A session records pages read for one book on one calendar day. For a
//! given book at most one session exists per date; the application layer
//! enforces this by merging the create path into an existing same-day
//! session (see the record handler) and conflict-checking the update path.

use crate::domain::foundation::{BookId, DomainError, SessionId, Timestamp, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's reading for one book.
///
/// # Invariants
///
/// - `pages_read` is positive
/// - `date` is not in the future (UTC, calendar-day comparison)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingSession {
    id: SessionId,
    book_id: BookId,
    date: NaiveDate,
    pages_read: i32,
    summary: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ReadingSession {
    /// Create a new reading session.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if pages_read is not positive or date is in
    ///   the future
    pub fn new(
        id: SessionId,
        book_id: BookId,
        date: NaiveDate,
        pages_read: i32,
        summary: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::validate_pages(pages_read)?;
        Self::validate_date(date)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            book_id,
            date,
            pages_read,
            summary,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a session from persistence (no validation).
    pub fn reconstitute(
        id: SessionId,
        book_id: BookId,
        date: NaiveDate,
        pages_read: i32,
        summary: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            book_id,
            date,
            pages_read,
            summary,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn book_id(&self) -> &BookId {
        &self.book_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn pages_read(&self) -> i32 {
        self.pages_read
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Merge another reading of the same (book, date) into this session.
    ///
    /// Pages are summed; the summary is replaced when the newer reading
    /// carries one (last writer wins). This is the create-path merge only —
    /// the update path replaces fields instead.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if extra_pages is not positive
    pub fn merge_pages(
        &mut self,
        extra_pages: i32,
        summary: Option<String>,
    ) -> Result<(), DomainError> {
        Self::validate_pages(extra_pages)?;

        self.pages_read += extra_pages;
        if summary.is_some() {
            self.summary = summary;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Replace the session's fields (update path).
    ///
    /// The caller is responsible for conflict-checking the new
    /// (book, date) pair against other sessions first.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if pages_read is not positive or date is in
    ///   the future
    pub fn apply_update(
        &mut self,
        date: NaiveDate,
        pages_read: i32,
        summary: Option<String>,
    ) -> Result<(), DomainError> {
        Self::validate_pages(pages_read)?;
        Self::validate_date(date)?;

        self.date = date;
        self.pages_read = pages_read;
        self.summary = summary;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    fn validate_pages(pages: i32) -> Result<(), DomainError> {
        if pages <= 0 {
            return Err(ValidationError::not_positive("pages_read", pages).into());
        }
        Ok(())
    }

    fn validate_date(date: NaiveDate) -> Result<(), DomainError> {
        if date > Timestamp::today_utc() {
            return Err(
                ValidationError::invalid_value("date", "cannot be in the future").into(),
            );
        }
        Ok(())
    }
}
