//! Book aggregate entity.
//!
//! A book belongs to one author and is the anchor for reading sessions,
//! tag assignments, and an optional reading goal. Dependents are owned at
//! the persistence layer and cascade on delete.

use crate::domain::foundation::{
    AuthorId, BookId, DomainError, ReadingStatus, Timestamp, ValidationError,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Book aggregate.
///
/// # Invariants
///
/// - `title` is non-empty
/// - `total_pages` is positive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier for this book.
    id: BookId,

    /// Author who wrote this book.
    author_id: AuthorId,

    /// Book title.
    title: String,

    /// Total page count.
    total_pages: i32,

    /// Current reading status.
    status: ReadingStatus,

    /// When the user started reading, if started.
    started_reading_date: Option<NaiveDate>,

    /// When the user finished reading, if finished.
    completed_date: Option<NaiveDate>,

    /// Optional free-form summary.
    summary: Option<String>,

    /// When the book was created.
    created_at: Timestamp,

    /// When the book was last updated.
    updated_at: Timestamp,
}

impl Book {
    /// Create a new book with NotReading status.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if title is empty or total_pages is not positive
    pub fn new(
        id: BookId,
        author_id: AuthorId,
        title: String,
        total_pages: i32,
    ) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;
        Self::validate_total_pages(total_pages)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            author_id,
            title,
            total_pages,
            status: ReadingStatus::NotReading,
            started_reading_date: None,
            completed_date: None,
            summary: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a book from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: BookId,
        author_id: AuthorId,
        title: String,
        total_pages: i32,
        status: ReadingStatus,
        started_reading_date: Option<NaiveDate>,
        completed_date: Option<NaiveDate>,
        summary: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            author_id,
            title,
            total_pages,
            status,
            started_reading_date,
            completed_date,
            summary,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn author_id(&self) -> &AuthorId {
        &self.author_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn total_pages(&self) -> i32 {
        self.total_pages
    }

    pub fn status(&self) -> ReadingStatus {
        self.status
    }

    pub fn started_reading_date(&self) -> Option<NaiveDate> {
        self.started_reading_date
    }

    pub fn completed_date(&self) -> Option<NaiveDate> {
        self.completed_date
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

    /// Elapsed days from start to completion, if both dates are set.
    pub fn days_to_complete(&self) -> Option<i64> {
        match (self.started_reading_date, self.completed_date) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Set the reading status.
    ///
    /// Any status may be set directly; there is no enforced transition
    /// table.
    pub fn set_status(&mut self, status: ReadingStatus) {
        self.status = status;
        self.updated_at = Timestamp::now();
    }

    /// Update the book's editable fields.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if title is empty or total_pages is not positive
    #[allow(clippy::too_many_arguments)]
    pub fn update_details(
        &mut self,
        author_id: AuthorId,
        title: String,
        total_pages: i32,
        status: ReadingStatus,
        started_reading_date: Option<NaiveDate>,
        completed_date: Option<NaiveDate>,
        summary: Option<String>,
    ) -> Result<(), DomainError> {
        Self::validate_title(&title)?;
        Self::validate_total_pages(total_pages)?;

        self.author_id = author_id;
        self.title = title;
        self.total_pages = total_pages;
        self.status = status;
        self.started_reading_date = started_reading_date;
        self.completed_date = completed_date;
        self.summary = summary;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_title(title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }
        Ok(())
    }

    fn validate_total_pages(total_pages: i32) -> Result<(), DomainError> {
        if total_pages <= 0 {
            return Err(ValidationError::not_positive("total_pages", total_pages).into());
        }
        Ok(())
    }
}
