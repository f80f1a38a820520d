//! PostgreSQL implementation of SessionRepository.
//!
//! The `reading_sessions` table carries a unique (book_id, date) index as
//! a backstop; the application-layer upsert rule is what keeps the pair
//! unique in practice.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{BookId, DomainError, ErrorCode, SessionId, Timestamp};
use crate::domain::reading::ReadingSession;
use crate::ports::SessionRepository;

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    /// Creates a new PostgresSessionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return DomainError::new(
                ErrorCode::DuplicateSession,
                "A session already exists for this book and date",
            );
        }
    }
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to insert session: {}", e),
    )
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn save(&self, session: &ReadingSession) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO reading_sessions (
                id, book_id, date, pages_read, summary, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.book_id().as_uuid())
        .bind(session.date())
        .bind(session.pages_read())
        .bind(session.summary())
        .bind(session.created_at().as_datetime())
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(())
    }

    async fn update(&self, session: &ReadingSession) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE reading_sessions SET
                book_id = $2,
                date = $3,
                pages_read = $4,
                summary = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.book_id().as_uuid())
        .bind(session.date())
        .bind(session.pages_read())
        .bind(session.summary())
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update session: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<ReadingSession>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, book_id, date, pages_read, summary, created_at, updated_at
            FROM reading_sessions WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch session: {}", e),
            )
        })?;

        row.map(row_to_session).transpose()
    }

    async fn find_by_book_and_date(
        &self,
        book_id: &BookId,
        date: NaiveDate,
    ) -> Result<Option<ReadingSession>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, book_id, date, pages_read, summary, created_at, updated_at
            FROM reading_sessions WHERE book_id = $1 AND date = $2
            "#,
        )
        .bind(book_id.as_uuid())
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch session by book and date: {}", e),
            )
        })?;

        row.map(row_to_session).transpose()
    }

    async fn list_for_book(
        &self,
        book_id: &BookId,
    ) -> Result<Vec<ReadingSession>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, book_id, date, pages_read, summary, created_at, updated_at
            FROM reading_sessions WHERE book_id = $1 ORDER BY date
            "#,
        )
        .bind(book_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list sessions for book: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn list_for_year(&self, year: i32) -> Result<Vec<ReadingSession>, DomainError> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid year: {}", year))
        })?;
        let end = NaiveDate::from_ymd_opt(year + 1, 1, 1).ok_or_else(|| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid year: {}", year))
        })?;

        let rows = sqlx::query(
            r#"
            SELECT id, book_id, date, pages_read, summary, created_at, updated_at
            FROM reading_sessions WHERE date >= $1 AND date < $2 ORDER BY date
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list sessions for year: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn list_all(&self) -> Result<Vec<ReadingSession>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, book_id, date, pages_read, summary, created_at, updated_at
            FROM reading_sessions ORDER BY date
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list sessions: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM reading_sessions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete session: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<ReadingSession, DomainError> {
    let get_err = |field: &str, e: sqlx::Error| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", field, e),
        )
    };

    let id: uuid::Uuid = row.try_get("id").map_err(|e| get_err("id", e))?;
    let book_id: uuid::Uuid = row.try_get("book_id").map_err(|e| get_err("book_id", e))?;
    let date: NaiveDate = row.try_get("date").map_err(|e| get_err("date", e))?;
    let pages_read: i32 = row
        .try_get("pages_read")
        .map_err(|e| get_err("pages_read", e))?;
    let summary: Option<String> = row.try_get("summary").map_err(|e| get_err("summary", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| get_err("created_at", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| get_err("updated_at", e))?;

    Ok(ReadingSession::reconstitute(
        SessionId::from_uuid(id),
        BookId::from_uuid(book_id),
        date,
        pages_read,
        summary,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
