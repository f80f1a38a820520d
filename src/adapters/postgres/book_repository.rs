//! PostgreSQL implementation of BookRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::catalog::Book;
use crate::domain::foundation::{
    AuthorId, BookId, DomainError, ErrorCode, ReadingStatus, Timestamp,
};
use crate::ports::BookRepository;

/// PostgreSQL implementation of BookRepository.
#[derive(Clone)]
pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    /// Creates a new PostgresBookRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = "id, author_id, title, total_pages, status, \
     started_reading_date, completed_date, summary, created_at, updated_at";

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn save(&self, book: &Book) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO books (
                id, author_id, title, total_pages, status,
                started_reading_date, completed_date, summary, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(book.id().as_uuid())
        .bind(book.author_id().as_uuid())
        .bind(book.title())
        .bind(book.total_pages())
        .bind(reading_status_to_str(book.status()))
        .bind(book.started_reading_date())
        .bind(book.completed_date())
        .bind(book.summary())
        .bind(book.created_at().as_datetime())
        .bind(book.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert book: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, book: &Book) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE books SET
                author_id = $2,
                title = $3,
                total_pages = $4,
                status = $5,
                started_reading_date = $6,
                completed_date = $7,
                summary = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(book.id().as_uuid())
        .bind(book.author_id().as_uuid())
        .bind(book.title())
        .bind(book.total_pages())
        .bind(reading_status_to_str(book.status()))
        .bind(book.started_reading_date())
        .bind(book.completed_date())
        .bind(book.summary())
        .bind(book.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update book: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::BookNotFound,
                format!("Book not found: {}", book.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM books WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch book: {}", e),
            )
        })?;

        row.map(row_to_book).transpose()
    }

    async fn list(&self) -> Result<Vec<Book>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM books ORDER BY title",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list books: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_book).collect()
    }

    async fn list_by_author(&self, author_id: &AuthorId) -> Result<Vec<Book>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM books WHERE author_id = $1 ORDER BY title",
            SELECT_COLUMNS
        ))
        .bind(author_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list books by author: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_book).collect()
    }

    async fn search(&self, query: &str) -> Result<Vec<Book>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM books WHERE title ILIKE $1 ORDER BY title",
            SELECT_COLUMNS
        ))
        .bind(format!("%{}%", query))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to search books: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_book).collect()
    }

    async fn delete(&self, id: &BookId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete book: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::BookNotFound,
                format!("Book not found: {}", id),
            ));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

pub(crate) fn reading_status_to_str(status: ReadingStatus) -> &'static str {
    match status {
        ReadingStatus::NotReading => "not_reading",
        ReadingStatus::Planning => "planning",
        ReadingStatus::CurrentlyReading => "currently_reading",
        ReadingStatus::Completed => "completed",
        ReadingStatus::Summarized => "summarized",
    }
}

pub(crate) fn str_to_reading_status(s: &str) -> Result<ReadingStatus, DomainError> {
    match s {
        "not_reading" => Ok(ReadingStatus::NotReading),
        "planning" => Ok(ReadingStatus::Planning),
        "currently_reading" => Ok(ReadingStatus::CurrentlyReading),
        "completed" => Ok(ReadingStatus::Completed),
        "summarized" => Ok(ReadingStatus::Summarized),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid reading status: {}", s),
        )),
    }
}

fn row_to_book(row: sqlx::postgres::PgRow) -> Result<Book, DomainError> {
    let get_err = |field: &str, e: sqlx::Error| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", field, e),
        )
    };

    let id: uuid::Uuid = row.try_get("id").map_err(|e| get_err("id", e))?;
    let author_id: uuid::Uuid = row
        .try_get("author_id")
        .map_err(|e| get_err("author_id", e))?;
    let title: String = row.try_get("title").map_err(|e| get_err("title", e))?;
    let total_pages: i32 = row
        .try_get("total_pages")
        .map_err(|e| get_err("total_pages", e))?;
    let status_str: String = row.try_get("status").map_err(|e| get_err("status", e))?;
    let started_reading_date: Option<chrono::NaiveDate> = row
        .try_get("started_reading_date")
        .map_err(|e| get_err("started_reading_date", e))?;
    let completed_date: Option<chrono::NaiveDate> = row
        .try_get("completed_date")
        .map_err(|e| get_err("completed_date", e))?;
    let summary: Option<String> = row.try_get("summary").map_err(|e| get_err("summary", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| get_err("created_at", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| get_err("updated_at", e))?;

    Ok(Book::reconstitute(
        BookId::from_uuid(id),
        AuthorId::from_uuid(author_id),
        title,
        total_pages,
        str_to_reading_status(&status_str)?,
        started_reading_date,
        completed_date,
        summary,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_status_conversion_roundtrips() {
        for status in ReadingStatus::ALL {
            assert_eq!(
                str_to_reading_status(reading_status_to_str(status)).unwrap(),
                status
            );
        }
    }

    #[test]
    fn str_to_reading_status_rejects_invalid() {
        assert!(str_to_reading_status("invalid").is_err());
    }
}
