//! PostgreSQL implementation of TagRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::catalog::{Tag, TagAssignment};
use crate::domain::foundation::{BookId, DomainError, ErrorCode, TagId, Timestamp};
use crate::ports::TagRepository;

/// PostgreSQL implementation of TagRepository.
#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    /// Creates a new PostgresTagRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn save(&self, tag: &Tag) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO tags (id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(tag.id().as_uuid())
        .bind(tag.name())
        .bind(tag.created_at().as_datetime())
        .bind(tag.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert tag: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, tag: &Tag) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE tags SET name = $2, updated_at = $3 WHERE id = $1
            "#,
        )
        .bind(tag.id().as_uuid())
        .bind(tag.name())
        .bind(tag.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update tag: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::TagNotFound,
                format!("Tag not found: {}", tag.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &TagId) -> Result<Option<Tag>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at, updated_at FROM tags WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch tag: {}", e),
            )
        })?;

        row.map(row_to_tag).transpose()
    }

    async fn list(&self) -> Result<Vec<Tag>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at, updated_at FROM tags ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list tags: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_tag).collect()
    }

    async fn list_assignments(&self) -> Result<Vec<TagAssignment>, DomainError> {
        let rows = sqlx::query("SELECT book_id, tag_id FROM book_tags")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to list tag assignments: {}", e),
                )
            })?;

        rows.into_iter().map(row_to_assignment).collect()
    }

    async fn list_assignments_for_book(
        &self,
        book_id: &BookId,
    ) -> Result<Vec<TagAssignment>, DomainError> {
        let rows = sqlx::query("SELECT book_id, tag_id FROM book_tags WHERE book_id = $1")
            .bind(book_id.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to list tag assignments for book: {}", e),
                )
            })?;

        rows.into_iter().map(row_to_assignment).collect()
    }

    async fn assign(&self, assignment: &TagAssignment) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO book_tags (book_id, tag_id)
            VALUES ($1, $2)
            ON CONFLICT (book_id, tag_id) DO NOTHING
            "#,
        )
        .bind(assignment.book_id.as_uuid())
        .bind(assignment.tag_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to assign tag: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::DuplicateTagAssignment,
                format!(
                    "Book {} already carries tag {}",
                    assignment.book_id, assignment.tag_id
                ),
            ));
        }

        Ok(())
    }

    async fn unassign(&self, assignment: &TagAssignment) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM book_tags WHERE book_id = $1 AND tag_id = $2")
            .bind(assignment.book_id.as_uuid())
            .bind(assignment.tag_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to unassign tag: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::TagNotFound,
                format!(
                    "Book {} does not carry tag {}",
                    assignment.book_id, assignment.tag_id
                ),
            ));
        }

        Ok(())
    }

    async fn delete(&self, id: &TagId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete tag: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::TagNotFound,
                format!("Tag not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_tag(row: sqlx::postgres::PgRow) -> Result<Tag, DomainError> {
    let get_err = |field: &str, e: sqlx::Error| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", field, e),
        )
    };

    let id: uuid::Uuid = row.try_get("id").map_err(|e| get_err("id", e))?;
    let name: String = row.try_get("name").map_err(|e| get_err("name", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| get_err("created_at", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| get_err("updated_at", e))?;

    Ok(Tag::reconstitute(
        TagId::from_uuid(id),
        name,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

fn row_to_assignment(row: sqlx::postgres::PgRow) -> Result<TagAssignment, DomainError> {
    let get_err = |field: &str, e: sqlx::Error| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", field, e),
        )
    };

    let book_id: uuid::Uuid = row.try_get("book_id").map_err(|e| get_err("book_id", e))?;
    let tag_id: uuid::Uuid = row.try_get("tag_id").map_err(|e| get_err("tag_id", e))?;

    Ok(TagAssignment::new(
        BookId::from_uuid(book_id),
        TagId::from_uuid(tag_id),
    ))
}
