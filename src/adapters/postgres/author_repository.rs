//! PostgreSQL implementation of AuthorRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::catalog::Author;
use crate::domain::foundation::{AuthorId, DomainError, ErrorCode, Timestamp};
use crate::ports::AuthorRepository;

/// PostgreSQL implementation of AuthorRepository.
#[derive(Clone)]
pub struct PostgresAuthorRepository {
    pool: PgPool,
}

impl PostgresAuthorRepository {
    /// Creates a new PostgresAuthorRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn save(&self, author: &Author) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO authors (id, name, bio, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(author.id().as_uuid())
        .bind(author.name())
        .bind(author.bio())
        .bind(author.image_url())
        .bind(author.created_at().as_datetime())
        .bind(author.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert author: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, author: &Author) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE authors SET
                name = $2,
                bio = $3,
                image_url = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(author.id().as_uuid())
        .bind(author.name())
        .bind(author.bio())
        .bind(author.image_url())
        .bind(author.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update author: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::AuthorNotFound,
                format!("Author not found: {}", author.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, bio, image_url, created_at, updated_at
            FROM authors WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch author: {}", e),
            )
        })?;

        row.map(row_to_author).transpose()
    }

    async fn list(&self) -> Result<Vec<Author>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, bio, image_url, created_at, updated_at
            FROM authors ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list authors: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_author).collect()
    }

    async fn search(&self, query: &str) -> Result<Vec<Author>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, bio, image_url, created_at, updated_at
            FROM authors WHERE name ILIKE $1 ORDER BY name
            "#,
        )
        .bind(format!("%{}%", query))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to search authors: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_author).collect()
    }

    async fn delete(&self, id: &AuthorId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete author: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::AuthorNotFound,
                format!("Author not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_author(row: sqlx::postgres::PgRow) -> Result<Author, DomainError> {
    let get_err = |field: &str, e: sqlx::Error| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", field, e),
        )
    };

    let id: uuid::Uuid = row.try_get("id").map_err(|e| get_err("id", e))?;
    let name: String = row.try_get("name").map_err(|e| get_err("name", e))?;
    let bio: Option<String> = row.try_get("bio").map_err(|e| get_err("bio", e))?;
    let image_url: Option<String> = row
        .try_get("image_url")
        .map_err(|e| get_err("image_url", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| get_err("created_at", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| get_err("updated_at", e))?;

    Ok(Author::reconstitute(
        AuthorId::from_uuid(id),
        name,
        bio,
        image_url,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
