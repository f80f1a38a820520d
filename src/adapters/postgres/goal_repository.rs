//! PostgreSQL implementation of GoalRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{BookId, DomainError, ErrorCode, GoalId, Timestamp};
use crate::domain::reading::ReadingGoal;
use crate::ports::GoalRepository;

/// PostgreSQL implementation of GoalRepository.
///
/// The `reading_goals` table carries a unique index on `book_id`, which is
/// what surfaces the one-goal-per-book conflict.
#[derive(Clone)]
pub struct PostgresGoalRepository {
    pool: PgPool,
}

impl PostgresGoalRepository {
    /// Creates a new PostgresGoalRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalRepository for PostgresGoalRepository {
    async fn save(&self, goal: &ReadingGoal) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO reading_goals (
                id, book_id, low_goal, medium_goal, high_goal, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(goal.id().as_uuid())
        .bind(goal.book_id().as_uuid())
        .bind(goal.low_goal())
        .bind(goal.medium_goal())
        .bind(goal.high_goal())
        .bind(goal.created_at().as_datetime())
        .bind(goal.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return DomainError::new(
                        ErrorCode::DuplicateGoal,
                        format!("Book {} already has a reading goal", goal.book_id()),
                    );
                }
            }
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert goal: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, goal: &ReadingGoal) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE reading_goals SET
                low_goal = $2,
                medium_goal = $3,
                high_goal = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(goal.id().as_uuid())
        .bind(goal.low_goal())
        .bind(goal.medium_goal())
        .bind(goal.high_goal())
        .bind(goal.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update goal: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::GoalNotFound,
                format!("Goal not found: {}", goal.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &GoalId) -> Result<Option<ReadingGoal>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, book_id, low_goal, medium_goal, high_goal, created_at, updated_at
            FROM reading_goals WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch goal: {}", e),
            )
        })?;

        row.map(row_to_goal).transpose()
    }

    async fn find_by_book(
        &self,
        book_id: &BookId,
    ) -> Result<Option<ReadingGoal>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, book_id, low_goal, medium_goal, high_goal, created_at, updated_at
            FROM reading_goals WHERE book_id = $1
            "#,
        )
        .bind(book_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch goal by book: {}", e),
            )
        })?;

        row.map(row_to_goal).transpose()
    }

    async fn list(&self) -> Result<Vec<ReadingGoal>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, book_id, low_goal, medium_goal, high_goal, created_at, updated_at
            FROM reading_goals
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list goals: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_goal).collect()
    }

    async fn delete(&self, id: &GoalId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM reading_goals WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete goal: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::GoalNotFound,
                format!("Goal not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_goal(row: sqlx::postgres::PgRow) -> Result<ReadingGoal, DomainError> {
    let get_err = |field: &str, e: sqlx::Error| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", field, e),
        )
    };

    let id: uuid::Uuid = row.try_get("id").map_err(|e| get_err("id", e))?;
    let book_id: uuid::Uuid = row.try_get("book_id").map_err(|e| get_err("book_id", e))?;
    let low_goal: i32 = row.try_get("low_goal").map_err(|e| get_err("low_goal", e))?;
    let medium_goal: i32 = row
        .try_get("medium_goal")
        .map_err(|e| get_err("medium_goal", e))?;
    let high_goal: i32 = row
        .try_get("high_goal")
        .map_err(|e| get_err("high_goal", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| get_err("created_at", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| get_err("updated_at", e))?;

    Ok(ReadingGoal::reconstitute(
        GoalId::from_uuid(id),
        BookId::from_uuid(book_id),
        low_goal,
        medium_goal,
        high_goal,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
