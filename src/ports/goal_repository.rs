//! Reading-goal repository port.

use crate::domain::foundation::{BookId, DomainError, GoalId};
use crate::domain::reading::ReadingGoal;
use async_trait::async_trait;

/// Repository port for ReadingGoal persistence. One goal per book.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Save a new goal.
    ///
    /// # Errors
    ///
    /// - `DuplicateGoal` if the book already has a goal
    /// - `DatabaseError` on persistence failure
    async fn save(&self, goal: &ReadingGoal) -> Result<(), DomainError>;

    /// Update an existing goal.
    ///
    /// # Errors
    ///
    /// - `GoalNotFound` if the goal doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, goal: &ReadingGoal) -> Result<(), DomainError>;

    /// Find a goal by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &GoalId) -> Result<Option<ReadingGoal>, DomainError>;

    /// Find the goal for a book, if one exists.
    async fn find_by_book(&self, book_id: &BookId) -> Result<Option<ReadingGoal>, DomainError>;

    /// List every goal.
    async fn list(&self) -> Result<Vec<ReadingGoal>, DomainError>;

    /// Delete a goal by ID.
    ///
    /// # Errors
    ///
    /// - `GoalNotFound` if the goal doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &GoalId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn GoalRepository) {}
    }
}
