//! Command and query handlers for reading goals.

use std::sync::Arc;

use crate::adapters::cache::keys;
use crate::domain::foundation::{BookId, DomainError, ErrorCode, GoalId};
use crate::domain::reading::ReadingGoal;
use crate::ports::{BookRepository, GoalRepository, ResponseCache};

/// Command to create a goal for a book.
#[derive(Debug, Clone)]
pub struct CreateGoalCommand {
    pub book_id: BookId,
    pub low_goal: i32,
    pub medium_goal: i32,
    pub high_goal: i32,
}

/// Handler for creating goals. One goal per book; a second create is a
/// conflict.
pub struct CreateGoalHandler {
    goals: Arc<dyn GoalRepository>,
    books: Arc<dyn BookRepository>,
    cache: Arc<dyn ResponseCache>,
}

impl CreateGoalHandler {
    pub fn new(
        goals: Arc<dyn GoalRepository>,
        books: Arc<dyn BookRepository>,
        cache: Arc<dyn ResponseCache>,
    ) -> Self {
        Self {
            goals,
            books,
            cache,
        }
    }

    pub async fn handle(&self, command: CreateGoalCommand) -> Result<ReadingGoal, DomainError> {
        if self.books.find_by_id(&command.book_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::BookNotFound,
                format!("Book not found: {}", command.book_id),
            ));
        }
        if self.goals.find_by_book(&command.book_id).await?.is_some() {
            return Err(DomainError::new(
                ErrorCode::DuplicateGoal,
                format!("Book {} already has a reading goal", command.book_id),
            ));
        }

        let goal = ReadingGoal::new(
            GoalId::new(),
            command.book_id,
            command.low_goal,
            command.medium_goal,
            command.high_goal,
        )?;
        self.goals.save(&goal).await?;

        keys::invalidate_statistics(self.cache.as_ref()).await;
        Ok(goal)
    }
}

/// Query to fetch the goal attached to a book.
#[derive(Debug, Clone)]
pub struct GetGoalForBookQuery {
    pub book_id: BookId,
}

/// Handler for fetching a book's goal.
pub struct GetGoalForBookHandler {
    goals: Arc<dyn GoalRepository>,
}

impl GetGoalForBookHandler {
    pub fn new(goals: Arc<dyn GoalRepository>) -> Self {
        Self { goals }
    }

    pub async fn handle(&self, query: GetGoalForBookQuery) -> Result<ReadingGoal, DomainError> {
        self.goals
            .find_by_book(&query.book_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::GoalNotFound,
                    format!("No goal for book: {}", query.book_id),
                )
            })
    }
}

/// Handler for listing every goal.
pub struct ListGoalsHandler {
    goals: Arc<dyn GoalRepository>,
}

impl ListGoalsHandler {
    pub fn new(goals: Arc<dyn GoalRepository>) -> Self {
        Self { goals }
    }

    pub async fn handle(&self) -> Result<Vec<ReadingGoal>, DomainError> {
        self.goals.list().await
    }
}

/// Command to replace a goal's thresholds.
#[derive(Debug, Clone)]
pub struct UpdateGoalCommand {
    pub id: GoalId,
    pub low_goal: i32,
    pub medium_goal: i32,
    pub high_goal: i32,
}

/// Handler for updating goals.
pub struct UpdateGoalHandler {
    goals: Arc<dyn GoalRepository>,
    cache: Arc<dyn ResponseCache>,
}

impl UpdateGoalHandler {
    pub fn new(goals: Arc<dyn GoalRepository>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { goals, cache }
    }

    pub async fn handle(&self, command: UpdateGoalCommand) -> Result<ReadingGoal, DomainError> {
        let mut goal = self.goals.find_by_id(&command.id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::GoalNotFound,
                format!("Goal not found: {}", command.id),
            )
        })?;

        goal.set_tiers(command.low_goal, command.medium_goal, command.high_goal)?;
        self.goals.update(&goal).await?;

        keys::invalidate_statistics(self.cache.as_ref()).await;
        Ok(goal)
    }
}

/// Handler for deleting goals.
pub struct DeleteGoalHandler {
    goals: Arc<dyn GoalRepository>,
    cache: Arc<dyn ResponseCache>,
}

impl DeleteGoalHandler {
    pub fn new(goals: Arc<dyn GoalRepository>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { goals, cache }
    }

    pub async fn handle(&self, id: GoalId) -> Result<(), DomainError> {
        self.goals.delete(&id).await?;

        keys::invalidate_statistics(self.cache.as_ref()).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cache::InMemoryCache;
    use crate::application::handlers::test_support::{MockBookRepository, MockGoalRepository};
    use crate::domain::catalog::Book;
    use crate::domain::foundation::AuthorId;

    fn book() -> Book {
        Book::new(BookId::new(), AuthorId::new(), "Book".to_string(), 300).unwrap()
    }

    fn handler_with(
        books: Vec<Book>,
        goals: Vec<ReadingGoal>,
    ) -> (CreateGoalHandler, Arc<MockGoalRepository>) {
        let goal_repo = Arc::new(MockGoalRepository::with_goals(goals));
        let handler = CreateGoalHandler::new(
            goal_repo.clone(),
            Arc::new(MockBookRepository::with_books(books)),
            Arc::new(InMemoryCache::new()),
        );
        (handler, goal_repo)
    }

    #[tokio::test]
    async fn create_goal_for_existing_book() {
        let book = book();
        let (handler, goals) = handler_with(vec![book.clone()], vec![]);

        let goal = handler
            .handle(CreateGoalCommand {
                book_id: *book.id(),
                low_goal: 100,
                medium_goal: 200,
                high_goal: 300,
            })
            .await
            .unwrap();

        assert_eq!(goal.low_goal(), 100);
        assert!(goals.find_by_book(book.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn second_goal_for_same_book_conflicts() {
        let book = book();
        let existing =
            ReadingGoal::new(GoalId::new(), *book.id(), 50, 100, 150).unwrap();
        let (handler, _) = handler_with(vec![book.clone()], vec![existing]);

        let result = handler
            .handle(CreateGoalCommand {
                book_id: *book.id(),
                low_goal: 100,
                medium_goal: 200,
                high_goal: 300,
            })
            .await;

        assert!(matches!(result.unwrap_err().code, ErrorCode::DuplicateGoal));
    }

    #[tokio::test]
    async fn create_goal_rejects_unknown_book() {
        let (handler, _) = handler_with(vec![], vec![]);

        let result = handler
            .handle(CreateGoalCommand {
                book_id: BookId::new(),
                low_goal: 100,
                medium_goal: 200,
                high_goal: 300,
            })
            .await;

        assert!(matches!(result.unwrap_err().code, ErrorCode::BookNotFound));
    }

    #[tokio::test]
    async fn update_goal_validates_tier_ordering() {
        let book = book();
        let existing = ReadingGoal::new(GoalId::new(), *book.id(), 50, 100, 150).unwrap();
        let goals = Arc::new(MockGoalRepository::with_goals(vec![existing.clone()]));
        let handler = UpdateGoalHandler::new(goals, Arc::new(InMemoryCache::new()));

        let result = handler
            .handle(UpdateGoalCommand {
                id: *existing.id(),
                low_goal: 300,
                medium_goal: 200,
                high_goal: 100,
            })
            .await;

        assert!(matches!(
            result.unwrap_err().code,
            ErrorCode::ValidationFailed
        ));
    }
}
