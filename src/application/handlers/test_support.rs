//! In-memory repository fakes shared by the handler tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use crate::domain::catalog::{Author, Book, Tag, TagAssignment};
use crate::domain::foundation::{
    AuthorId, BookId, DomainError, ErrorCode, GoalId, SessionId, TagId,
};
use crate::domain::reading::{ReadingGoal, ReadingSession};
use crate::ports::{
    AuthorRepository, BookRepository, GoalRepository, SessionRepository, TagRepository,
};

fn not_found(code: ErrorCode, what: &str) -> DomainError {
    DomainError::new(code, format!("{} not found", what))
}

// ════════════════════════════════════════════════════════════════════════════
// Books
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockBookRepository {
    books: Mutex<Vec<Book>>,
}

impl MockBookRepository {
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }
}

#[async_trait]
impl BookRepository for MockBookRepository {
    async fn save(&self, book: &Book) -> Result<(), DomainError> {
        self.books.lock().await.push(book.clone());
        Ok(())
    }

    async fn update(&self, book: &Book) -> Result<(), DomainError> {
        let mut books = self.books.lock().await;
        let slot = books
            .iter_mut()
            .find(|b| b.id() == book.id())
            .ok_or_else(|| not_found(ErrorCode::BookNotFound, "Book"))?;
        *slot = book.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError> {
        Ok(self
            .books
            .lock()
            .await
            .iter()
            .find(|b| b.id() == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Book>, DomainError> {
        Ok(self.books.lock().await.clone())
    }

    async fn list_by_author(&self, author_id: &AuthorId) -> Result<Vec<Book>, DomainError> {
        Ok(self
            .books
            .lock()
            .await
            .iter()
            .filter(|b| b.author_id() == author_id)
            .cloned()
            .collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Book>, DomainError> {
        let needle = query.to_lowercase();
        Ok(self
            .books
            .lock()
            .await
            .iter()
            .filter(|b| b.title().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &BookId) -> Result<(), DomainError> {
        let mut books = self.books.lock().await;
        let before = books.len();
        books.retain(|b| b.id() != id);
        if books.len() == before {
            return Err(not_found(ErrorCode::BookNotFound, "Book"));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Authors
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockAuthorRepository {
    authors: Mutex<Vec<Author>>,
}

impl MockAuthorRepository {
    pub fn with_authors(authors: Vec<Author>) -> Self {
        Self {
            authors: Mutex::new(authors),
        }
    }
}

#[async_trait]
impl AuthorRepository for MockAuthorRepository {
    async fn save(&self, author: &Author) -> Result<(), DomainError> {
        self.authors.lock().await.push(author.clone());
        Ok(())
    }

    async fn update(&self, author: &Author) -> Result<(), DomainError> {
        let mut authors = self.authors.lock().await;
        let slot = authors
            .iter_mut()
            .find(|a| a.id() == author.id())
            .ok_or_else(|| not_found(ErrorCode::AuthorNotFound, "Author"))?;
        *slot = author.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, DomainError> {
        Ok(self
            .authors
            .lock()
            .await
            .iter()
            .find(|a| a.id() == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Author>, DomainError> {
        Ok(self.authors.lock().await.clone())
    }

    async fn search(&self, query: &str) -> Result<Vec<Author>, DomainError> {
        let needle = query.to_lowercase();
        Ok(self
            .authors
            .lock()
            .await
            .iter()
            .filter(|a| a.name().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &AuthorId) -> Result<(), DomainError> {
        let mut authors = self.authors.lock().await;
        let before = authors.len();
        authors.retain(|a| a.id() != id);
        if authors.len() == before {
            return Err(not_found(ErrorCode::AuthorNotFound, "Author"));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tags
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockTagRepository {
    tags: Mutex<Vec<Tag>>,
    assignments: Mutex<Vec<TagAssignment>>,
}

impl MockTagRepository {
    pub fn with_tags(tags: Vec<Tag>) -> Self {
        Self {
            tags: Mutex::new(tags),
            assignments: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TagRepository for MockTagRepository {
    async fn save(&self, tag: &Tag) -> Result<(), DomainError> {
        self.tags.lock().await.push(tag.clone());
        Ok(())
    }

    async fn update(&self, tag: &Tag) -> Result<(), DomainError> {
        let mut tags = self.tags.lock().await;
        let slot = tags
            .iter_mut()
            .find(|t| t.id() == tag.id())
            .ok_or_else(|| not_found(ErrorCode::TagNotFound, "Tag"))?;
        *slot = tag.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &TagId) -> Result<Option<Tag>, DomainError> {
        Ok(self.tags.lock().await.iter().find(|t| t.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Tag>, DomainError> {
        Ok(self.tags.lock().await.clone())
    }

    async fn list_assignments(&self) -> Result<Vec<TagAssignment>, DomainError> {
        Ok(self.assignments.lock().await.clone())
    }

    async fn list_assignments_for_book(
        &self,
        book_id: &BookId,
    ) -> Result<Vec<TagAssignment>, DomainError> {
        Ok(self
            .assignments
            .lock()
            .await
            .iter()
            .filter(|a| &a.book_id == book_id)
            .copied()
            .collect())
    }

    async fn assign(&self, assignment: &TagAssignment) -> Result<(), DomainError> {
        let mut assignments = self.assignments.lock().await;
        if assignments.contains(assignment) {
            return Err(DomainError::new(
                ErrorCode::DuplicateTagAssignment,
                "Tag already assigned",
            ));
        }
        assignments.push(*assignment);
        Ok(())
    }

    async fn unassign(&self, assignment: &TagAssignment) -> Result<(), DomainError> {
        let mut assignments = self.assignments.lock().await;
        let before = assignments.len();
        assignments.retain(|a| a != assignment);
        if assignments.len() == before {
            return Err(not_found(ErrorCode::TagNotFound, "Assignment"));
        }
        Ok(())
    }

    async fn delete(&self, id: &TagId) -> Result<(), DomainError> {
        let mut tags = self.tags.lock().await;
        let before = tags.len();
        tags.retain(|t| t.id() != id);
        if tags.len() == before {
            return Err(not_found(ErrorCode::TagNotFound, "Tag"));
        }
        self.assignments.lock().await.retain(|a| &a.tag_id != id);
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Sessions
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockSessionRepository {
    sessions: Mutex<Vec<ReadingSession>>,
}

impl MockSessionRepository {
    pub fn with_sessions(sessions: Vec<ReadingSession>) -> Self {
        Self {
            sessions: Mutex::new(sessions),
        }
    }

    pub async fn count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn save(&self, session: &ReadingSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.lock().await;
        if sessions
            .iter()
            .any(|s| s.book_id() == session.book_id() && s.date() == session.date())
        {
            return Err(DomainError::new(
                ErrorCode::DuplicateSession,
                "A session already exists for this book and date",
            ));
        }
        sessions.push(session.clone());
        Ok(())
    }

    async fn update(&self, session: &ReadingSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.lock().await;
        let slot = sessions
            .iter_mut()
            .find(|s| s.id() == session.id())
            .ok_or_else(|| not_found(ErrorCode::SessionNotFound, "Session"))?;
        *slot = session.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<ReadingSession>, DomainError> {
        Ok(self
            .sessions
            .lock()
            .await
            .iter()
            .find(|s| s.id() == id)
            .cloned())
    }

    async fn find_by_book_and_date(
        &self,
        book_id: &BookId,
        date: NaiveDate,
    ) -> Result<Option<ReadingSession>, DomainError> {
        Ok(self
            .sessions
            .lock()
            .await
            .iter()
            .find(|s| s.book_id() == book_id && s.date() == date)
            .cloned())
    }

    async fn list_for_book(
        &self,
        book_id: &BookId,
    ) -> Result<Vec<ReadingSession>, DomainError> {
        let mut result: Vec<ReadingSession> = self
            .sessions
            .lock()
            .await
            .iter()
            .filter(|s| s.book_id() == book_id)
            .cloned()
            .collect();
        result.sort_by_key(|s| s.date());
        Ok(result)
    }

    async fn list_for_year(&self, year: i32) -> Result<Vec<ReadingSession>, DomainError> {
        use chrono::Datelike;
        let mut result: Vec<ReadingSession> = self
            .sessions
            .lock()
            .await
            .iter()
            .filter(|s| s.date().year() == year)
            .cloned()
            .collect();
        result.sort_by_key(|s| s.date());
        Ok(result)
    }

    async fn list_all(&self) -> Result<Vec<ReadingSession>, DomainError> {
        let mut result = self.sessions.lock().await.clone();
        result.sort_by_key(|s| s.date());
        Ok(result)
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|s| s.id() != id);
        if sessions.len() == before {
            return Err(not_found(ErrorCode::SessionNotFound, "Session"));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Goals
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockGoalRepository {
    goals: Mutex<Vec<ReadingGoal>>,
}

impl MockGoalRepository {
    pub fn with_goals(goals: Vec<ReadingGoal>) -> Self {
        Self {
            goals: Mutex::new(goals),
        }
    }
}

#[async_trait]
impl GoalRepository for MockGoalRepository {
    async fn save(&self, goal: &ReadingGoal) -> Result<(), DomainError> {
        let mut goals = self.goals.lock().await;
        if goals.iter().any(|g| g.book_id() == goal.book_id()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateGoal,
                "Book already has a reading goal",
            ));
        }
        goals.push(goal.clone());
        Ok(())
    }

    async fn update(&self, goal: &ReadingGoal) -> Result<(), DomainError> {
        let mut goals = self.goals.lock().await;
        let slot = goals
            .iter_mut()
            .find(|g| g.id() == goal.id())
            .ok_or_else(|| not_found(ErrorCode::GoalNotFound, "Goal"))?;
        *slot = goal.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &GoalId) -> Result<Option<ReadingGoal>, DomainError> {
        Ok(self
            .goals
            .lock()
            .await
            .iter()
            .find(|g| g.id() == id)
            .cloned())
    }

    async fn find_by_book(
        &self,
        book_id: &BookId,
    ) -> Result<Option<ReadingGoal>, DomainError> {
        Ok(self
            .goals
            .lock()
            .await
            .iter()
            .find(|g| g.book_id() == book_id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<ReadingGoal>, DomainError> {
        Ok(self.goals.lock().await.clone())
    }

    async fn delete(&self, id: &GoalId) -> Result<(), DomainError> {
        let mut goals = self.goals.lock().await;
        let before = goals.len();
        goals.retain(|g| g.id() != id);
        if goals.len() == before {
            return Err(not_found(ErrorCode::GoalNotFound, "Goal"));
        }
        Ok(())
    }
}
