//! StatisticsHandler - cached query handlers for the seven reports.
//!
//! Each report loads only the collections it reads, computes through the
//! domain engines, and caches under its own `stats:` key. The complete
//! report composes all seven from one snapshot; a failing load fails the
//! whole payload.

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::cache::keys;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::stats::{
    compute_author_stats, compute_book_stats, compute_complete, compute_goal_stats,
    compute_overview, compute_records, compute_tag_stats, compute_time_stats, AuthorStats,
    BookStats, CompleteStats, GoalStats, LibrarySnapshot, OverviewStats, PersonalRecords,
    TagStats, TimeStats,
};
use crate::ports::{
    get_or_compute, AuthorRepository, BookRepository, GoalRepository, ResponseCache,
    SessionRepository, TagRepository,
};

/// Cached handler for the statistics endpoints.
#[derive(Clone)]
pub struct StatisticsHandler {
    books: Arc<dyn BookRepository>,
    authors: Arc<dyn AuthorRepository>,
    tags: Arc<dyn TagRepository>,
    sessions: Arc<dyn SessionRepository>,
    goals: Arc<dyn GoalRepository>,
    cache: Arc<dyn ResponseCache>,
    ttl: Duration,
}

impl StatisticsHandler {
    pub fn new(
        books: Arc<dyn BookRepository>,
        authors: Arc<dyn AuthorRepository>,
        tags: Arc<dyn TagRepository>,
        sessions: Arc<dyn SessionRepository>,
        goals: Arc<dyn GoalRepository>,
        cache: Arc<dyn ResponseCache>,
        ttl: Duration,
    ) -> Self {
        Self {
            books,
            authors,
            tags,
            sessions,
            goals,
            cache,
            ttl,
        }
    }

    pub async fn overview(&self) -> Result<OverviewStats, DomainError> {
        let this = self.clone();
        get_or_compute(
            self.cache.as_ref(),
            &keys::statistics("overview"),
            Some(self.ttl),
            || async move {
                let books = this.books.list().await?;
                let sessions = this.sessions.list_all().await?;
                Ok(compute_overview(&books, &sessions, Timestamp::today_utc()))
            },
        )
        .await
    }

    pub async fn authors(&self) -> Result<AuthorStats, DomainError> {
        let this = self.clone();
        get_or_compute(
            self.cache.as_ref(),
            &keys::statistics("authors"),
            Some(self.ttl),
            || async move {
                let books = this.books.list().await?;
                let authors = this.authors.list().await?;
                let sessions = this.sessions.list_all().await?;
                Ok(compute_author_stats(&books, &authors, &sessions))
            },
        )
        .await
    }

    pub async fn tags(&self) -> Result<TagStats, DomainError> {
        let this = self.clone();
        get_or_compute(
            self.cache.as_ref(),
            &keys::statistics("tags"),
            Some(self.ttl),
            || async move {
                let books = this.books.list().await?;
                let tags = this.tags.list().await?;
                let assignments = this.tags.list_assignments().await?;
                let sessions = this.sessions.list_all().await?;
                Ok(compute_tag_stats(&books, &tags, &assignments, &sessions))
            },
        )
        .await
    }

    pub async fn time_based(&self) -> Result<TimeStats, DomainError> {
        let this = self.clone();
        get_or_compute(
            self.cache.as_ref(),
            &keys::statistics("time-based"),
            Some(self.ttl),
            || async move {
                let sessions = this.sessions.list_all().await?;
                Ok(compute_time_stats(&sessions, Timestamp::today_utc()))
            },
        )
        .await
    }

    pub async fn goals(&self) -> Result<GoalStats, DomainError> {
        let this = self.clone();
        get_or_compute(
            self.cache.as_ref(),
            &keys::statistics("goals"),
            Some(self.ttl),
            || async move {
                let books = this.books.list().await?;
                let goals = this.goals.list().await?;
                let sessions = this.sessions.list_all().await?;
                Ok(compute_goal_stats(&books, &goals, &sessions))
            },
        )
        .await
    }

    pub async fn books(&self) -> Result<BookStats, DomainError> {
        let this = self.clone();
        get_or_compute(
            self.cache.as_ref(),
            &keys::statistics("books"),
            Some(self.ttl),
            || async move {
                let books = this.books.list().await?;
                let sessions = this.sessions.list_all().await?;
                Ok(compute_book_stats(&books, &sessions))
            },
        )
        .await
    }

    pub async fn records(&self) -> Result<PersonalRecords, DomainError> {
        let this = self.clone();
        get_or_compute(
            self.cache.as_ref(),
            &keys::statistics("records"),
            Some(self.ttl),
            || async move {
                let books = this.books.list().await?;
                let sessions = this.sessions.list_all().await?;
                Ok(compute_records(&books, &sessions))
            },
        )
        .await
    }

    pub async fn complete(&self) -> Result<CompleteStats, DomainError> {
        let this = self.clone();
        get_or_compute(
            self.cache.as_ref(),
            &keys::statistics("complete"),
            Some(self.ttl),
            || async move {
                let snapshot = LibrarySnapshot {
                    books: this.books.list().await?,
                    authors: this.authors.list().await?,
                    tags: this.tags.list().await?,
                    assignments: this.tags.list_assignments().await?,
                    sessions: this.sessions.list_all().await?,
                    goals: this.goals.list().await?,
                };
                Ok(compute_complete(&snapshot, Timestamp::today_utc()))
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cache::InMemoryCache;
    use crate::application::handlers::test_support::{
        MockAuthorRepository, MockBookRepository, MockGoalRepository, MockSessionRepository,
        MockTagRepository,
    };
    use crate::domain::catalog::{Author, Book};
    use crate::domain::foundation::{AuthorId, BookId, ReadingStatus, SessionId};
    use crate::domain::reading::ReadingSession;
    use chrono::Duration as ChronoDuration;

    fn handler_with(
        books: Vec<Book>,
        authors: Vec<Author>,
        sessions: Vec<ReadingSession>,
    ) -> (StatisticsHandler, Arc<InMemoryCache>) {
        let cache = Arc::new(InMemoryCache::new());
        let handler = StatisticsHandler::new(
            Arc::new(MockBookRepository::with_books(books)),
            Arc::new(MockAuthorRepository::with_authors(authors)),
            Arc::new(MockTagRepository::default()),
            Arc::new(MockSessionRepository::with_sessions(sessions)),
            Arc::new(MockGoalRepository::default()),
            cache.clone(),
            Duration::from_secs(60),
        );
        (handler, cache)
    }

    fn finished_book(author_id: AuthorId) -> Book {
        let mut book =
            Book::new(BookId::new(), author_id, "Done".to_string(), 200).unwrap();
        book.set_status(ReadingStatus::Completed);
        book
    }

    #[tokio::test]
    async fn overview_is_cached_under_stats_key() {
        let author = Author::new(AuthorId::new(), "A".to_string()).unwrap();
        let book = finished_book(*author.id());
        let session = ReadingSession::new(
            SessionId::new(),
            *book.id(),
            Timestamp::today_utc() - ChronoDuration::days(1),
            50,
            None,
        )
        .unwrap();
        let (handler, cache) = handler_with(vec![book], vec![author], vec![session]);

        let overview = handler.overview().await.unwrap();
        assert_eq!(overview.total_books_read, 1);
        assert_eq!(overview.total_pages_read, 50);
        assert!(cache.get(&keys::statistics("overview")).await.is_some());
    }

    #[tokio::test]
    async fn complete_composes_all_seven_reports() {
        let author = Author::new(AuthorId::new(), "A".to_string()).unwrap();
        let book = finished_book(*author.id());
        let (handler, _) = handler_with(vec![book], vec![author], vec![]);

        let complete = handler.complete().await.unwrap();
        assert_eq!(complete.overview.total_books_read, 1);
        assert_eq!(complete.authors.unique_author_count, 1);
        assert_eq!(complete.books.completion_rate, 100.0);
        assert_eq!(complete.tags.unique_tag_count, 0);
        assert!(complete.records.best_day.is_none());
    }

    #[tokio::test]
    async fn each_report_uses_its_own_cache_key() {
        let (handler, cache) = handler_with(vec![], vec![], vec![]);

        handler.overview().await.unwrap();
        handler.books().await.unwrap();

        assert!(cache.get(&keys::statistics("overview")).await.is_some());
        assert!(cache.get(&keys::statistics("books")).await.is_some());
        assert!(cache.get(&keys::statistics("records")).await.is_none());
    }
}
