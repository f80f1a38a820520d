//! Book statistics: page counts, completion rate, status distribution.

use crate::domain::catalog::Book;
use crate::domain::foundation::{round2, BookId, ReadingStatus};
use crate::domain::reading::ReadingSession;
use serde::{Deserialize, Serialize};

/// Reference to one book in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRef {
    pub book_id: BookId,
    pub title: String,
    pub total_pages: i32,
}

/// Count of books in one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Book aggregate report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookStats {
    /// Mean page count over finished books, 0 when none.
    pub average_page_count: f64,
    pub shortest_book: Option<BookRef>,
    pub longest_book: Option<BookRef>,
    /// Mean pages per session across all sessions.
    pub average_pages_per_session: f64,
    /// Finished books over all books, as a percentage.
    pub completion_rate: f64,
    /// Every status in progression order with its book count.
    pub books_by_status: Vec<StatusCount>,
}

fn book_ref(book: &Book) -> BookRef {
    BookRef {
        book_id: *book.id(),
        title: book.title().to_string(),
        total_pages: book.total_pages(),
    }
}

/// Computes the book report.
pub fn compute_book_stats(books: &[Book], sessions: &[ReadingSession]) -> BookStats {
    let finished: Vec<&Book> = books.iter().filter(|b| b.status().is_finished()).collect();

    let average_page_count = if finished.is_empty() {
        0.0
    } else {
        let total: i64 = finished.iter().map(|b| b.total_pages() as i64).sum();
        round2(total as f64 / finished.len() as f64)
    };

    // strict comparisons keep the first-encountered book on ties
    let shortest_book = finished
        .iter()
        .fold(None::<&&Book>, |best, b| match best {
            Some(s) if b.total_pages() >= s.total_pages() => best,
            _ => Some(b),
        })
        .map(|b| book_ref(b));
    let longest_book = finished
        .iter()
        .fold(None::<&&Book>, |best, b| match best {
            Some(l) if b.total_pages() <= l.total_pages() => best,
            _ => Some(b),
        })
        .map(|b| book_ref(b));

    let average_pages_per_session = if sessions.is_empty() {
        0.0
    } else {
        let total: i64 = sessions.iter().map(|s| s.pages_read() as i64).sum();
        round2(total as f64 / sessions.len() as f64)
    };

    let completion_rate = if books.is_empty() {
        0.0
    } else {
        round2(finished.len() as f64 * 100.0 / books.len() as f64)
    };

    let books_by_status = ReadingStatus::ALL
        .iter()
        .map(|status| StatusCount {
            status: status.display_name().to_string(),
            count: books.iter().filter(|b| b.status() == *status).count(),
        })
        .collect();

    BookStats {
        average_page_count,
        shortest_book,
        longest_book,
        average_pages_per_session,
        completion_rate,
        books_by_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AuthorId, SessionId, Timestamp};
    use chrono::NaiveDate;

    fn book(title: &str, pages: i32, status: ReadingStatus) -> Book {
        let mut book =
            Book::new(BookId::new(), AuthorId::new(), title.to_string(), pages).unwrap();
        book.set_status(status);
        book
    }

    fn session(pages: i32) -> ReadingSession {
        ReadingSession::reconstitute(
            SessionId::new(),
            BookId::new(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            pages,
            None,
            Timestamp::now(),
            Timestamp::now(),
        )
    }

    #[test]
    fn empty_library_yields_zeros() {
        let stats = compute_book_stats(&[], &[]);
        assert_eq!(stats.average_page_count, 0.0);
        assert_eq!(stats.completion_rate, 0.0);
        assert!(stats.shortest_book.is_none());
        assert!(stats.longest_book.is_none());
        assert_eq!(stats.books_by_status.len(), 5);
    }

    #[test]
    fn averages_use_finished_books_only() {
        let books = vec![
            book("Short", 100, ReadingStatus::Completed),
            book("Long", 300, ReadingStatus::Summarized),
            book("Ignored", 900, ReadingStatus::CurrentlyReading),
        ];
        let stats = compute_book_stats(&books, &[]);
        assert_eq!(stats.average_page_count, 200.0);
        assert_eq!(stats.shortest_book.as_ref().unwrap().title, "Short");
        assert_eq!(stats.longest_book.as_ref().unwrap().title, "Long");
    }

    #[test]
    fn ties_keep_first_encountered_book() {
        let books = vec![
            book("First", 200, ReadingStatus::Completed),
            book("Second", 200, ReadingStatus::Completed),
        ];
        let stats = compute_book_stats(&books, &[]);
        assert_eq!(stats.shortest_book.as_ref().unwrap().title, "First");
        assert_eq!(stats.longest_book.as_ref().unwrap().title, "First");
    }

    #[test]
    fn average_pages_per_session_spans_all_sessions() {
        let sessions = vec![session(30), session(60)];
        let stats = compute_book_stats(&[], &sessions);
        assert_eq!(stats.average_pages_per_session, 45.0);
    }

    #[test]
    fn completion_rate_over_all_books() {
        let books = vec![
            book("A", 100, ReadingStatus::Completed),
            book("B", 100, ReadingStatus::Planning),
            book("C", 100, ReadingStatus::NotReading),
        ];
        let stats = compute_book_stats(&books, &[]);
        assert_eq!(stats.completion_rate, 33.33);
    }

    #[test]
    fn status_distribution_covers_every_status() {
        let books = vec![
            book("A", 100, ReadingStatus::Completed),
            book("B", 100, ReadingStatus::Completed),
        ];
        let stats = compute_book_stats(&books, &[]);
        let completed = stats
            .books_by_status
            .iter()
            .find(|s| s.status == "Completed")
            .unwrap();
        assert_eq!(completed.count, 2);
        let planning = stats
            .books_by_status
            .iter()
            .find(|s| s.status == "Planning")
            .unwrap();
        assert_eq!(planning.count, 0);
    }
}
