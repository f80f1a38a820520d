//! Overview report: headline reading numbers.

use crate::domain::catalog::Book;
use crate::domain::foundation::{round2, ReadingStatus};
use crate::domain::reading::ReadingSession;
use crate::domain::stats::streak::compute_streaks;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline numbers for the library as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    /// Books whose status is Completed or Summarized.
    pub total_books_read: usize,
    /// Pages summed across every reading session.
    pub total_pages_read: i64,
    /// Total pages divided by days since the earliest session, inclusive.
    pub average_pages_per_day: f64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub currently_reading_count: usize,
    /// Books in Planning or NotReading.
    pub planned_books_count: usize,
}

/// Computes the overview report.
pub fn compute_overview(
    books: &[Book],
    sessions: &[ReadingSession],
    today: NaiveDate,
) -> OverviewStats {
    let total_books_read = books.iter().filter(|b| b.status().is_finished()).count();
    let currently_reading_count = books
        .iter()
        .filter(|b| b.status() == ReadingStatus::CurrentlyReading)
        .count();
    let planned_books_count = books
        .iter()
        .filter(|b| {
            matches!(
                b.status(),
                ReadingStatus::Planning | ReadingStatus::NotReading
            )
        })
        .count();

    let total_pages_read: i64 = sessions.iter().map(|s| s.pages_read() as i64).sum();

    let average_pages_per_day = match sessions.iter().map(|s| s.date()).min() {
        Some(earliest) => {
            // inclusive day count, at least 1
            let days = ((today - earliest).num_days() + 1).max(1);
            round2(total_pages_read as f64 / days as f64)
        }
        None => 0.0,
    };

    let dates: Vec<NaiveDate> = sessions.iter().map(|s| s.date()).collect();
    let streaks = compute_streaks(&dates, today);

    OverviewStats {
        total_books_read,
        total_pages_read,
        average_pages_per_day,
        current_streak: streaks.current_streak,
        longest_streak: streaks.longest_streak,
        currently_reading_count,
        planned_books_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AuthorId, BookId, SessionId, Timestamp};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn book(status: ReadingStatus) -> Book {
        let mut book =
            Book::new(BookId::new(), AuthorId::new(), "Test".to_string(), 300).unwrap();
        book.set_status(status);
        book
    }

    fn session(book_id: BookId, date: NaiveDate, pages: i32) -> ReadingSession {
        ReadingSession::reconstitute(
            SessionId::new(),
            book_id,
            date,
            pages,
            None,
            Timestamp::now(),
            Timestamp::now(),
        )
    }

    #[test]
    fn empty_library_yields_zeros() {
        let overview = compute_overview(&[], &[], d(2024, 6, 1));
        assert_eq!(overview.total_books_read, 0);
        assert_eq!(overview.total_pages_read, 0);
        assert_eq!(overview.average_pages_per_day, 0.0);
        assert_eq!(overview.current_streak, 0);
    }

    #[test]
    fn counts_books_by_status_buckets() {
        let books = vec![
            book(ReadingStatus::Completed),
            book(ReadingStatus::Summarized),
            book(ReadingStatus::CurrentlyReading),
            book(ReadingStatus::Planning),
            book(ReadingStatus::NotReading),
        ];
        let overview = compute_overview(&books, &[], d(2024, 6, 1));
        assert_eq!(overview.total_books_read, 2);
        assert_eq!(overview.currently_reading_count, 1);
        assert_eq!(overview.planned_books_count, 2);
    }

    #[test]
    fn average_pages_per_day_is_inclusive_of_first_day() {
        let book_id = BookId::new();
        // 150 pages over 3 consecutive days ending today
        let sessions = vec![
            session(book_id, d(2024, 5, 30), 50),
            session(book_id, d(2024, 5, 31), 75),
            session(book_id, d(2024, 6, 1), 25),
        ];
        let overview = compute_overview(&[], &sessions, d(2024, 6, 1));
        assert_eq!(overview.total_pages_read, 150);
        assert_eq!(overview.average_pages_per_day, 50.0);
        assert_eq!(overview.current_streak, 3);
        assert_eq!(overview.longest_streak, 3);
    }

    #[test]
    fn single_session_today_counts_one_day() {
        let sessions = vec![session(BookId::new(), d(2024, 6, 1), 42)];
        let overview = compute_overview(&[], &sessions, d(2024, 6, 1));
        assert_eq!(overview.average_pages_per_day, 42.0);
    }
}
