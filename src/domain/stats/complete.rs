//! Combined statistics: the union of the seven reports.

use crate::domain::catalog::{Author, Book, Tag, TagAssignment};
use crate::domain::reading::{ReadingGoal, ReadingSession};
use crate::domain::stats::{
    compute_author_stats, compute_book_stats, compute_goal_stats, compute_overview,
    compute_records, compute_tag_stats, compute_time_stats, AuthorStats, BookStats, GoalStats,
    OverviewStats, PersonalRecords, TagStats, TimeStats,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// All seven reports in one payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteStats {
    pub overview: OverviewStats,
    pub authors: AuthorStats,
    pub tags: TagStats,
    pub time: TimeStats,
    pub goals: GoalStats,
    pub books: BookStats,
    pub records: PersonalRecords,
}

/// Everything the reports read, fully materialized.
#[derive(Debug, Clone, Default)]
pub struct LibrarySnapshot {
    pub books: Vec<Book>,
    pub authors: Vec<Author>,
    pub tags: Vec<Tag>,
    pub assignments: Vec<TagAssignment>,
    pub sessions: Vec<ReadingSession>,
    pub goals: Vec<ReadingGoal>,
}

/// Computes the complete report by invoking each sub-report
/// independently. A failing sub-computation would fail the whole payload;
/// the sub-reports themselves are total functions over their inputs.
pub fn compute_complete(snapshot: &LibrarySnapshot, today: NaiveDate) -> CompleteStats {
    CompleteStats {
        overview: compute_overview(&snapshot.books, &snapshot.sessions, today),
        authors: compute_author_stats(&snapshot.books, &snapshot.authors, &snapshot.sessions),
        tags: compute_tag_stats(
            &snapshot.books,
            &snapshot.tags,
            &snapshot.assignments,
            &snapshot.sessions,
        ),
        time: compute_time_stats(&snapshot.sessions, today),
        goals: compute_goal_stats(&snapshot.books, &snapshot.goals, &snapshot.sessions),
        books: compute_book_stats(&snapshot.books, &snapshot.sessions),
        records: compute_records(&snapshot.books, &snapshot.sessions),
    }
}
