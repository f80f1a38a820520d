//! Goal performance statistics.

use crate::domain::catalog::Book;
use crate::domain::foundation::{round2, BookId, ReadingStatus};
use crate::domain::reading::{ReadingGoal, ReadingSession};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Progress of one book against its three goal tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub book_id: BookId,
    pub book_title: String,
    /// Cumulative pages read across the book's sessions.
    pub pages_read: i64,
    pub low_goal: i32,
    pub medium_goal: i32,
    pub high_goal: i32,
    /// Percentages against each tier, 0 when the tier is 0.
    pub low_progress: f64,
    pub medium_progress: f64,
    pub high_progress: f64,
}

/// Goal performance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStats {
    /// Finished goal-linked books over total goals, as a percentage.
    pub completion_rate: f64,
    /// Mean start-to-completion days over finished books carrying both
    /// dates; 0 when none qualify.
    pub average_days_to_complete: f64,
    /// Books in CurrentlyReading/Completed/Summarized that have a goal.
    pub current_progress: Vec<GoalProgress>,
    // Tier success and schedule tracking is not implemented yet; these
    // report 0 until per-tier completion semantics are settled.
    pub low_goal_success_count: u32,
    pub medium_goal_success_count: u32,
    pub high_goal_success_count: u32,
    pub completed_on_time_count: u32,
    pub completed_overdue_count: u32,
}

fn tier_progress(pages: i64, tier: i32) -> f64 {
    if tier == 0 {
        return 0.0;
    }
    round2(pages as f64 * 100.0 / tier as f64)
}

/// Computes the goal performance report.
pub fn compute_goal_stats(
    books: &[Book],
    goals: &[ReadingGoal],
    sessions: &[ReadingSession],
) -> GoalStats {
    let by_id: HashMap<BookId, &Book> = books.iter().map(|b| (*b.id(), b)).collect();

    let completion_rate = if goals.is_empty() {
        0.0
    } else {
        let completed = goals
            .iter()
            .filter(|g| {
                by_id
                    .get(g.book_id())
                    .map(|b| b.status().is_finished())
                    .unwrap_or(false)
            })
            .count();
        round2(completed as f64 * 100.0 / goals.len() as f64)
    };

    let durations: Vec<i64> = books
        .iter()
        .filter(|b| b.status().is_finished())
        .filter_map(|b| b.days_to_complete())
        .collect();
    let average_days_to_complete = if durations.is_empty() {
        0.0
    } else {
        round2(durations.iter().sum::<i64>() as f64 / durations.len() as f64)
    };

    let mut pages_by_book: HashMap<BookId, i64> = HashMap::new();
    for session in sessions {
        *pages_by_book.entry(*session.book_id()).or_insert(0) +=
            session.pages_read() as i64;
    }

    let mut current_progress: Vec<GoalProgress> = goals
        .iter()
        .filter_map(|goal| {
            let book = by_id.get(goal.book_id())?;
            let eligible = matches!(
                book.status(),
                ReadingStatus::CurrentlyReading
                    | ReadingStatus::Completed
                    | ReadingStatus::Summarized
            );
            if !eligible {
                return None;
            }
            let pages = pages_by_book.get(book.id()).copied().unwrap_or(0);
            Some(GoalProgress {
                book_id: *book.id(),
                book_title: book.title().to_string(),
                pages_read: pages,
                low_goal: goal.low_goal(),
                medium_goal: goal.medium_goal(),
                high_goal: goal.high_goal(),
                low_progress: tier_progress(pages, goal.low_goal()),
                medium_progress: tier_progress(pages, goal.medium_goal()),
                high_progress: tier_progress(pages, goal.high_goal()),
            })
        })
        .collect();
    current_progress.sort_by(|a, b| a.book_title.cmp(&b.book_title));

    GoalStats {
        completion_rate,
        average_days_to_complete,
        current_progress,
        low_goal_success_count: 0,
        medium_goal_success_count: 0,
        high_goal_success_count: 0,
        completed_on_time_count: 0,
        completed_overdue_count: 0,
    }
}
