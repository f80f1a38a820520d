//! Statistics domain module.
//!
//! Pure, synchronous computations over fully-materialized collections.
//! Repositories load the rows; these functions derive the reports. Each of
//! the seven reports is independently computable; `complete` composes all
//! of them.

mod authors;
mod books;
mod complete;
mod goals;
mod heatmap;
mod overview;
mod records;
mod streak;
mod tags;
mod time;

pub use authors::{AuthorBookCount, AuthorPageCount, AuthorStats, compute_author_stats};
pub use books::{compute_book_stats, BookRef, BookStats, StatusCount};
pub use complete::{compute_complete, CompleteStats, LibrarySnapshot};
pub use goals::{compute_goal_stats, GoalProgress, GoalStats};
pub use heatmap::{heatmap_for_year, HeatmapDay};
pub use overview::{compute_overview, OverviewStats};
pub use records::{
    compute_records, CompletionRecord, DayRecord, MonthRecord, PersonalRecords, WeekRecord,
};
pub use streak::{compute_streaks, StreakSummary};
pub use tags::{compute_tag_stats, TagBookCount, TagPageCount, TagStats};
pub use time::{compute_time_stats, MonthPages, TimeStats, WeekdayPages, YearPages};
