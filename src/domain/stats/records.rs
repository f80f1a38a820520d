//! Personal records: best day, week, month, fastest completion.

use crate::domain::catalog::Book;
use crate::domain::foundation::BookId;
use crate::domain::reading::ReadingSession;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Day with the most pages read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: NaiveDate,
    pub pages: i64,
}

/// ISO week (Monday-first) with the most pages read. Carries the week's
/// Monday so the record points at a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRecord {
    pub iso_year: i32,
    pub iso_week: u32,
    pub week_start: NaiveDate,
    pub pages: i64,
}

/// Calendar month with the most pages read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRecord {
    pub year: i32,
    pub month: u32,
    pub pages: i64,
}

/// Fastest start-to-completion among finished books with both dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub book_id: BookId,
    pub title: String,
    pub days: i64,
}

/// Personal records report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecords {
    pub best_day: Option<DayRecord>,
    pub best_week: Option<WeekRecord>,
    pub best_month: Option<MonthRecord>,
    pub fastest_completion: Option<CompletionRecord>,
    /// Distinct calendar days with at least one session.
    pub total_reading_days: usize,
}

/// Monday of the ISO week containing `date`.
fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Computes the personal-records report.
///
/// Same-day sessions are combined before the best-day pick, so two
/// sessions on one date compete as their summed total. All ties are broken
/// by the earliest period.
pub fn compute_records(books: &[Book], sessions: &[ReadingSession]) -> PersonalRecords {
    let mut by_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for session in sessions {
        *by_day.entry(session.date()).or_insert(0) += session.pages_read() as i64;
    }

    let mut by_week: BTreeMap<(i32, u32), i64> = BTreeMap::new();
    let mut by_month: BTreeMap<(i32, u32), i64> = BTreeMap::new();
    for (date, pages) in &by_day {
        let iso = date.iso_week();
        *by_week.entry((iso.year(), iso.week())).or_insert(0) += pages;
        *by_month.entry((date.year(), date.month())).or_insert(0) += pages;
    }

    // ascending iteration + strict > keeps the earliest period on ties
    fn pick_max<K: Copy + Ord>(map: &BTreeMap<K, i64>) -> Option<(K, i64)> {
        map.iter().fold(None, |best, (key, pages)| match best {
            Some((_, best_pages)) if *pages <= best_pages => best,
            _ => Some((*key, *pages)),
        })
    }

    let best_day = pick_max(&by_day).map(|(date, pages)| DayRecord { date, pages });

    let best_week = pick_max(&by_week).map(|((iso_year, iso_week), pages)| {
        // recover the Monday from any date inside the winning week
        let week_start = by_day
            .keys()
            .find(|d| {
                let iso = d.iso_week();
                iso.year() == iso_year && iso.week() == iso_week
            })
            .map(|d| week_start_of(*d))
            .expect("winning week contains at least one reading day");
        WeekRecord {
            iso_year,
            iso_week,
            week_start,
            pages,
        }
    });

    let best_month =
        pick_max(&by_month).map(|((year, month), pages)| MonthRecord { year, month, pages });

    let fastest_completion = books
        .iter()
        .filter(|b| b.status().is_finished())
        .filter_map(|b| b.days_to_complete().map(|days| (b, days)))
        .fold(None::<(&Book, i64)>, |best, (book, days)| match best {
            Some((_, best_days)) if days >= best_days => best,
            _ => Some((book, days)),
        })
        .map(|(book, days)| CompletionRecord {
            book_id: *book.id(),
            title: book.title().to_string(),
            days,
        });

    PersonalRecords {
        best_day,
        best_week,
        best_month,
        fastest_completion,
        total_reading_days: by_day.len(),
    }
}
