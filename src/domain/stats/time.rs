//! Time-based statistics: monthly, weekly, and yearly reading patterns.

use crate::domain::reading::ReadingSession;
use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pages read in one calendar month, keyed "YYYY-MM".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthPages {
    pub month: String,
    pub pages: i64,
}

/// Pages read on one day of the week, across all sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayPages {
    pub day: String,
    pub pages: i64,
}

/// Pages read in one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearPages {
    pub year: i32,
    pub pages: i64,
}

/// Time-pattern report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeStats {
    /// Trailing 12 months from today, ascending by key; months without
    /// reading are omitted.
    pub monthly_pattern: Vec<MonthPages>,
    /// All seven weekdays in Monday-first order, zero-filled.
    pub weekly_pattern: Vec<WeekdayPages>,
    /// Every year with reading, ascending.
    pub yearly_pattern: Vec<YearPages>,
    /// Month with the highest all-time total, e.g. "March 2024".
    pub best_month: Option<String>,
    /// Weekday with the highest all-time total.
    pub best_day_of_week: Option<String>,
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn month_label(year: i32, month: u32) -> String {
    format!("{} {}", MONTH_NAMES[(month - 1) as usize], year)
}

/// Computes the time-pattern report.
pub fn compute_time_stats(sessions: &[ReadingSession], today: NaiveDate) -> TimeStats {
    let cutoff = today
        .checked_sub_months(Months::new(12))
        .unwrap_or(NaiveDate::MIN);

    let mut monthly: BTreeMap<String, i64> = BTreeMap::new();
    let mut by_weekday: BTreeMap<u32, i64> = BTreeMap::new();
    let mut yearly: BTreeMap<i32, i64> = BTreeMap::new();
    // all-time month totals, keyed (year, month) for the best-month pick
    let mut all_months: BTreeMap<(i32, u32), i64> = BTreeMap::new();

    for session in sessions {
        let date = session.date();
        let pages = session.pages_read() as i64;

        if date >= cutoff {
            let key = format!("{:04}-{:02}", date.year(), date.month());
            *monthly.entry(key).or_insert(0) += pages;
        }
        *by_weekday
            .entry(date.weekday().num_days_from_monday())
            .or_insert(0) += pages;
        *yearly.entry(date.year()).or_insert(0) += pages;
        *all_months.entry((date.year(), date.month())).or_insert(0) += pages;
    }

    let monthly_pattern = monthly
        .into_iter()
        .map(|(month, pages)| MonthPages { month, pages })
        .collect();

    let weekly_pattern: Vec<WeekdayPages> = WEEKDAYS
        .iter()
        .map(|w| WeekdayPages {
            day: weekday_name(*w).to_string(),
            pages: by_weekday
                .get(&w.num_days_from_monday())
                .copied()
                .unwrap_or(0),
        })
        .collect();

    let yearly_pattern = yearly
        .into_iter()
        .map(|(year, pages)| YearPages { year, pages })
        .collect();

    // earliest month wins ties (BTreeMap iterates ascending, > keeps first)
    let best_month = all_months
        .iter()
        .fold(None::<(&(i32, u32), i64)>, |best, (key, pages)| match best {
            Some((_, best_pages)) if *pages <= best_pages => best,
            _ => Some((key, *pages)),
        })
        .map(|((year, month), _)| month_label(*year, *month));

    let best_day_of_week = if sessions.is_empty() {
        None
    } else {
        weekly_pattern
            .iter()
            .fold(None::<&WeekdayPages>, |best, entry| match best {
                Some(b) if entry.pages <= b.pages => best,
                _ => Some(entry),
            })
            .map(|entry| entry.day.clone())
    };

    TimeStats {
        monthly_pattern,
        weekly_pattern,
        yearly_pattern,
        best_month,
        best_day_of_week,
    }
}
