//! Per-day page totals for a calendar year.

use crate::domain::reading::ReadingSession;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Total pages read on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapDay {
    pub date: NaiveDate,
    pub pages: i64,
}

/// Groups sessions into per-day totals for the given year, ascending by
/// date. Days without reading are omitted.
pub fn heatmap_for_year(sessions: &[ReadingSession], year: i32) -> Vec<HeatmapDay> {
    let mut by_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for session in sessions {
        if session.date().year() == year {
            *by_day.entry(session.date()).or_insert(0) += session.pages_read() as i64;
        }
    }

    by_day
        .into_iter()
        .map(|(date, pages)| HeatmapDay { date, pages })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{BookId, SessionId};

    fn session(y: i32, m: u32, d: u32, pages: i32) -> ReadingSession {
        ReadingSession::reconstitute(
            SessionId::new(),
            BookId::new(),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            pages,
            None,
            crate::domain::foundation::Timestamp::now(),
            crate::domain::foundation::Timestamp::now(),
        )
    }

    #[test]
    fn sums_same_day_sessions() {
        let sessions = vec![session(2024, 3, 10, 20), session(2024, 3, 10, 30)];
        let days = heatmap_for_year(&sessions, 2024);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].pages, 50);
    }

    #[test]
    fn filters_other_years() {
        let sessions = vec![session(2023, 12, 31, 10), session(2024, 1, 1, 20)];
        let days = heatmap_for_year(&sessions, 2024);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn days_are_ascending() {
        let sessions = vec![
            session(2024, 6, 3, 5),
            session(2024, 1, 1, 5),
            session(2024, 3, 15, 5),
        ];
        let days = heatmap_for_year(&sessions, 2024);
        let dates: Vec<NaiveDate> = days.iter().map(|d| d.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn empty_year_yields_empty_vec() {
        let days = heatmap_for_year(&[], 2024);
        assert!(days.is_empty());
    }
}
