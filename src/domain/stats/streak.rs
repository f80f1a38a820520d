//! Consecutive-day reading streak computation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Current and longest consecutive-day streaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl StreakSummary {
    pub fn empty() -> Self {
        Self {
            current_streak: 0,
            longest_streak: 0,
        }
    }
}

/// Computes current and longest streaks from reading-session dates.
///
/// Multiple sessions on the same calendar day count as a single reading
/// day. A gap of more than one day resets the running streak. If the most
/// recent reading day is more than one day before `today`, the current
/// streak is reported as 0 while the longest streak keeps its historical
/// value.
pub fn compute_streaks(dates: &[NaiveDate], today: NaiveDate) -> StreakSummary {
    // BTreeSet dedupes same-day sessions and yields ascending order
    let days: BTreeSet<NaiveDate> = dates.iter().copied().collect();
    if days.is_empty() {
        return StreakSummary::empty();
    }

    let mut current: u32 = 0;
    let mut longest: u32 = 0;
    let mut last_day: Option<NaiveDate> = None;

    for day in &days {
        current = match last_day {
            Some(prev) if (*day - prev).num_days() == 1 => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        last_day = Some(*day);
    }

    // Streak is broken by absence once a full day has passed without reading
    if let Some(last) = last_day {
        if (today - last).num_days() > 1 {
            current = 0;
        }
    }

    StreakSummary {
        current_streak: current,
        longest_streak: longest,
    }
}
