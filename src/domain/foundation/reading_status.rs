//! ReadingStatus enum with display metadata.
//!
//! The status is an ordered progression for display purposes, but it is an
//! open enumeration: any status may be set directly by an API call. No
//! transition table is enforced.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reading lifecycle of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    #[default]
    NotReading,
    Planning,
    CurrentlyReading,
    Completed,
    Summarized,
}

/// Display metadata for a status value. Not persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusMetadata {
    pub status: ReadingStatus,
    pub display_name: &'static str,
    pub badge_class: &'static str,
}

/// All status values with their display metadata, in progression order.
pub static ALL_STATUSES: Lazy<Vec<StatusMetadata>> = Lazy::new(|| {
    ReadingStatus::ALL
        .iter()
        .map(|s| StatusMetadata {
            status: *s,
            display_name: s.display_name(),
            badge_class: s.badge_class(),
        })
        .collect()
});

impl ReadingStatus {
    /// Every status value in progression order.
    pub const ALL: [ReadingStatus; 5] = [
        ReadingStatus::NotReading,
        ReadingStatus::Planning,
        ReadingStatus::CurrentlyReading,
        ReadingStatus::Completed,
        ReadingStatus::Summarized,
    ];

    /// Human-readable name for UI display.
    pub fn display_name(&self) -> &'static str {
        match self {
            ReadingStatus::NotReading => "Not Reading",
            ReadingStatus::Planning => "Planning",
            ReadingStatus::CurrentlyReading => "Currently Reading",
            ReadingStatus::Completed => "Completed",
            ReadingStatus::Summarized => "Summarized",
        }
    }

    /// CSS badge class for UI display.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ReadingStatus::NotReading => "badge-secondary",
            ReadingStatus::Planning => "badge-info",
            ReadingStatus::CurrentlyReading => "badge-primary",
            ReadingStatus::Completed => "badge-success",
            ReadingStatus::Summarized => "badge-dark",
        }
    }

    /// True for statuses that count as a finished book (Completed or
    /// Summarized), the filter used throughout the statistics reports.
    pub fn is_finished(&self) -> bool {
        matches!(self, ReadingStatus::Completed | ReadingStatus::Summarized)
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
