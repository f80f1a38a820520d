//! bookstack - personal book-tracking REST API.
//!
//! Tracks books, authors, tags, reading sessions, and goals, and derives
//! statistics from them: streaks, heatmaps, and seven aggregate reports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
