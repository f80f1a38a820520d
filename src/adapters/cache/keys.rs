//! Cache key vocabulary and category invalidation helpers.
//!
//! Keys are built from a fixed vocabulary so prefix invalidation stays
//! reliable. Every entity-mutating handler must call the matching helper
//! immediately after a successful write; the read paths assume this
//! contract and perform no independent staleness detection.

use crate::domain::foundation::{AuthorId, TagId};
use crate::ports::ResponseCache;

/// Key for the author list.
pub const AUTHORS_LIST: &str = "authors:list";

/// Key prefix for per-author entries.
pub const AUTHORS_PREFIX: &str = "authors:";

/// Key for the tag list.
pub const TAGS_LIST: &str = "tags:list";

/// Key prefix for per-tag entries.
pub const TAGS_PREFIX: &str = "tags:";

/// Key prefix for statistics reports.
pub const STATS_PREFIX: &str = "stats:";

/// Key for the streak summary.
pub const STREAK: &str = "streak";

/// Key prefix for per-year heatmaps.
pub const HEATMAP_PREFIX: &str = "heatmap:";

/// Key for one author's detail entry.
pub fn author_detail(id: &AuthorId) -> String {
    format!("{}detail:{}", AUTHORS_PREFIX, id)
}

/// Key for one tag's detail entry.
pub fn tag_detail(id: &TagId) -> String {
    format!("{}detail:{}", TAGS_PREFIX, id)
}

/// Key for one statistics report, e.g. `stats:overview`.
pub fn statistics(report: &str) -> String {
    format!("{}{}", STATS_PREFIX, report)
}

/// Key for one year's heatmap.
pub fn heatmap_year(year: i32) -> String {
    format!("{}{}", HEATMAP_PREFIX, year)
}

// ════════════════════════════════════════════════════════════════════════════
// Category invalidation helpers
// ════════════════════════════════════════════════════════════════════════════

/// Evicts the author list and every per-author entry.
pub async fn invalidate_authors(cache: &dyn ResponseCache) {
    cache.remove_prefix(AUTHORS_PREFIX).await;
}

/// Evicts one author's detail entry plus the author list.
pub async fn invalidate_author(cache: &dyn ResponseCache, id: &AuthorId) {
    cache.remove(&author_detail(id)).await;
    cache.remove(AUTHORS_LIST).await;
}

/// Evicts the tag list and every per-tag entry.
pub async fn invalidate_tags(cache: &dyn ResponseCache) {
    cache.remove_prefix(TAGS_PREFIX).await;
}

/// Evicts one tag's detail entry plus the tag list.
pub async fn invalidate_tag(cache: &dyn ResponseCache, id: &TagId) {
    cache.remove(&tag_detail(id)).await;
    cache.remove(TAGS_LIST).await;
}

/// Evicts every statistics report.
pub async fn invalidate_statistics(cache: &dyn ResponseCache) {
    cache.remove_prefix(STATS_PREFIX).await;
}

/// Evicts one year's heatmap.
pub async fn invalidate_heatmap_year(cache: &dyn ResponseCache, year: i32) {
    cache.remove(&heatmap_year(year)).await;
}

/// Evicts every heatmap year.
pub async fn invalidate_heatmaps(cache: &dyn ResponseCache) {
    cache.remove_prefix(HEATMAP_PREFIX).await;
}

/// Evicts the streak summary.
pub async fn invalidate_streak(cache: &dyn ResponseCache) {
    cache.remove(STREAK).await;
}

/// Evicts everything derived from reading sessions: statistics, every
/// heatmap, and the streak.
pub async fn invalidate_reading_data(cache: &dyn ResponseCache) {
    invalidate_statistics(cache).await;
    invalidate_heatmaps(cache).await;
    invalidate_streak(cache).await;
}
