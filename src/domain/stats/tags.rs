//! Tag statistics over finished books, keyed through the many-to-many
//! assignment.

use crate::domain::catalog::{Book, Tag, TagAssignment};
use crate::domain::foundation::{round2, BookId, TagId};
use crate::domain::reading::ReadingSession;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Per-tag distinct book count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagBookCount {
    pub tag_id: TagId,
    pub tag_name: String,
    pub book_count: usize,
}

/// Per-tag total pages read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagPageCount {
    pub tag_id: TagId,
    pub tag_name: String,
    pub total_pages: i64,
}

/// Tag aggregate report. Restricted to books whose status is Completed or
/// Summarized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagStats {
    pub unique_tag_count: usize,
    /// Top entry of `books_per_tag`, if any.
    pub most_read_tag: Option<String>,
    /// Unique tags divided by finished books, 0 when no finished books.
    pub diversity_score: f64,
    /// Descending by distinct book count, top 10.
    pub books_per_tag: Vec<TagBookCount>,
    /// Descending by pages, top 10.
    pub pages_per_tag: Vec<TagPageCount>,
}

const TOP_N: usize = 10;

/// Computes the tag report.
pub fn compute_tag_stats(
    books: &[Book],
    tags: &[Tag],
    assignments: &[TagAssignment],
    sessions: &[ReadingSession],
) -> TagStats {
    let names: HashMap<TagId, &str> = tags.iter().map(|t| (*t.id(), t.name())).collect();
    let name_of =
        |id: &TagId| -> String { names.get(id).map(|n| n.to_string()).unwrap_or_default() };

    let finished_ids: HashSet<BookId> = books
        .iter()
        .filter(|b| b.status().is_finished())
        .map(|b| *b.id())
        .collect();

    // Distinct book ids per tag; a book carries a tag at most once but the
    // set guards against double-counting regardless
    let mut books_by_tag: HashMap<TagId, HashSet<BookId>> = HashMap::new();
    for assignment in assignments {
        if finished_ids.contains(&assignment.book_id) {
            books_by_tag
                .entry(assignment.tag_id)
                .or_default()
                .insert(assignment.book_id);
        }
    }

    let mut pages_by_book: HashMap<BookId, i64> = HashMap::new();
    for session in sessions {
        if finished_ids.contains(session.book_id()) {
            *pages_by_book.entry(*session.book_id()).or_insert(0) +=
                session.pages_read() as i64;
        }
    }

    let mut pages_by_tag: HashMap<TagId, i64> = HashMap::new();
    for (tag_id, book_ids) in &books_by_tag {
        let total: i64 = book_ids
            .iter()
            .filter_map(|id| pages_by_book.get(id))
            .sum();
        pages_by_tag.insert(*tag_id, total);
    }

    let mut books_per_tag: Vec<TagBookCount> = books_by_tag
        .iter()
        .map(|(tag_id, book_ids)| TagBookCount {
            tag_id: *tag_id,
            tag_name: name_of(tag_id),
            book_count: book_ids.len(),
        })
        .collect();
    books_per_tag.sort_by(|a, b| {
        b.book_count
            .cmp(&a.book_count)
            .then_with(|| a.tag_name.cmp(&b.tag_name))
    });
    books_per_tag.truncate(TOP_N);

    let mut pages_per_tag: Vec<TagPageCount> = pages_by_tag
        .into_iter()
        .map(|(tag_id, total_pages)| TagPageCount {
            tag_id,
            tag_name: name_of(&tag_id),
            total_pages,
        })
        .collect();
    pages_per_tag.sort_by(|a, b| {
        b.total_pages
            .cmp(&a.total_pages)
            .then_with(|| a.tag_name.cmp(&b.tag_name))
    });
    pages_per_tag.truncate(TOP_N);

    let unique_tag_count = books_by_tag.len();
    let diversity_score = if finished_ids.is_empty() {
        0.0
    } else {
        round2(unique_tag_count as f64 / finished_ids.len() as f64)
    };

    TagStats {
        unique_tag_count,
        most_read_tag: books_per_tag.first().map(|c| c.tag_name.clone()),
        diversity_score,
        books_per_tag,
        pages_per_tag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AuthorId, ReadingStatus, SessionId, Timestamp};
    use chrono::NaiveDate;

    fn tag(name: &str) -> Tag {
        Tag::new(TagId::new(), name.to_string()).unwrap()
    }

    fn finished_book() -> Book {
        let mut book =
            Book::new(BookId::new(), AuthorId::new(), "Book".to_string(), 200).unwrap();
        book.set_status(ReadingStatus::Summarized);
        book
    }

    fn session(book_id: BookId, pages: i32) -> ReadingSession {
        ReadingSession::reconstitute(
            SessionId::new(),
            book_id,
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            pages,
            None,
            Timestamp::now(),
            Timestamp::now(),
        )
    }

    #[test]
    fn empty_input_yields_zeros() {
        let stats = compute_tag_stats(&[], &[], &[], &[]);
        assert_eq!(stats.unique_tag_count, 0);
        assert_eq!(stats.diversity_score, 0.0);
        assert!(stats.most_read_tag.is_none());
    }

    #[test]
    fn counts_distinct_books_per_tag() {
        let scifi = tag("sci-fi");
        let book_a = finished_book();
        let book_b = finished_book();
        let assignments = vec![
            TagAssignment::new(*book_a.id(), *scifi.id()),
            TagAssignment::new(*book_b.id(), *scifi.id()),
        ];
        let stats = compute_tag_stats(
            &[book_a, book_b],
            std::slice::from_ref(&scifi),
            &assignments,
            &[],
        );
        assert_eq!(stats.books_per_tag.len(), 1);
        assert_eq!(stats.books_per_tag[0].book_count, 2);
        assert_eq!(stats.most_read_tag, Some("sci-fi".to_string()));
    }

    #[test]
    fn multiple_sessions_do_not_double_count_books() {
        let scifi = tag("sci-fi");
        let book = finished_book();
        let assignments = vec![TagAssignment::new(*book.id(), *scifi.id())];
        let sessions = vec![session(*book.id(), 40), session(*book.id(), 60)];
        let stats = compute_tag_stats(
            std::slice::from_ref(&book),
            std::slice::from_ref(&scifi),
            &assignments,
            &sessions,
        );
        assert_eq!(stats.books_per_tag[0].book_count, 1);
        assert_eq!(stats.pages_per_tag[0].total_pages, 100);
    }

    #[test]
    fn unfinished_books_are_excluded() {
        let scifi = tag("sci-fi");
        let mut reading =
            Book::new(BookId::new(), AuthorId::new(), "WIP".to_string(), 100).unwrap();
        reading.set_status(ReadingStatus::CurrentlyReading);
        let assignments = vec![TagAssignment::new(*reading.id(), *scifi.id())];
        let stats = compute_tag_stats(
            std::slice::from_ref(&reading),
            std::slice::from_ref(&scifi),
            &assignments,
            &[],
        );
        assert_eq!(stats.unique_tag_count, 0);
        assert!(stats.books_per_tag.is_empty());
    }

    #[test]
    fn diversity_uses_finished_book_total() {
        let a = tag("a");
        let b = tag("b");
        let book_one = finished_book();
        let book_two = finished_book();
        let assignments = vec![
            TagAssignment::new(*book_one.id(), *a.id()),
            TagAssignment::new(*book_one.id(), *b.id()),
            TagAssignment::new(*book_two.id(), *a.id()),
        ];
        let stats =
            compute_tag_stats(&[book_one, book_two], &[a, b], &assignments, &[]);
        // 2 unique tags over 2 finished books
        assert_eq!(stats.diversity_score, 1.0);
    }
}
