//! Author statistics over finished books.

use crate::domain::catalog::{Author, Book};
use crate::domain::foundation::{round2, AuthorId, BookId};
use crate::domain::reading::ReadingSession;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Per-author book count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorBookCount {
    pub author_id: AuthorId,
    pub author_name: String,
    pub book_count: usize,
}

/// Per-author total pages read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPageCount {
    pub author_id: AuthorId,
    pub author_name: String,
    pub total_pages: i64,
}

/// Author aggregate report. Restricted to books whose status is Completed
/// or Summarized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorStats {
    pub unique_author_count: usize,
    /// Top entry of `books_per_author`, if any.
    pub most_read_author: Option<String>,
    /// Unique authors divided by finished books, in [0,1].
    pub diversity_score: f64,
    /// Descending by book count, top 10.
    pub books_per_author: Vec<AuthorBookCount>,
    /// Descending by pages, top 10.
    pub pages_per_author: Vec<AuthorPageCount>,
}

const TOP_N: usize = 10;

/// Computes the author report.
pub fn compute_author_stats(
    books: &[Book],
    authors: &[Author],
    sessions: &[ReadingSession],
) -> AuthorStats {
    let names: HashMap<AuthorId, &str> =
        authors.iter().map(|a| (*a.id(), a.name())).collect();
    let name_of = |id: &AuthorId| -> String {
        names.get(id).map(|n| n.to_string()).unwrap_or_default()
    };

    let finished: Vec<&Book> = books.iter().filter(|b| b.status().is_finished()).collect();
    let finished_ids: HashSet<BookId> = finished.iter().map(|b| *b.id()).collect();
    let author_of_book: HashMap<BookId, AuthorId> = finished
        .iter()
        .map(|b| (*b.id(), *b.author_id()))
        .collect();

    // Typed grouping over (author id) keys
    let mut book_counts: HashMap<AuthorId, usize> = HashMap::new();
    for book in &finished {
        *book_counts.entry(*book.author_id()).or_insert(0) += 1;
    }

    let mut page_counts: HashMap<AuthorId, i64> = HashMap::new();
    for session in sessions {
        if !finished_ids.contains(session.book_id()) {
            continue;
        }
        if let Some(author_id) = author_of_book.get(session.book_id()) {
            *page_counts.entry(*author_id).or_insert(0) += session.pages_read() as i64;
        }
    }

    let mut books_per_author: Vec<AuthorBookCount> = book_counts
        .into_iter()
        .map(|(author_id, book_count)| AuthorBookCount {
            author_id,
            author_name: name_of(&author_id),
            book_count,
        })
        .collect();
    // name ascending breaks count ties deterministically
    books_per_author.sort_by(|a, b| {
        b.book_count
            .cmp(&a.book_count)
            .then_with(|| a.author_name.cmp(&b.author_name))
    });
    books_per_author.truncate(TOP_N);

    let mut pages_per_author: Vec<AuthorPageCount> = page_counts
        .into_iter()
        .map(|(author_id, total_pages)| AuthorPageCount {
            author_id,
            author_name: name_of(&author_id),
            total_pages,
        })
        .collect();
    pages_per_author.sort_by(|a, b| {
        b.total_pages
            .cmp(&a.total_pages)
            .then_with(|| a.author_name.cmp(&b.author_name))
    });
    pages_per_author.truncate(TOP_N);

    let unique_author_count = finished
        .iter()
        .map(|b| *b.author_id())
        .collect::<HashSet<_>>()
        .len();

    let diversity_score = if finished.is_empty() {
        0.0
    } else {
        round2(unique_author_count as f64 / finished.len() as f64)
    };

    AuthorStats {
        unique_author_count,
        most_read_author: books_per_author.first().map(|c| c.author_name.clone()),
        diversity_score,
        books_per_author,
        pages_per_author,
    }
}
