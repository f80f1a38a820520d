//! SearchHandler - substring search across books and authors.

use std::sync::Arc;

use crate::domain::catalog::{Author, Book};
use crate::domain::foundation::DomainError;
use crate::ports::{AuthorRepository, BookRepository};

/// Matches for one search query.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub books: Vec<Book>,
    pub authors: Vec<Author>,
}

/// Handler for the search endpoint. Substring matching is delegated to
/// the repositories; an empty query returns empty results without
/// querying.
pub struct SearchHandler {
    books: Arc<dyn BookRepository>,
    authors: Arc<dyn AuthorRepository>,
}

impl SearchHandler {
    pub fn new(books: Arc<dyn BookRepository>, authors: Arc<dyn AuthorRepository>) -> Self {
        Self { books, authors }
    }

    pub async fn handle(&self, query: &str) -> Result<SearchResults, DomainError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchResults {
                books: Vec::new(),
                authors: Vec::new(),
            });
        }

        Ok(SearchResults {
            books: self.books.search(query).await?,
            authors: self.authors.search(query).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        MockAuthorRepository, MockBookRepository,
    };
    use crate::domain::foundation::{AuthorId, BookId};

    fn setup() -> SearchHandler {
        let author = Author::new(AuthorId::new(), "Ursula K. Le Guin".to_string()).unwrap();
        let book = Book::new(
            BookId::new(),
            *author.id(),
            "The Left Hand of Darkness".to_string(),
            304,
        )
        .unwrap();
        SearchHandler::new(
            Arc::new(MockBookRepository::with_books(vec![book])),
            Arc::new(MockAuthorRepository::with_authors(vec![author])),
        )
    }

    #[tokio::test]
    async fn finds_books_and_authors_by_substring() {
        let handler = setup();

        let results = handler.handle("le").await.unwrap();
        assert_eq!(results.books.len(), 1);
        assert_eq!(results.authors.len(), 1);
    }

    #[tokio::test]
    async fn empty_query_returns_nothing() {
        let handler = setup();

        let results = handler.handle("   ").await.unwrap();
        assert!(results.books.is_empty());
        assert!(results.authors.is_empty());
    }
}
