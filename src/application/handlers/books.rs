//! Command and query handlers for books.
//!
//! Book writes change the statistics reports, so every mutation ends by
//! invalidating the statistics category. Deletes cascade to sessions at
//! the persistence layer and therefore clear all reading-derived entries.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::adapters::cache::keys;
use crate::domain::catalog::Book;
use crate::domain::foundation::{
    AuthorId, BookId, DomainError, ErrorCode, ReadingStatus,
};
use crate::ports::{AuthorRepository, BookRepository, ResponseCache};

/// Command to create a new book.
#[derive(Debug, Clone)]
pub struct CreateBookCommand {
    pub author_id: AuthorId,
    pub title: String,
    pub total_pages: i32,
}

/// Handler for creating books.
pub struct CreateBookHandler {
    books: Arc<dyn BookRepository>,
    authors: Arc<dyn AuthorRepository>,
    cache: Arc<dyn ResponseCache>,
}

impl CreateBookHandler {
    pub fn new(
        books: Arc<dyn BookRepository>,
        authors: Arc<dyn AuthorRepository>,
        cache: Arc<dyn ResponseCache>,
    ) -> Self {
        Self {
            books,
            authors,
            cache,
        }
    }

    pub async fn handle(&self, command: CreateBookCommand) -> Result<Book, DomainError> {
        if self.authors.find_by_id(&command.author_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::AuthorNotFound,
                format!("Author not found: {}", command.author_id),
            ));
        }

        let book = Book::new(
            BookId::new(),
            command.author_id,
            command.title,
            command.total_pages,
        )?;
        self.books.save(&book).await?;

        keys::invalidate_statistics(self.cache.as_ref()).await;
        Ok(book)
    }
}

/// Query to fetch one book.
#[derive(Debug, Clone)]
pub struct GetBookQuery {
    pub id: BookId,
}

/// Handler for fetching one book.
pub struct GetBookHandler {
    books: Arc<dyn BookRepository>,
}

impl GetBookHandler {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    pub async fn handle(&self, query: GetBookQuery) -> Result<Book, DomainError> {
        self.books.find_by_id(&query.id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::BookNotFound,
                format!("Book not found: {}", query.id),
            )
        })
    }
}

/// Handler for listing books, optionally restricted to one author.
pub struct ListBooksHandler {
    books: Arc<dyn BookRepository>,
}

impl ListBooksHandler {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    pub async fn handle(
        &self,
        author_id: Option<AuthorId>,
    ) -> Result<Vec<Book>, DomainError> {
        match author_id {
            Some(author_id) => self.books.list_by_author(&author_id).await,
            None => self.books.list().await,
        }
    }
}

/// Command to update a book.
#[derive(Debug, Clone)]
pub struct UpdateBookCommand {
    pub id: BookId,
    pub author_id: AuthorId,
    pub title: String,
    pub total_pages: i32,
    pub status: ReadingStatus,
    pub started_reading_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub summary: Option<String>,
}

/// Handler for updating books.
pub struct UpdateBookHandler {
    books: Arc<dyn BookRepository>,
    authors: Arc<dyn AuthorRepository>,
    cache: Arc<dyn ResponseCache>,
}

impl UpdateBookHandler {
    pub fn new(
        books: Arc<dyn BookRepository>,
        authors: Arc<dyn AuthorRepository>,
        cache: Arc<dyn ResponseCache>,
    ) -> Self {
        Self {
            books,
            authors,
            cache,
        }
    }

    pub async fn handle(&self, command: UpdateBookCommand) -> Result<Book, DomainError> {
        let mut book = self.books.find_by_id(&command.id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::BookNotFound,
                format!("Book not found: {}", command.id),
            )
        })?;

        if self.authors.find_by_id(&command.author_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::AuthorNotFound,
                format!("Author not found: {}", command.author_id),
            ));
        }

        book.update_details(
            command.author_id,
            command.title,
            command.total_pages,
            command.status,
            command.started_reading_date,
            command.completed_date,
            command.summary,
        )?;
        self.books.update(&book).await?;

        keys::invalidate_statistics(self.cache.as_ref()).await;
        Ok(book)
    }
}

/// Handler for deleting books.
pub struct DeleteBookHandler {
    books: Arc<dyn BookRepository>,
    cache: Arc<dyn ResponseCache>,
}

impl DeleteBookHandler {
    pub fn new(books: Arc<dyn BookRepository>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { books, cache }
    }

    pub async fn handle(&self, id: BookId) -> Result<(), DomainError> {
        self.books.delete(&id).await?;

        // sessions cascade with the book, so every derived entry is stale
        keys::invalidate_reading_data(self.cache.as_ref()).await;
        Ok(())
    }
}
