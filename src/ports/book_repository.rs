//! Book repository port.
//!
//! Defines the contract for persisting and retrieving books.
//! Implementations handle the actual database operations; queries stay
//! limited to equality/range filters and basic joins.

use crate::domain::catalog::Book;
use crate::domain::foundation::{AuthorId, BookId, DomainError};
use async_trait::async_trait;

/// Repository port for Book persistence.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Save a new book.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, book: &Book) -> Result<(), DomainError>;

    /// Update an existing book.
    ///
    /// # Errors
    ///
    /// - `BookNotFound` if the book doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, book: &Book) -> Result<(), DomainError>;

    /// Find a book by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError>;

    /// List all books, ordered by title.
    async fn list(&self) -> Result<Vec<Book>, DomainError>;

    /// List all books for one author, ordered by title.
    async fn list_by_author(&self, author_id: &AuthorId) -> Result<Vec<Book>, DomainError>;

    /// Case-insensitive substring search on title, ordered by title.
    async fn search(&self, query: &str) -> Result<Vec<Book>, DomainError>;

    /// Delete a book. Sessions, tag assignments, and the goal cascade at
    /// the persistence layer.
    ///
    /// # Errors
    ///
    /// - `BookNotFound` if the book doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &BookId) -> Result<(), DomainError>;
}
