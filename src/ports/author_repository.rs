//! Author repository port.

use crate::domain::catalog::Author;
use crate::domain::foundation::{AuthorId, DomainError};
use async_trait::async_trait;

/// Repository port for Author persistence.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Save a new author.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, author: &Author) -> Result<(), DomainError>;

    /// Update an existing author.
    ///
    /// # Errors
    ///
    /// - `AuthorNotFound` if the author doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, author: &Author) -> Result<(), DomainError>;

    /// Find an author by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, DomainError>;

    /// List all authors, ordered by name.
    async fn list(&self) -> Result<Vec<Author>, DomainError>;

    /// Case-insensitive substring search on name, ordered by name.
    async fn search(&self, query: &str) -> Result<Vec<Author>, DomainError>;

    /// Delete an author. Their books and every dependent row cascade at
    /// the persistence layer.
    ///
    /// # Errors
    ///
    /// - `AuthorNotFound` if the author doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &AuthorId) -> Result<(), DomainError>;
}
