//! Tag repository port, including the book/tag assignment link.

use crate::domain::catalog::{Tag, TagAssignment};
use crate::domain::foundation::{BookId, DomainError, TagId};
use async_trait::async_trait;

/// Repository port for Tag persistence and assignments.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Save a new tag.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, tag: &Tag) -> Result<(), DomainError>;

    /// Update an existing tag.
    ///
    /// # Errors
    ///
    /// - `TagNotFound` if the tag doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, tag: &Tag) -> Result<(), DomainError>;

    /// Find a tag by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &TagId) -> Result<Option<Tag>, DomainError>;

    /// List all tags, ordered by name.
    async fn list(&self) -> Result<Vec<Tag>, DomainError>;

    /// List every book/tag assignment.
    async fn list_assignments(&self) -> Result<Vec<TagAssignment>, DomainError>;

    /// List assignments for one book.
    async fn list_assignments_for_book(
        &self,
        book_id: &BookId,
    ) -> Result<Vec<TagAssignment>, DomainError>;

    /// Attach a tag to a book.
    ///
    /// # Errors
    ///
    /// - `DuplicateTagAssignment` if the pair already exists
    /// - `DatabaseError` on persistence failure
    async fn assign(&self, assignment: &TagAssignment) -> Result<(), DomainError>;

    /// Detach a tag from a book.
    ///
    /// # Errors
    ///
    /// - `TagNotFound` if the pair doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn unassign(&self, assignment: &TagAssignment) -> Result<(), DomainError>;

    /// Delete a tag. Its assignments cascade at the persistence layer.
    ///
    /// # Errors
    ///
    /// - `TagNotFound` if the tag doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &TagId) -> Result<(), DomainError>;
}
