//! Tag entity and the book/tag assignment link.

use crate::domain::foundation::{BookId, DomainError, TagId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Tag attachable to books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    id: TagId,
    name: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Tag {
    /// Create a new tag.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name is empty
    pub fn new(id: TagId, name: String) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            name,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a tag from persistence (no validation).
    pub fn reconstitute(
        id: TagId,
        name: String,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &TagId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Rename the tag.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name is empty
    pub fn rename(&mut self, name: String) -> Result<(), DomainError> {
        Self::validate_name(&name)?;
        self.name = name;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        Ok(())
    }
}

/// Pure many-to-many link between a book and a tag. Carries no extra
/// attributes; identity is the (book_id, tag_id) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagAssignment {
    pub book_id: BookId,
    pub tag_id: TagId,
}

impl TagAssignment {
    pub fn new(book_id: BookId, tag_id: TagId) -> Self {
        Self { book_id, tag_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tag_validates_name() {
        assert!(Tag::new(TagId::new(), "sci-fi".to_string()).is_ok());
        assert!(Tag::new(TagId::new(), "".to_string()).is_err());
    }

    #[test]
    fn rename_replaces_name() {
        let mut tag = Tag::new(TagId::new(), "scifi".to_string()).unwrap();
        tag.rename("science fiction".to_string()).unwrap();
        assert_eq!(tag.name(), "science fiction");
    }

    #[test]
    fn assignments_compare_by_pair() {
        let book = BookId::new();
        let tag = TagId::new();
        assert_eq!(TagAssignment::new(book, tag), TagAssignment::new(book, tag));
        assert_ne!(
            TagAssignment::new(book, tag),
            TagAssignment::new(BookId::new(), tag)
        );
    }
}
