//! Author entity.

use crate::domain::foundation::{AuthorId, DomainError, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Author of zero or more books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    name: String,
    bio: Option<String>,
    image_url: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Author {
    /// Create a new author.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name is empty
    pub fn new(id: AuthorId, name: String) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            name,
            bio: None,
            image_url: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute an author from persistence (no validation).
    pub fn reconstitute(
        id: AuthorId,
        name: String,
        bio: Option<String>,
        image_url: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            bio,
            image_url,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &AuthorId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Update the author's editable fields.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name is empty
    pub fn update_details(
        &mut self,
        name: String,
        bio: Option<String>,
        image_url: Option<String>,
    ) -> Result<(), DomainError> {
        Self::validate_name(&name)?;

        self.name = name;
        self.bio = bio;
        self.image_url = image_url;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_author_has_no_bio() {
        let author = Author::new(AuthorId::new(), "Ursula K. Le Guin".to_string()).unwrap();
        assert_eq!(author.name(), "Ursula K. Le Guin");
        assert!(author.bio().is_none());
        assert!(author.image_url().is_none());
    }

    #[test]
    fn new_author_rejects_empty_name() {
        assert!(Author::new(AuthorId::new(), " ".to_string()).is_err());
    }

    #[test]
    fn update_details_replaces_fields() {
        let mut author = Author::new(AuthorId::new(), "U. Le Guin".to_string()).unwrap();
        author
            .update_details(
                "Ursula K. Le Guin".to_string(),
                Some("American author".to_string()),
                None,
            )
            .unwrap();
        assert_eq!(author.name(), "Ursula K. Le Guin");
        assert_eq!(author.bio(), Some("American author"));
    }

    #[test]
    fn update_details_rejects_empty_name() {
        let mut author = Author::new(AuthorId::new(), "Someone".to_string()).unwrap();
        assert!(author.update_details("".to_string(), None, None).is_err());
        assert_eq!(author.name(), "Someone");
    }
}
