//! HTTP DTOs for tag endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Tag;

/// Request to create a new tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagRequest {
    pub name: String,
}

/// Request to rename a tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTagRequest {
    pub name: String,
}

/// Request to attach or detach a tag on a book.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagAssignmentRequest {
    pub book_id: String,
}

/// Tag view for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResponse {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id().to_string(),
            name: tag.name().to_string(),
            created_at: tag.created_at().as_datetime().to_rfc3339(),
            updated_at: tag.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TagId;

    #[test]
    fn tag_response_conversion() {
        let tag = Tag::new(TagId::new(), "sci-fi".to_string()).unwrap();
        let response: TagResponse = tag.clone().into();
        assert_eq!(response.id, tag.id().to_string());
        assert_eq!(response.name, "sci-fi");
    }
}
