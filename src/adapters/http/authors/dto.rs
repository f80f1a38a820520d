//! HTTP DTOs for author endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Author;

/// Request to create a new author.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorRequest {
    pub name: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
}

/// Request to update an author.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorRequest {
    pub name: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
}

/// Author view for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id().to_string(),
            name: author.name().to_string(),
            bio: author.bio().map(String::from),
            image_url: author.image_url().map(String::from),
            created_at: author.created_at().as_datetime().to_rfc3339(),
            updated_at: author.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AuthorId;

    #[test]
    fn create_author_request_deserializes() {
        let json = r#"{"name": "Ted Chiang"}"#;
        let req: CreateAuthorRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Ted Chiang");
        assert!(req.bio.is_none());
    }

    #[test]
    fn author_response_conversion() {
        let author = Author::new(AuthorId::new(), "Ted Chiang".to_string()).unwrap();
        let response: AuthorResponse = author.clone().into();
        assert_eq!(response.id, author.id().to_string());
        assert_eq!(response.name, "Ted Chiang");
    }
}
