//! HTTP handlers for author endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::{
    CreateAuthorCommand, CreateAuthorHandler, DeleteAuthorHandler, GetAuthorHandler,
    GetAuthorQuery, ListAuthorsHandler, UpdateAuthorCommand, UpdateAuthorHandler,
};
use crate::domain::foundation::AuthorId;
use crate::ports::{AuthorRepository, ResponseCache};

use super::dto::{AuthorResponse, CreateAuthorRequest, UpdateAuthorRequest};

/// Shared state for the author endpoints.
#[derive(Clone)]
pub struct AuthorsAppState {
    pub authors: Arc<dyn AuthorRepository>,
    pub cache: Arc<dyn ResponseCache>,
    pub ttl: Duration,
}

impl AuthorsAppState {
    fn create_handler(&self) -> CreateAuthorHandler {
        CreateAuthorHandler::new(self.authors.clone(), self.cache.clone())
    }

    fn get_handler(&self) -> GetAuthorHandler {
        GetAuthorHandler::new(self.authors.clone(), self.cache.clone(), self.ttl)
    }

    fn list_handler(&self) -> ListAuthorsHandler {
        ListAuthorsHandler::new(self.authors.clone(), self.cache.clone(), self.ttl)
    }

    fn update_handler(&self) -> UpdateAuthorHandler {
        UpdateAuthorHandler::new(self.authors.clone(), self.cache.clone())
    }

    fn delete_handler(&self) -> DeleteAuthorHandler {
        DeleteAuthorHandler::new(self.authors.clone(), self.cache.clone())
    }
}

fn parse_author_id(raw: &str) -> Result<AuthorId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid author ID format"))
}

/// POST /authors
pub async fn create_author(
    State(state): State<AuthorsAppState>,
    Json(request): Json<CreateAuthorRequest>,
) -> Result<(StatusCode, Json<AuthorResponse>), ApiError> {
    let command = CreateAuthorCommand {
        name: request.name,
        bio: request.bio,
        image_url: request.image_url,
    };

    let author = state.create_handler().handle(command).await?;
    Ok((StatusCode::CREATED, Json(author.into())))
}

/// GET /authors
pub async fn list_authors(
    State(state): State<AuthorsAppState>,
) -> Result<Json<Vec<AuthorResponse>>, ApiError> {
    let authors = state.list_handler().handle().await?;
    Ok(Json(authors.into_iter().map(Into::into).collect()))
}

/// GET /authors/:id
pub async fn get_author(
    State(state): State<AuthorsAppState>,
    Path(id): Path<String>,
) -> Result<Json<AuthorResponse>, ApiError> {
    let query = GetAuthorQuery {
        id: parse_author_id(&id)?,
    };

    let author = state.get_handler().handle(query).await?;
    Ok(Json(author.into()))
}

/// PUT /authors/:id
pub async fn update_author(
    State(state): State<AuthorsAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateAuthorRequest>,
) -> Result<Json<AuthorResponse>, ApiError> {
    let command = UpdateAuthorCommand {
        id: parse_author_id(&id)?,
        name: request.name,
        bio: request.bio,
        image_url: request.image_url,
    };

    let author = state.update_handler().handle(command).await?;
    Ok(Json(author.into()))
}

/// DELETE /authors/:id
pub async fn delete_author(
    State(state): State<AuthorsAppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_handler()
        .handle(parse_author_id(&id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
