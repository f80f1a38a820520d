//! HTTP handlers for tag endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::{
    AssignTagHandler, CreateTagCommand, CreateTagHandler, DeleteTagHandler, GetTagHandler,
    GetTagQuery, ListTagsHandler, TagAssignmentCommand, UpdateTagCommand, UpdateTagHandler,
};
use crate::domain::foundation::{BookId, TagId};
use crate::ports::{BookRepository, ResponseCache, TagRepository};

use super::dto::{CreateTagRequest, TagAssignmentRequest, TagResponse, UpdateTagRequest};

/// Shared state for the tag endpoints.
#[derive(Clone)]
pub struct TagsAppState {
    pub tags: Arc<dyn TagRepository>,
    pub books: Arc<dyn BookRepository>,
    pub cache: Arc<dyn ResponseCache>,
    pub ttl: Duration,
}

impl TagsAppState {
    fn create_handler(&self) -> CreateTagHandler {
        CreateTagHandler::new(self.tags.clone(), self.cache.clone())
    }

    fn get_handler(&self) -> GetTagHandler {
        GetTagHandler::new(self.tags.clone(), self.cache.clone(), self.ttl)
    }

    fn list_handler(&self) -> ListTagsHandler {
        ListTagsHandler::new(self.tags.clone(), self.cache.clone(), self.ttl)
    }

    fn update_handler(&self) -> UpdateTagHandler {
        UpdateTagHandler::new(self.tags.clone(), self.cache.clone())
    }

    fn delete_handler(&self) -> DeleteTagHandler {
        DeleteTagHandler::new(self.tags.clone(), self.cache.clone())
    }

    fn assign_handler(&self) -> AssignTagHandler {
        AssignTagHandler::new(self.tags.clone(), self.books.clone(), self.cache.clone())
    }
}

fn parse_tag_id(raw: &str) -> Result<TagId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid tag ID format"))
}

fn parse_book_id(raw: &str) -> Result<BookId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid book ID format"))
}

/// POST /tags
pub async fn create_tag(
    State(state): State<TagsAppState>,
    Json(request): Json<CreateTagRequest>,
) -> Result<(StatusCode, Json<TagResponse>), ApiError> {
    let tag = state
        .create_handler()
        .handle(CreateTagCommand { name: request.name })
        .await?;
    Ok((StatusCode::CREATED, Json(tag.into())))
}

/// GET /tags
pub async fn list_tags(
    State(state): State<TagsAppState>,
) -> Result<Json<Vec<TagResponse>>, ApiError> {
    let tags = state.list_handler().handle().await?;
    Ok(Json(tags.into_iter().map(Into::into).collect()))
}

/// GET /tags/:id
pub async fn get_tag(
    State(state): State<TagsAppState>,
    Path(id): Path<String>,
) -> Result<Json<TagResponse>, ApiError> {
    let tag = state
        .get_handler()
        .handle(GetTagQuery {
            id: parse_tag_id(&id)?,
        })
        .await?;
    Ok(Json(tag.into()))
}

/// PUT /tags/:id
pub async fn update_tag(
    State(state): State<TagsAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTagRequest>,
) -> Result<Json<TagResponse>, ApiError> {
    let tag = state
        .update_handler()
        .handle(UpdateTagCommand {
            id: parse_tag_id(&id)?,
            name: request.name,
        })
        .await?;
    Ok(Json(tag.into()))
}

/// DELETE /tags/:id
pub async fn delete_tag(
    State(state): State<TagsAppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.delete_handler().handle(parse_tag_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /tags/:id/books
pub async fn assign_tag(
    State(state): State<TagsAppState>,
    Path(id): Path<String>,
    Json(request): Json<TagAssignmentRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .assign_handler()
        .assign(TagAssignmentCommand {
            book_id: parse_book_id(&request.book_id)?,
            tag_id: parse_tag_id(&id)?,
        })
        .await?;
    Ok(StatusCode::CREATED)
}

/// DELETE /tags/:id/books/:book_id
pub async fn unassign_tag(
    State(state): State<TagsAppState>,
    Path((id, book_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state
        .assign_handler()
        .unassign(TagAssignmentCommand {
            book_id: parse_book_id(&book_id)?,
            tag_id: parse_tag_id(&id)?,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
