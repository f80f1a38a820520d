//! HTTP handlers for reading-session endpoints.
//!
//! POST merges same-day duplicates (200 with the merged row rather than
//! 201); moving a session onto an occupied date via PUT is a 409.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::{
    DeleteSessionHandler, GetSessionHandler, ListSessionsHandler, ListSessionsQuery,
    RecordSessionCommand, RecordSessionHandler, UpdateSessionCommand, UpdateSessionHandler,
};
use crate::domain::foundation::{BookId, SessionId};
use crate::ports::{BookRepository, ResponseCache, SessionRepository};

use super::dto::{
    ListSessionsParams, RecordSessionRequest, SessionResponse, UpdateSessionRequest,
};

/// Shared state for the session endpoints.
#[derive(Clone)]
pub struct SessionsAppState {
    pub sessions: Arc<dyn SessionRepository>,
    pub books: Arc<dyn BookRepository>,
    pub cache: Arc<dyn ResponseCache>,
}

impl SessionsAppState {
    fn record_handler(&self) -> RecordSessionHandler {
        RecordSessionHandler::new(self.sessions.clone(), self.books.clone(), self.cache.clone())
    }

    fn get_handler(&self) -> GetSessionHandler {
        GetSessionHandler::new(self.sessions.clone())
    }

    fn list_handler(&self) -> ListSessionsHandler {
        ListSessionsHandler::new(self.sessions.clone())
    }

    fn update_handler(&self) -> UpdateSessionHandler {
        UpdateSessionHandler::new(self.sessions.clone(), self.cache.clone())
    }

    fn delete_handler(&self) -> DeleteSessionHandler {
        DeleteSessionHandler::new(self.sessions.clone(), self.cache.clone())
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid session ID format"))
}

fn parse_book_id(raw: &str) -> Result<BookId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid book ID format"))
}

/// POST /readingsessions
pub async fn record_session(
    State(state): State<SessionsAppState>,
    Json(request): Json<RecordSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let command = RecordSessionCommand {
        book_id: parse_book_id(&request.book_id)?,
        date: request.date,
        pages_read: request.pages_read,
        summary: request.summary,
    };

    let result = state.record_handler().handle(command).await?;
    let status = if result.merged {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((status, Json(result.session.into())))
}

/// GET /readingsessions
pub async fn list_sessions(
    State(state): State<SessionsAppState>,
    Query(params): Query<ListSessionsParams>,
) -> Result<Json<Vec<SessionResponse>>, ApiError> {
    let book_id = params.book_id.as_deref().map(parse_book_id).transpose()?;

    let sessions = state
        .list_handler()
        .handle(ListSessionsQuery { book_id })
        .await?;
    Ok(Json(sessions.into_iter().map(Into::into).collect()))
}

/// GET /readingsessions/:id
pub async fn get_session(
    State(state): State<SessionsAppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state.get_handler().handle(parse_session_id(&id)?).await?;
    Ok(Json(session.into()))
}

/// PUT /readingsessions/:id
pub async fn update_session(
    State(state): State<SessionsAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateSessionRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let command = UpdateSessionCommand {
        id: parse_session_id(&id)?,
        date: request.date,
        pages_read: request.pages_read,
        summary: request.summary,
    };

    let session = state.update_handler().handle(command).await?;
    Ok(Json(session.into()))
}

/// DELETE /readingsessions/:id
pub async fn delete_session(
    State(state): State<SessionsAppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_handler()
        .handle(parse_session_id(&id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
