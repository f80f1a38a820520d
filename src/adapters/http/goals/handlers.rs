//! HTTP handlers for reading-goal endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::{
    CreateGoalCommand, CreateGoalHandler, DeleteGoalHandler, GetGoalForBookHandler,
    GetGoalForBookQuery, ListGoalsHandler, UpdateGoalCommand, UpdateGoalHandler,
};
use crate::domain::foundation::{BookId, GoalId};
use crate::ports::{BookRepository, GoalRepository, ResponseCache};

use super::dto::{CreateGoalRequest, GoalResponse, UpdateGoalRequest};

/// Shared state for the goal endpoints.
#[derive(Clone)]
pub struct GoalsAppState {
    pub goals: Arc<dyn GoalRepository>,
    pub books: Arc<dyn BookRepository>,
    pub cache: Arc<dyn ResponseCache>,
}

impl GoalsAppState {
    fn create_handler(&self) -> CreateGoalHandler {
        CreateGoalHandler::new(self.goals.clone(), self.books.clone(), self.cache.clone())
    }

    fn get_for_book_handler(&self) -> GetGoalForBookHandler {
        GetGoalForBookHandler::new(self.goals.clone())
    }

    fn list_handler(&self) -> ListGoalsHandler {
        ListGoalsHandler::new(self.goals.clone())
    }

    fn update_handler(&self) -> UpdateGoalHandler {
        UpdateGoalHandler::new(self.goals.clone(), self.cache.clone())
    }

    fn delete_handler(&self) -> DeleteGoalHandler {
        DeleteGoalHandler::new(self.goals.clone(), self.cache.clone())
    }
}

fn parse_goal_id(raw: &str) -> Result<GoalId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid goal ID format"))
}

fn parse_book_id(raw: &str) -> Result<BookId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid book ID format"))
}

/// POST /readinggoals
pub async fn create_goal(
    State(state): State<GoalsAppState>,
    Json(request): Json<CreateGoalRequest>,
) -> Result<(StatusCode, Json<GoalResponse>), ApiError> {
    let command = CreateGoalCommand {
        book_id: parse_book_id(&request.book_id)?,
        low_goal: request.low_goal,
        medium_goal: request.medium_goal,
        high_goal: request.high_goal,
    };

    let goal = state.create_handler().handle(command).await?;
    Ok((StatusCode::CREATED, Json(goal.into())))
}

/// GET /readinggoals
pub async fn list_goals(
    State(state): State<GoalsAppState>,
) -> Result<Json<Vec<GoalResponse>>, ApiError> {
    let goals = state.list_handler().handle().await?;
    Ok(Json(goals.into_iter().map(Into::into).collect()))
}

/// GET /readinggoals/book/:book_id
pub async fn get_goal_for_book(
    State(state): State<GoalsAppState>,
    Path(book_id): Path<String>,
) -> Result<Json<GoalResponse>, ApiError> {
    let goal = state
        .get_for_book_handler()
        .handle(GetGoalForBookQuery {
            book_id: parse_book_id(&book_id)?,
        })
        .await?;
    Ok(Json(goal.into()))
}

/// PUT /readinggoals/:id
pub async fn update_goal(
    State(state): State<GoalsAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateGoalRequest>,
) -> Result<Json<GoalResponse>, ApiError> {
    let command = UpdateGoalCommand {
        id: parse_goal_id(&id)?,
        low_goal: request.low_goal,
        medium_goal: request.medium_goal,
        high_goal: request.high_goal,
    };

    let goal = state.update_handler().handle(command).await?;
    Ok(Json(goal.into()))
}

/// DELETE /readinggoals/:id
pub async fn delete_goal(
    State(state): State<GoalsAppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.delete_handler().handle(parse_goal_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
