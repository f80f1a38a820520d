//! HTTP handlers for book endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::{
    CreateBookCommand, CreateBookHandler, DeleteBookHandler, GetBookHandler, GetBookQuery,
    ListBooksHandler, UpdateBookCommand, UpdateBookHandler,
};
use crate::domain::foundation::{AuthorId, BookId};
use crate::ports::{AuthorRepository, BookRepository, ResponseCache};

use super::dto::{BookResponse, CreateBookRequest, ListBooksParams, UpdateBookRequest};

/// Shared state for the book endpoints.
#[derive(Clone)]
pub struct BooksAppState {
    pub books: Arc<dyn BookRepository>,
    pub authors: Arc<dyn AuthorRepository>,
    pub cache: Arc<dyn ResponseCache>,
}

impl BooksAppState {
    fn create_handler(&self) -> CreateBookHandler {
        CreateBookHandler::new(self.books.clone(), self.authors.clone(), self.cache.clone())
    }

    fn get_handler(&self) -> GetBookHandler {
        GetBookHandler::new(self.books.clone())
    }

    fn list_handler(&self) -> ListBooksHandler {
        ListBooksHandler::new(self.books.clone())
    }

    fn update_handler(&self) -> UpdateBookHandler {
        UpdateBookHandler::new(self.books.clone(), self.authors.clone(), self.cache.clone())
    }

    fn delete_handler(&self) -> DeleteBookHandler {
        DeleteBookHandler::new(self.books.clone(), self.cache.clone())
    }
}

fn parse_book_id(raw: &str) -> Result<BookId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid book ID format"))
}

fn parse_author_id(raw: &str) -> Result<AuthorId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid author ID format"))
}

/// POST /books
pub async fn create_book(
    State(state): State<BooksAppState>,
    Json(request): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let command = CreateBookCommand {
        author_id: parse_author_id(&request.author_id)?,
        title: request.title,
        total_pages: request.total_pages,
    };

    let book = state.create_handler().handle(command).await?;
    Ok((StatusCode::CREATED, Json(book.into())))
}

/// GET /books
pub async fn list_books(
    State(state): State<BooksAppState>,
    Query(params): Query<ListBooksParams>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let author_id = params
        .author_id
        .as_deref()
        .map(parse_author_id)
        .transpose()?;

    let books = state.list_handler().handle(author_id).await?;
    Ok(Json(books.into_iter().map(Into::into).collect()))
}

/// GET /books/:id
pub async fn get_book(
    State(state): State<BooksAppState>,
    Path(id): Path<String>,
) -> Result<Json<BookResponse>, ApiError> {
    let query = GetBookQuery {
        id: parse_book_id(&id)?,
    };

    let book = state.get_handler().handle(query).await?;
    Ok(Json(book.into()))
}

/// PUT /books/:id
pub async fn update_book(
    State(state): State<BooksAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateBookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let command = UpdateBookCommand {
        id: parse_book_id(&id)?,
        author_id: parse_author_id(&request.author_id)?,
        title: request.title,
        total_pages: request.total_pages,
        status: request.status,
        started_reading_date: request.started_reading_date,
        completed_date: request.completed_date,
        summary: request.summary,
    };

    let book = state.update_handler().handle(command).await?;
    Ok(Json(book.into()))
}

/// DELETE /books/:id
pub async fn delete_book(
    State(state): State<BooksAppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.delete_handler().handle(parse_book_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
