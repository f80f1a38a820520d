//! HTTP DTOs for book endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::Book;
use crate::domain::foundation::ReadingStatus;

/// Request to create a new book.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    pub author_id: String,
    pub title: String,
    pub total_pages: i32,
}

/// Request to update a book.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    pub author_id: String,
    pub title: String,
    pub total_pages: i32,
    pub status: ReadingStatus,
    pub started_reading_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub summary: Option<String>,
}

/// Query parameters for listing books.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBooksParams {
    pub author_id: Option<String>,
}

/// Book view for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub total_pages: i32,
    pub status: ReadingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_reading_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id().to_string(),
            author_id: book.author_id().to_string(),
            title: book.title().to_string(),
            total_pages: book.total_pages(),
            status: book.status(),
            started_reading_date: book.started_reading_date(),
            completed_date: book.completed_date(),
            summary: book.summary().map(String::from),
            created_at: book.created_at().as_datetime().to_rfc3339(),
            updated_at: book.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AuthorId, BookId};

    #[test]
    fn create_book_request_deserializes() {
        let json = r#"{"authorId": "a", "title": "Dune", "totalPages": 412}"#;
        let req: CreateBookRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.title, "Dune");
        assert_eq!(req.total_pages, 412);
    }

    #[test]
    fn book_response_conversion() {
        let book = Book::new(BookId::new(), AuthorId::new(), "Dune".to_string(), 412).unwrap();
        let response: BookResponse = book.clone().into();
        assert_eq!(response.id, book.id().to_string());
        assert_eq!(response.title, "Dune");
        assert_eq!(response.status, ReadingStatus::NotReading);
        assert!(response.started_reading_date.is_none());
    }
}
