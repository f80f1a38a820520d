//! HTTP DTOs for reading-session endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::reading::ReadingSession;

/// Request to record pages read.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSessionRequest {
    pub book_id: String,
    pub date: NaiveDate,
    pub pages_read: i32,
    pub summary: Option<String>,
}

/// Request to update a session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionRequest {
    pub date: NaiveDate,
    pub pages_read: i32,
    pub summary: Option<String>,
}

/// Query parameters for listing sessions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSessionsParams {
    pub book_id: Option<String>,
}

/// Session view for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: String,
    pub book_id: String,
    pub date: NaiveDate,
    pub pages_read: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ReadingSession> for SessionResponse {
    fn from(session: ReadingSession) -> Self {
        Self {
            id: session.id().to_string(),
            book_id: session.book_id().to_string(),
            date: session.date(),
            pages_read: session.pages_read(),
            summary: session.summary().map(String::from),
            created_at: session.created_at().as_datetime().to_rfc3339(),
            updated_at: session.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{BookId, SessionId, Timestamp};
    use chrono::Duration;

    #[test]
    fn record_session_request_deserializes() {
        let json = r#"{"bookId": "b", "date": "2024-05-01", "pagesRead": 42}"#;
        let req: RecordSessionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.pages_read, 42);
        assert!(req.summary.is_none());
    }

    #[test]
    fn session_response_conversion() {
        let date = Timestamp::today_utc() - Duration::days(1);
        let session =
            ReadingSession::new(SessionId::new(), BookId::new(), date, 42, None).unwrap();
        let response: SessionResponse = session.clone().into();
        assert_eq!(response.id, session.id().to_string());
        assert_eq!(response.date, date);
        assert_eq!(response.pages_read, 42);
    }
}
