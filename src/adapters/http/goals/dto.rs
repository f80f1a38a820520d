//! HTTP DTOs for reading-goal endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::reading::ReadingGoal;

/// Request to create a goal for a book.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    pub book_id: String,
    pub low_goal: i32,
    pub medium_goal: i32,
    pub high_goal: i32,
}

/// Request to replace a goal's thresholds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalRequest {
    pub low_goal: i32,
    pub medium_goal: i32,
    pub high_goal: i32,
}

/// Goal view for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalResponse {
    pub id: String,
    pub book_id: String,
    pub low_goal: i32,
    pub medium_goal: i32,
    pub high_goal: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ReadingGoal> for GoalResponse {
    fn from(goal: ReadingGoal) -> Self {
        Self {
            id: goal.id().to_string(),
            book_id: goal.book_id().to_string(),
            low_goal: goal.low_goal(),
            medium_goal: goal.medium_goal(),
            high_goal: goal.high_goal(),
            created_at: goal.created_at().as_datetime().to_rfc3339(),
            updated_at: goal.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{BookId, GoalId};

    #[test]
    fn create_goal_request_deserializes() {
        let json = r#"{"bookId": "b", "lowGoal": 100, "mediumGoal": 200, "highGoal": 300}"#;
        let req: CreateGoalRequest = serde_json::from_str(json).unwrap();
        assert_eq!((req.low_goal, req.medium_goal, req.high_goal), (100, 200, 300));
    }

    #[test]
    fn goal_response_conversion() {
        let goal = ReadingGoal::new(GoalId::new(), BookId::new(), 100, 200, 300).unwrap();
        let response: GoalResponse = goal.clone().into();
        assert_eq!(response.id, goal.id().to_string());
        assert_eq!(response.high_goal, 300);
    }
}
