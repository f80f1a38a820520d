//! Reading goal entity.

use crate::domain::foundation::{BookId, DomainError, GoalId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Three ascending page-count thresholds attached to one book.
///
/// # Invariants
///
/// - `low_goal < medium_goal < high_goal`, all positive
/// - at most one goal exists per book (enforced by the goal handlers)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingGoal {
    id: GoalId,
    book_id: BookId,
    low_goal: i32,
    medium_goal: i32,
    high_goal: i32,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ReadingGoal {
    /// Create a new reading goal.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` unless 0 < low < medium < high
    pub fn new(
        id: GoalId,
        book_id: BookId,
        low_goal: i32,
        medium_goal: i32,
        high_goal: i32,
    ) -> Result<Self, DomainError> {
        Self::validate_tiers(low_goal, medium_goal, high_goal)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            book_id,
            low_goal,
            medium_goal,
            high_goal,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a goal from persistence (no validation).
    pub fn reconstitute(
        id: GoalId,
        book_id: BookId,
        low_goal: i32,
        medium_goal: i32,
        high_goal: i32,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            book_id,
            low_goal,
            medium_goal,
            high_goal,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &GoalId {
        &self.id
    }

    pub fn book_id(&self) -> &BookId {
        &self.book_id
    }

    pub fn low_goal(&self) -> i32 {
        self.low_goal
    }

    pub fn medium_goal(&self) -> i32 {
        self.medium_goal
    }

    pub fn high_goal(&self) -> i32 {
        self.high_goal
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Replace the goal thresholds.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` unless 0 < low < medium < high
    pub fn set_tiers(
        &mut self,
        low_goal: i32,
        medium_goal: i32,
        high_goal: i32,
    ) -> Result<(), DomainError> {
        Self::validate_tiers(low_goal, medium_goal, high_goal)?;

        self.low_goal = low_goal;
        self.medium_goal = medium_goal;
        self.high_goal = high_goal;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    fn validate_tiers(low: i32, medium: i32, high: i32) -> Result<(), DomainError> {
        if low <= 0 {
            return Err(ValidationError::not_positive("low_goal", low).into());
        }
        if !(low < medium && medium < high) {
            return Err(ValidationError::invalid_value(
                "goals",
                "must be strictly increasing: low < medium < high",
            )
            .into());
        }
        Ok(())
    }
}
