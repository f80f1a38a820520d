//! Foundation value objects shared across the domain.

mod errors;
mod ids;
mod reading_status;
mod rounding;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AuthorId, BookId, GoalId, SessionId, TagId};
pub use reading_status::{ReadingStatus, StatusMetadata, ALL_STATUSES};
pub use rounding::round2;
pub use timestamp::Timestamp;
