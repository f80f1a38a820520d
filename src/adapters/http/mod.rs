//! HTTP adapters - REST API implementations.
//!
//! Each route family has its own module with DTOs, handlers, and routes.

pub mod authors;
pub mod books;
pub mod error;
pub mod goals;
pub mod search;
pub mod sessions;
pub mod stats;
pub mod tags;

// Re-export key types for convenience
pub use authors::{author_routes, AuthorsAppState};
pub use books::{book_routes, BooksAppState};
pub use error::{ApiError, ErrorResponse};
pub use goals::{goal_routes, GoalsAppState};
pub use search::{search_routes, SearchAppState};
pub use sessions::{session_routes, SessionsAppState};
pub use stats::{stats_routes, StatsAppState};
pub use tags::{tag_routes, TagsAppState};
