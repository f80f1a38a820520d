//! Command and query handlers.
//!
//! Each handler holds its ports behind `Arc<dyn _>` and exposes a single
//! `handle` method (the statistics handler exposes one per report). Write
//! handlers invalidate the affected cache categories immediately after a
//! successful write.

pub mod authors;
pub mod books;
pub mod goals;
pub mod search;
pub mod sessions;
pub mod stats;
pub mod tags;

#[cfg(test)]
pub(crate) mod test_support;

pub use authors::{
    CreateAuthorCommand, CreateAuthorHandler, DeleteAuthorHandler, GetAuthorHandler,
    GetAuthorQuery, ListAuthorsHandler, UpdateAuthorCommand, UpdateAuthorHandler,
};
pub use books::{
    CreateBookCommand, CreateBookHandler, DeleteBookHandler, GetBookHandler, GetBookQuery,
    ListBooksHandler, UpdateBookCommand, UpdateBookHandler,
};
pub use goals::{
    CreateGoalCommand, CreateGoalHandler, DeleteGoalHandler, GetGoalForBookHandler,
    GetGoalForBookQuery, ListGoalsHandler, UpdateGoalCommand, UpdateGoalHandler,
};
pub use search::{SearchHandler, SearchResults};
pub use sessions::{
    DeleteSessionHandler, GetSessionHandler, ListSessionsHandler, ListSessionsQuery,
    RecordSessionCommand, RecordSessionHandler, RecordSessionResult, UpdateSessionCommand,
    UpdateSessionHandler,
};
pub use stats::{HeatmapHandler, StatisticsHandler, StreakHandler};
pub use tags::{
    AssignTagHandler, CreateTagCommand, CreateTagHandler, DeleteTagHandler, GetTagHandler,
    GetTagQuery, ListTagsHandler, TagAssignmentCommand, UpdateTagCommand, UpdateTagHandler,
};
