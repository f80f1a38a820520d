//! Reading-session handlers.
//!
//! The create path merges same-day duplicates; the update path replaces
//! and conflict-checks. See the individual handlers for the rule.

mod delete_session;
mod list_sessions;
mod record_session;
mod update_session;

pub use delete_session::DeleteSessionHandler;
pub use list_sessions::{GetSessionHandler, ListSessionsHandler, ListSessionsQuery};
pub use record_session::{RecordSessionCommand, RecordSessionHandler, RecordSessionResult};
pub use update_session::{UpdateSessionCommand, UpdateSessionHandler};
