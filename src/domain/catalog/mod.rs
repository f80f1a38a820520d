//! Catalog domain module: books, authors, tags.

mod author;
mod book;
mod tag;

pub use author::Author;
pub use book::Book;
pub use tag::{Tag, TagAssignment};
