//! Data models for Bookshelf

pub mod book;

// Re-export commonly used types
pub use book::{Book, BookPage, BookQuery, MutationResult, ResultCode};
