//! Book (catalog record) model and API payloads.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Message returned when a title/author pair is already catalogued
pub const DUPLICATE_BOOK_MESSAGE: &str = "Book information already exists";

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Opaque identifier assigned at creation
    pub id: String,
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
        }
    }

    /// Whether this book carries exactly the given title/author pair
    pub fn matches(&self, title: &str, author: &str) -> bool {
        self.title == title && self.author == author
    }
}

/// Book list query parameters (GET /books)
#[derive(Debug, Clone, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Page number, starting at 1
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: u32,
    /// Page size
    #[validate(range(min = 1, message = "size must be at least 1"))]
    pub size: u32,
    /// Exact title filter
    pub title: Option<String>,
    /// Exact author filter
    pub author: Option<String>,
}

/// One page of books plus the number of matches before pagination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookPage {
    pub total: usize,
    #[serde(rename = "bookList")]
    pub book_list: Vec<Book>,
}

/// Title/author pair supplied on creation
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BookInput {
    pub title: String,
    pub author: String,
}

/// Create book request
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddBookRequest {
    pub post: BookInput,
}

/// Update book request
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct EditBookRequest {
    pub title: String,
    pub author: String,
}

/// Outcome code carried by every mutation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ResultCode {
    #[serde(rename = "1")]
    Success,
    #[serde(rename = "-1")]
    Conflict,
}

/// Mutation result (insert, update, delete)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MutationResult {
    pub code: ResultCode,
    pub message: String,
}

impl MutationResult {
    pub fn success() -> Self {
        Self {
            code: ResultCode::Success,
            message: String::new(),
        }
    }

    pub fn conflict() -> Self {
        Self {
            code: ResultCode::Conflict,
            message: DUPLICATE_BOOK_MESSAGE.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == ResultCode::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mutation_result_wire_codes() {
        assert_eq!(
            serde_json::to_value(MutationResult::success()).unwrap(),
            json!({ "code": "1", "message": "" })
        );
        assert_eq!(
            serde_json::to_value(MutationResult::conflict()).unwrap(),
            json!({ "code": "-1", "message": DUPLICATE_BOOK_MESSAGE })
        );
    }

    #[test]
    fn test_book_page_uses_book_list_key() {
        let page = BookPage {
            total: 1,
            book_list: vec![Book::new("1", "Jurassic Park", "Michael Crichton")],
        };
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["bookList"][0]["title"], "Jurassic Park");
    }

    #[test]
    fn test_book_query_rejects_zero_page_and_size() {
        let query = BookQuery { page: 0, size: 10, title: None, author: None };
        assert!(query.validate().is_err());

        let query = BookQuery { page: 1, size: 0, title: None, author: None };
        assert!(query.validate().is_err());

        let query = BookQuery { page: 1, size: 1, title: None, author: None };
        assert!(query.validate().is_ok());
    }
}
