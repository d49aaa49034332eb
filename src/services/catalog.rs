//! Catalog service: one method per book operation

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPage, BookQuery, MutationResult},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List books with exact-match filters and pagination
    pub fn list_books(&self, query: &BookQuery) -> BookPage {
        let page = self.repository.books_list(
            query.page,
            query.size,
            query.title.as_deref(),
            query.author.as_deref(),
        );
        tracing::debug!(
            page = query.page,
            size = query.size,
            total = page.total,
            "Catalog list"
        );
        page
    }

    /// Get a book by id
    pub fn get_book(&self, id: &str) -> AppResult<Book> {
        tracing::debug!(id, "Catalog get");
        self.repository
            .books_get(id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Add a book unless the title/author pair is already catalogued
    pub fn add_book(&self, title: &str, author: &str) -> MutationResult {
        let result = self.repository.books_insert(title, author);
        if result.is_success() {
            tracing::info!(title, author, "Catalog add: book created");
        } else {
            tracing::warn!(title, author, "Catalog add: duplicate book rejected");
        }
        result
    }

    /// Delete a book; unknown ids are accepted silently
    pub fn delete_book(&self, id: &str) -> MutationResult {
        tracing::info!(id, "Catalog delete");
        self.repository.books_delete(id)
    }

    /// Edit a book's title and author
    pub fn edit_book(&self, id: &str, title: &str, author: &str) -> MutationResult {
        let result = self.repository.books_update(id, title, author);
        if result.is_success() {
            tracing::info!(id, title, author, "Catalog edit: book updated");
        } else {
            tracing::warn!(id, title, author, "Catalog edit: duplicate book rejected");
        }
        result
    }

    /// Number of books currently catalogued
    pub fn count_books(&self) -> usize {
        self.repository.books_count()
    }
}
