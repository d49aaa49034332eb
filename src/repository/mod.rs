//! Repository layer over the in-memory book store

pub mod books;
pub mod seed;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::book::{Book, BookPage, MutationResult};
use books::BookStore;

/// Shared handle to the book store.
///
/// Every call holds the lock for exactly one store operation, so each
/// operation is observed atomically by concurrent handlers.
#[derive(Clone)]
pub struct Repository {
    books: Arc<Mutex<BookStore>>,
}

impl Repository {
    /// Create a repository owning the given store
    pub fn new(store: BookStore) -> Self {
        Self {
            books: Arc::new(Mutex::new(store)),
        }
    }

    pub fn books_list(&self, page: u32, size: u32, title: Option<&str>, author: Option<&str>) -> BookPage {
        self.books.lock().list(page, size, title, author)
    }

    pub fn books_get(&self, id: &str) -> Option<Book> {
        self.books.lock().get(id)
    }

    pub fn books_insert(&self, title: &str, author: &str) -> MutationResult {
        self.books.lock().insert(title, author)
    }

    pub fn books_update(&self, id: &str, title: &str, author: &str) -> MutationResult {
        self.books.lock().update(id, title, author)
    }

    pub fn books_delete(&self, id: &str) -> MutationResult {
        self.books.lock().delete(id)
    }

    pub fn books_count(&self) -> usize {
        self.books.lock().len()
    }
}
