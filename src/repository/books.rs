//! In-memory book store.
//!
//! The store owns an ordered `Vec<Book>`. Newly inserted books go to the
//! front, so an unfiltered listing returns the most recent additions first.
//! `(title, author)` is unique across the store; ids are never reused.
//!
//! Deleting or updating an unknown id is a silent no-op that still reports
//! success.

use uuid::Uuid;

use crate::models::book::{Book, BookPage, MutationResult};

/// Source of fresh book identifiers
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs in hyphenated form
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

pub struct BookStore {
    books: Vec<Book>,
    ids: Box<dyn IdGenerator>,
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore {
    /// Create an empty store generating UUID ids
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Create a store holding `books` in the given order
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books,
            ids: Box::new(UuidGenerator),
        }
    }

    /// Replace the id generator
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Filter by exact title and/or author, then take one page.
    ///
    /// An empty filter string places no constraint. `total` counts every
    /// match before pagination. A page past the end yields an empty list.
    pub fn list(&self, page: u32, size: u32, title: Option<&str>, author: Option<&str>) -> BookPage {
        let title = title.filter(|t| !t.is_empty());
        let author = author.filter(|a| !a.is_empty());

        let matches: Vec<&Book> = self
            .books
            .iter()
            .filter(|b| title.map_or(true, |t| b.title == t))
            .filter(|b| author.map_or(true, |a| b.author == a))
            .collect();

        let size = size as usize;
        let offset = (page.max(1) as usize - 1).saturating_mul(size);

        BookPage {
            total: matches.len(),
            book_list: matches
                .into_iter()
                .skip(offset)
                .take(size)
                .cloned()
                .collect(),
        }
    }

    /// Get a book by id
    pub fn get(&self, id: &str) -> Option<Book> {
        self.books.iter().find(|b| b.id == id).cloned()
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Insert a new book at the front unless the title/author pair exists
    pub fn insert(&mut self, title: &str, author: &str) -> MutationResult {
        if self.books.iter().any(|b| b.matches(title, author)) {
            return MutationResult::conflict();
        }

        let book = Book::new(self.ids.next_id(), title, author);
        self.books.insert(0, book);
        MutationResult::success()
    }

    /// Remove the book with `id`, if any
    pub fn delete(&mut self, id: &str) -> MutationResult {
        if let Some(pos) = self.books.iter().position(|b| b.id == id) {
            self.books.remove(pos);
        }
        MutationResult::success()
    }

    /// Overwrite title and author in place.
    ///
    /// Conflicts only with *other* books, so re-saving a book unchanged
    /// succeeds.
    pub fn update(&mut self, id: &str, title: &str, author: &str) -> MutationResult {
        if self
            .books
            .iter()
            .any(|b| b.id != id && b.matches(title, author))
        {
            return MutationResult::conflict();
        }

        if let Some(book) = self.books.iter_mut().find(|b| b.id == id) {
            book.title = title.to_string();
            book.author = author.to_string();
        }
        MutationResult::success()
    }
}
