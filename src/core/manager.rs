use crate::domain::model::Book;
use crate::domain::ports::{BookDisplay, BookStore};
use crate::utils::error::Result;

/// Coordinates a book store and a display, both injected by the caller.
pub struct LibraryManager<S: BookStore, D: BookDisplay> {
    store: S,
    display: D,
}

impl<S: BookStore, D: BookDisplay> LibraryManager<S, D> {
    pub fn new(store: S, display: D) -> Self {
        Self { store, display }
    }

    pub fn add_book(&mut self, title: &str, author: &str, year: &str) {
        tracing::debug!("Adding book '{}'", title);
        self.store.add_book(Book::new(title, author, year));
    }

    /// Returns `false` without touching the store when no book has `title`.
    pub fn remove_book(&mut self, title: &str) -> bool {
        if !self.store.book_exists(title) {
            tracing::debug!("Book '{}' not present, nothing removed", title);
            return false;
        }
        self.store.remove_book(title);
        true
    }

    pub fn show_books(&mut self) -> Result<()> {
        let books = self.store.get_all_books();
        self.display.display_books(books)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
