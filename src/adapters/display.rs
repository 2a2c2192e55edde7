use crate::domain::model::Book;
use crate::domain::ports::{BookDisplay, Output};
use crate::utils::error::Result;

pub const EMPTY_LIBRARY_MESSAGE: &str = "No books in the library.";

/// Renders books one per line into any [`Output`].
#[derive(Debug)]
pub struct TextBookDisplay<O: Output> {
    output: O,
}

impl<O: Output> TextBookDisplay<O> {
    pub fn new(output: O) -> Self {
        Self { output }
    }
}

impl<O: Output> BookDisplay for TextBookDisplay<O> {
    fn display_books(&mut self, books: &[Book]) -> Result<()> {
        if books.is_empty() {
            return self.output.emit(EMPTY_LIBRARY_MESSAGE);
        }

        for book in books {
            self.output.emit(&book.to_string())?;
        }
        Ok(())
    }
}
