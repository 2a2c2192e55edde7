use crate::domain::model::{Book, Vehicle};
use crate::utils::error::Result;

/// Where demo messages end up: a terminal, a log, a test buffer.
pub trait Output {
    fn emit(&mut self, message: &str) -> Result<()>;
}

pub trait BookStore {
    fn add_book(&mut self, book: Book);
    /// Drops every book whose title matches exactly, duplicates included.
    fn remove_book(&mut self, title: &str);
    fn get_all_books(&self) -> &[Book];
    fn book_exists(&self, title: &str) -> bool;
}

pub trait BookDisplay {
    fn display_books(&mut self, books: &[Book]) -> Result<()>;
}

pub trait VehicleFactory {
    fn create_car(&self, make: &str, model: &str) -> Vehicle;
    fn create_motorcycle(&self, make: &str, model: &str) -> Vehicle;
}
