use crate::domain::model::Book;
use crate::domain::ports::BookStore;

/// In-memory book shelf. Keeps insertion order and allows duplicate titles.
#[derive(Debug, Clone, Default)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl BookStore for Library {
    fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    fn remove_book(&mut self, title: &str) {
        self.books.retain(|book| book.title != title);
    }

    fn get_all_books(&self) -> &[Book] {
        &self.books
    }

    fn book_exists(&self, title: &str) -> bool {
        self.books.iter().any(|book| book.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut library = Library::new();
        library.add_book(Book::new("B", "x", "2001"));
        library.add_book(Book::new("A", "y", "1999"));

        let titles: Vec<&str> = library
            .get_all_books()
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_book_exists_is_exact_and_case_sensitive() {
        let mut library = Library::new();
        library.add_book(Book::new("Dune", "Herbert,F", "1965"));

        assert!(library.book_exists("Dune"));
        assert!(!library.book_exists("dune"));
        assert!(!library.book_exists("Dune "));
        assert!(!library.book_exists("Dun"));
    }

    #[test]
    fn test_remove_drops_every_match_and_keeps_the_rest_in_order() {
        let mut library = Library::new();
        library.add_book(Book::new("Dune", "Herbert,F", "1965"));
        library.add_book(Book::new("Emma", "Austen", "1815"));
        library.add_book(Book::new("Dune", "Other", "1999"));
        library.add_book(Book::new("Ulysses", "Joyce", "1922"));
        library.add_book(Book::new("Beloved", "Morrison", "1987"));

        library.remove_book("Dune");

        assert_eq!(
            library.get_all_books(),
            &[
                Book::new("Emma", "Austen", "1815"),
                Book::new("Ulysses", "Joyce", "1922"),
                Book::new("Beloved", "Morrison", "1987"),
            ]
        );
    }

    #[test]
    fn test_remove_missing_title_is_noop() {
        let mut library = Library::new();
        library.add_book(Book::new("Emma", "Austen", "1815"));
        library.add_book(Book::new("Beloved", "Morrison", "1987"));
        library.add_book(Book::new("Ulysses", "Joyce", "1922"));
        let before = library.get_all_books().to_vec();

        library.remove_book("Dune");
        library.remove_book("emma");

        assert_eq!(library.len(), 3);
        assert_eq!(library.get_all_books(), before.as_slice());
    }
}
