//! The physical library holding record

use serde::{Deserialize, Serialize};

/// A book held on a shelf in a lending library.
///
/// Plain immutable value record: all fields are set at construction, equality
/// is structural, and no field is validated beyond its type. The shelf number
/// is only meaningful within the owning library; when a book is reconstructed
/// from an online record the number is re-derived, not preserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Human-readable name of the lending library; may contain spaces
    pub library_name: String,

    /// Physical shelf location
    pub shelf_number: u32,

    /// Whether the physical copy is currently lendable
    pub is_available: bool,
}

impl Book {
    /// Create a new book record
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        library_name: impl Into<String>,
        shelf_number: u32,
        is_available: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            library_name: library_name.into(),
            shelf_number,
            is_available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new("Test Title", "Test Author", "Main Library", 1, true);
        assert_eq!(book.title, "Test Title");
        assert_eq!(book.author, "Test Author");
        assert_eq!(book.library_name, "Main Library");
        assert_eq!(book.shelf_number, 1);
        assert!(book.is_available);
    }

    #[test]
    fn test_structural_equality() {
        let a = Book::new("T", "A", "L", 3, false);
        let b = Book::new("T", "A", "L", 3, false);
        assert_eq!(a, b);
        assert_ne!(a, Book::new("T", "A", "L", 4, false));
    }

    #[test]
    fn test_book_serialization() {
        let book = Book::new("Serialization Test", "Author", "East Branch", 12, false);
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains("\"libraryName\":\"East Branch\""));
        assert!(json.contains("\"shelfNumber\":12"));
        assert!(json.contains("\"isAvailable\":false"));

        let deserialized: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, deserialized);
    }
}
