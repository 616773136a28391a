//! # Inventory Store
//!
//! The [`Inventory`] owns the ordered book collection and mirrors it to a
//! JSON file after every mutation. The backing path is supplied at
//! construction, so multiple stores can coexist (each against its own
//! file) without any process-global setup.
//!
//! A backing file that exists but cannot be parsed does **not** abort the
//! program: the store logs a warning and continues with an empty
//! collection. This degrade-to-empty policy is deliberate; the next save
//! overwrites the corrupt file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tally_core::catalog::Book;
//! use tally_core::inventory::Inventory;
//! use std::path::Path;
//!
//! let mut inv = Inventory::open(Path::new("data/books.json"))?;
//! inv.add(Book::new("Dune", "Frank Herbert", "978-0441013593"))?;
//! inv.save()?;
//! inv.issue_by_isbn("978-0441013593")?; // persists on success
//! # Ok::<(), tally_core::errors::TallyError>(())
//! ```

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::catalog::Book;
use crate::errors::{TallyError, TallyResult};
use crate::file_io::{load_catalog, save_catalog};

/// Ordered book collection mirrored to a single JSON file.
#[derive(Debug)]
pub struct Inventory {
    path: PathBuf,
    books: Vec<Book>,
}

impl Inventory {
    /// Open the inventory backed by `path`.
    ///
    /// - Missing file: starts empty and immediately persists, creating the
    ///   file (and parent directories).
    /// - Unreadable or unparseable file: logs a warning and starts empty
    ///   without touching the file until the next save.
    /// - Otherwise: loads books in file order.
    pub fn open(path: impl Into<PathBuf>) -> TallyResult<Self> {
        let path = path.into();

        if !path.exists() {
            let inv = Inventory {
                path,
                books: Vec::new(),
            };
            inv.save()?;
            info!(path = %inv.path.display(), "created empty catalog");
            return Ok(inv);
        }

        let books = match load_catalog(&path) {
            Ok(books) => {
                info!(path = %path.display(), count = books.len(), "loaded catalog");
                books
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load catalog, starting empty");
                Vec::new()
            }
        };

        Ok(Inventory { path, books })
    }

    /// Backing file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of books in the catalog.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True iff the catalog holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Persist the full catalog, overwriting the backing file.
    pub fn save(&self) -> TallyResult<()> {
        save_catalog(&self.books, &self.path)
    }

    /// Append a book, enforcing ISBN uniqueness.
    ///
    /// On a duplicate ISBN the catalog is left unchanged. Does not
    /// persist; call [`Inventory::save`] afterwards.
    pub fn add(&mut self, book: Book) -> TallyResult<()> {
        if self.books.iter().any(|b| b.isbn == book.isbn) {
            warn!(isbn = %book.isbn, "rejected duplicate ISBN");
            return Err(TallyError::duplicate_isbn(&book.isbn));
        }
        info!(isbn = %book.isbn, title = %book.title, "added book");
        self.books.push(book);
        Ok(())
    }

    /// First book whose ISBN matches exactly. Linear scan; ISBNs are
    /// unique so at most one book matches.
    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        let isbn = isbn.trim();
        self.books.iter().find(|b| b.isbn == isbn)
    }

    fn find_by_isbn_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        let isbn = isbn.trim();
        self.books.iter_mut().find(|b| b.isbn == isbn)
    }

    /// Case-insensitive substring match against titles, in catalog order.
    /// A query matching nothing yields an empty list, not an error.
    pub fn search_by_title(&self, title_substr: &str) -> Vec<&Book> {
        let needle = title_substr.trim().to_lowercase();
        self.books
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// One formatted line per book, in catalog order.
    pub fn list_all(&self) -> Vec<String> {
        self.books.iter().map(|b| b.to_string()).collect()
    }

    /// Issue the book with the given ISBN and persist the catalog.
    ///
    /// Fails with `BookNotFound` or `AlreadyIssued`; on failure nothing is
    /// written.
    pub fn issue_by_isbn(&mut self, isbn: &str) -> TallyResult<()> {
        let book = self
            .find_by_isbn_mut(isbn)
            .ok_or_else(|| TallyError::book_not_found(isbn.trim()))?;
        book.issue()?;
        info!(isbn = %isbn.trim(), "issued book");
        self.save()
    }

    /// Return the book with the given ISBN and persist the catalog.
    ///
    /// Fails with `BookNotFound` or `NotIssued`; on failure nothing is
    /// written.
    pub fn return_by_isbn(&mut self, isbn: &str) -> TallyResult<()> {
        let book = self
            .find_by_isbn_mut(isbn)
            .ok_or_else(|| TallyError::book_not_found(isbn.trim()))?;
        book.give_back()?;
        info!(isbn = %isbn.trim(), "returned book");
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BookStatus;
    use std::env::temp_dir;
    use std::fs;

    fn temp_inventory(name: &str) -> (Inventory, PathBuf) {
        let path = temp_dir().join(format!("tally_test_inv_{}.json", name));
        let _ = fs::remove_file(&path);
        let inv = Inventory::open(&path).unwrap();
        (inv, path)
    }

    #[test]
    fn test_open_missing_file_creates_empty_catalog() {
        let (inv, path) = temp_inventory("create");
        assert!(inv.is_empty());
        assert!(path.exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_add_distinct_isbns_all_retrievable() {
        let (mut inv, path) = temp_inventory("distinct");
        for i in 0..5 {
            inv.add(Book::new(format!("Book {}", i), "Author", format!("{}", i)))
                .unwrap();
        }
        assert_eq!(inv.len(), 5);
        for i in 0..5 {
            assert!(inv.find_by_isbn(&i.to_string()).is_some());
        }
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_add_duplicate_isbn_leaves_catalog_unchanged() {
        let (mut inv, path) = temp_inventory("duplicate");
        inv.add(Book::new("Dune", "Herbert", "111")).unwrap();

        let err = inv.add(Book::new("Other", "Someone", "111")).unwrap_err();
        assert_eq!(err, TallyError::duplicate_isbn("111"));
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.find_by_isbn("111").unwrap().title, "Dune");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_search_by_title_case_insensitive_in_order() {
        let (mut inv, path) = temp_inventory("search");
        inv.add(Book::new("The Left Hand of Darkness", "Le Guin", "1"))
            .unwrap();
        inv.add(Book::new("Dune", "Herbert", "2")).unwrap();
        inv.add(Book::new("Dune Messiah", "Herbert", "3")).unwrap();

        let hits = inv.search_by_title("dUnE");
        let isbns: Vec<_> = hits.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["2", "3"]);

        assert!(inv.search_by_title("neuromancer").is_empty());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_issue_and_return_by_isbn() {
        let (mut inv, path) = temp_inventory("issue");
        inv.add(Book::new("Dune", "Herbert", "111")).unwrap();
        inv.save().unwrap();

        inv.issue_by_isbn("111").unwrap();
        assert!(!inv.find_by_isbn("111").unwrap().is_available());

        let err = inv.issue_by_isbn("111").unwrap_err();
        assert_eq!(err.error_code(), "ALREADY_ISSUED");

        inv.return_by_isbn("111").unwrap();
        assert!(inv.find_by_isbn("111").unwrap().is_available());

        let err = inv.return_by_isbn("111").unwrap_err();
        assert_eq!(err.error_code(), "NOT_ISSUED");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_issue_unknown_isbn_is_not_found() {
        let (mut inv, path) = temp_inventory("unknown");
        let err = inv.issue_by_isbn("404").unwrap_err();
        assert_eq!(err, TallyError::book_not_found("404"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_mutations_persist_across_reopen() {
        let path = temp_dir().join("tally_test_inv_reopen.json");
        let _ = fs::remove_file(&path);

        {
            let mut inv = Inventory::open(&path).unwrap();
            inv.add(Book::new("Dune", "Herbert", "111")).unwrap();
            inv.save().unwrap();
            inv.issue_by_isbn("111").unwrap();
        }

        let inv = Inventory::open(&path).unwrap();
        assert_eq!(inv.len(), 1);
        let book = inv.find_by_isbn("111").unwrap();
        assert_eq!(book.status, BookStatus::Issued);
        assert_eq!(book.title, "Dune");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let path = temp_dir().join("tally_test_inv_corrupt.json");
        fs::write(&path, "{{{ not a catalog").unwrap();

        let inv = Inventory::open(&path).unwrap();
        assert!(inv.is_empty());
        // Corrupt file is untouched until the next save
        assert_eq!(fs::read_to_string(&path).unwrap(), "{{{ not a catalog");

        inv.save().unwrap();
        assert_eq!(load_catalog(&path).unwrap(), vec![]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_list_all_in_catalog_order() {
        let (mut inv, path) = temp_inventory("list");
        inv.add(Book::new("B", "x", "2")).unwrap();
        inv.add(Book::new("A", "y", "1")).unwrap();

        let lines = inv.list_all();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("B by x"));
        assert!(lines[1].starts_with("A by y"));
        let _ = fs::remove_file(&path);
    }
}
