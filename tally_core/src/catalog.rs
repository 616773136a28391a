//! # Catalog Record Model
//!
//! A [`Book`] is the single record type of the library inventory. Records
//! serialize to plain JSON objects with four fields (`title`, `author`,
//! `isbn`, `status`), so catalog files stay hand-editable.
//!
//! Normalization is total: every construction path, including
//! deserialization, trims the text fields and coerces an unknown or
//! missing status to [`BookStatus::Available`].
//!
//! ## Example
//!
//! ```rust
//! use tally_core::catalog::{Book, BookStatus};
//!
//! let mut book = Book::new("  Dune ", "Frank Herbert", " 978-0441013593 ");
//! assert_eq!(book.title, "Dune");
//! assert!(book.is_available());
//!
//! book.issue().unwrap();
//! assert_eq!(book.status, BookStatus::Issued);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{TallyError, TallyResult};

/// Circulation state of a book. Two states, no intermediate holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl BookStatus {
    /// Parse a stored status string. Anything other than `"issued"`
    /// (after trimming, case-insensitive) normalizes to `Available`.
    pub fn parse_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("issued") {
            BookStatus::Issued
        } else {
            BookStatus::Available
        }
    }
}

impl<'de> Deserialize<'de> for BookStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(BookStatus::parse_lenient(&raw))
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "available"),
            BookStatus::Issued => write!(f, "issued"),
        }
    }
}

/// A single catalog record.
///
/// Field-for-field mirror of the persisted JSON object. The catalog store
/// (not this type) enforces ISBN uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBook")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub status: BookStatus,
}

/// Untrusted mirror of a stored record. Missing fields default so a
/// partially written entry still loads, then [`From`] re-normalizes.
#[derive(Deserialize)]
struct RawBook {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    isbn: String,
    #[serde(default)]
    status: BookStatus,
}

impl From<RawBook> for Book {
    fn from(raw: RawBook) -> Self {
        Book {
            title: raw.title.trim().to_string(),
            author: raw.author.trim().to_string(),
            isbn: raw.isbn.trim().to_string(),
            status: raw.status,
        }
    }
}

impl Book {
    /// Create an available book, trimming surrounding whitespace from all
    /// text fields.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Book {
            title: title.into().trim().to_string(),
            author: author.into().trim().to_string(),
            isbn: isbn.into().trim().to_string(),
            status: BookStatus::Available,
        }
    }

    /// Mark the book as issued.
    ///
    /// Fails with [`TallyError::AlreadyIssued`] if it is already out; the
    /// record is left unchanged in that case.
    pub fn issue(&mut self) -> TallyResult<()> {
        if self.status == BookStatus::Issued {
            return Err(TallyError::already_issued(&self.isbn));
        }
        self.status = BookStatus::Issued;
        Ok(())
    }

    /// Mark the book as returned to the shelf.
    ///
    /// Fails with [`TallyError::NotIssued`] if it was never issued.
    pub fn give_back(&mut self) -> TallyResult<()> {
        if self.status == BookStatus::Available {
            return Err(TallyError::not_issued(&self.isbn));
        }
        self.status = BookStatus::Available;
        Ok(())
    }

    /// True iff the book is on the shelf.
    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} (ISBN: {}) [{}]",
            self.title, self.author, self.isbn, self.status
        )
    }
}
