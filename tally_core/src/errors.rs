//! # Error Types
//!
//! Structured error types for tally_core. Each variant carries enough
//! context to render a one-line message at the CLI boundary without
//! re-inspecting the catalog.
//!
//! ## Example
//!
//! ```rust
//! use tally_core::errors::{TallyError, TallyResult};
//!
//! fn validate_isbn(isbn: &str) -> TallyResult<()> {
//!     if isbn.is_empty() {
//!         return Err(TallyError::invalid_input("isbn", isbn, "ISBN must not be empty"));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tally_core operations
pub type TallyResult<T> = Result<T, TallyError>;

/// Structured error type for catalog and report operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TallyError {
    /// An ISBN already exists in the catalog
    #[error("Book with ISBN '{isbn}' already exists")]
    DuplicateIsbn { isbn: String },

    /// No book with the given ISBN
    #[error("Book not found: {isbn}")]
    BookNotFound { isbn: String },

    /// Issue attempted while the book is already out
    #[error("Book '{isbn}' is already issued")]
    AlreadyIssued { isbn: String },

    /// Return attempted while the book is on the shelf
    #[error("Book '{isbn}' is not issued")]
    NotIssued { isbn: String },

    /// An input value is invalid (out of range, wrong shape, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl TallyError {
    /// Create a DuplicateIsbn error
    pub fn duplicate_isbn(isbn: impl Into<String>) -> Self {
        TallyError::DuplicateIsbn { isbn: isbn.into() }
    }

    /// Create a BookNotFound error
    pub fn book_not_found(isbn: impl Into<String>) -> Self {
        TallyError::BookNotFound { isbn: isbn.into() }
    }

    /// Create an AlreadyIssued error
    pub fn already_issued(isbn: impl Into<String>) -> Self {
        TallyError::AlreadyIssued { isbn: isbn.into() }
    }

    /// Create a NotIssued error
    pub fn not_issued(isbn: impl Into<String>) -> Self {
        TallyError::NotIssued { isbn: isbn.into() }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        TallyError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        TallyError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for validation failures that leave the catalog untouched,
    /// as opposed to I/O and serialization failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TallyError::DuplicateIsbn { .. }
                | TallyError::BookNotFound { .. }
                | TallyError::AlreadyIssued { .. }
                | TallyError::NotIssued { .. }
                | TallyError::InvalidInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TallyError::DuplicateIsbn { .. } => "DUPLICATE_ISBN",
            TallyError::BookNotFound { .. } => "BOOK_NOT_FOUND",
            TallyError::AlreadyIssued { .. } => "ALREADY_ISSUED",
            TallyError::NotIssued { .. } => "NOT_ISSUED",
            TallyError::InvalidInput { .. } => "INVALID_INPUT",
            TallyError::FileError { .. } => "FILE_ERROR",
            TallyError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = TallyError::duplicate_isbn("978-0441013593");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: TallyError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(TallyError::book_not_found("111").error_code(), "BOOK_NOT_FOUND");
        assert_eq!(TallyError::already_issued("111").error_code(), "ALREADY_ISSUED");
    }

    #[test]
    fn test_validation_classification() {
        assert!(TallyError::duplicate_isbn("111").is_validation());
        assert!(!TallyError::file_error("open", "books.json", "denied").is_validation());
    }

    #[test]
    fn test_display_messages() {
        let e = TallyError::not_issued("222");
        assert_eq!(e.to_string(), "Book '222' is not issued");
    }
}
