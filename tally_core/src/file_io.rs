//! # File I/O Module
//!
//! Persists the catalog as a single JSON file: an array of book objects.
//! Saves go through a temporary file and an atomic rename so an
//! interrupted write never leaves a half-written catalog behind. There is
//! exactly one writer per backing file, so no locking is needed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tally_core::catalog::Book;
//! use tally_core::file_io::{save_catalog, load_catalog};
//! use std::path::Path;
//!
//! let books = vec![Book::new("Dune", "Frank Herbert", "978-0441013593")];
//! let path = Path::new("data/books.json");
//!
//! save_catalog(&books, path)?;
//! let loaded = load_catalog(path)?;
//! assert_eq!(loaded, books);
//! # Ok::<(), tally_core::errors::TallyError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::catalog::Book;
use crate::errors::{TallyError, TallyResult};

/// Default backing file location, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "data/books.json";

/// Save the full catalog to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize the book list to pretty JSON
/// 2. Write to a temporary sibling file
/// 3. Sync to disk
/// 4. Rename over the target (atomic on most filesystems)
///
/// Parent directories are created if missing.
pub fn save_catalog(books: &[Book], path: &Path) -> TallyResult<()> {
    let json =
        serde_json::to_string_pretty(books).map_err(|e| TallyError::SerializationError {
            reason: e.to_string(),
        })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                TallyError::file_error("create dir", parent.display().to_string(), e.to_string())
            })?;
        }
    }

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        TallyError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        TallyError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        TallyError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        TallyError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a catalog from a file, preserving file order.
///
/// Returns `FileError` if the file cannot be read and
/// `SerializationError` if it is not a valid book array. Callers decide
/// whether to propagate or degrade (the inventory store degrades to an
/// empty catalog).
pub fn load_catalog(path: &Path) -> TallyResult<Vec<Book>> {
    let mut file = File::open(path).map_err(|e| {
        TallyError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        TallyError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&contents).map_err(|e| TallyError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}
