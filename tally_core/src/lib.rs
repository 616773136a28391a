//! # tally_core - Catalog, Statistics, and Report Engine
//!
//! `tally_core` is the shared engine behind the Tally desk utilities: a
//! JSON-backed library inventory plus the number crunching and text
//! formatting for the one-shot report tools. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Explicit state**: the inventory takes its backing path at
//!   construction; no process-global setup
//! - **JSON-First**: records persist as a human-readable JSON array
//! - **Rich Errors**: structured error types, not just strings
//! - **Degrade, don't crash**: a corrupt catalog file loads as empty
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tally_core::catalog::Book;
//! use tally_core::inventory::Inventory;
//!
//! let mut inv = Inventory::open("data/books.json")?;
//! inv.add(Book::new("Dune", "Frank Herbert", "978-0441013593"))?;
//! inv.save()?;
//! # Ok::<(), tally_core::errors::TallyError>(())
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The book record model and its two-state status
//! - [`inventory`] - The ordered, file-mirrored catalog store
//! - [`file_io`] - Atomic catalog save/load
//! - [`stats`] - Aggregate statistics for the report tools
//! - [`report`] - Plain-text report rendering
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod errors;
pub mod file_io;
pub mod inventory;
pub mod report;
pub mod stats;

// Re-export commonly used types at crate root for convenience
pub use catalog::{Book, BookStatus};
pub use errors::{TallyError, TallyResult};
pub use file_io::{load_catalog, save_catalog, DEFAULT_CATALOG_PATH};
pub use inventory::Inventory;
