//! Document store
//!
//! Loads and saves the whole data file. The store holds no document itself;
//! the record editor owns the in-memory copy.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::AcctreeError;
use crate::models::Document;

use super::file_io::{read_json, write_json};

/// Indentation used by the source files this tool edits
pub const DEFAULT_INDENT: usize = 4;

/// Outcome of a lenient load
#[derive(Debug)]
pub struct Loaded {
    /// The loaded document, or an empty one on failure
    pub document: Document,
    /// Why the empty default was used, for the user to see
    pub warning: Option<AcctreeError>,
}

/// Persistence for the document file
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
    indent: usize,
}

impl DocumentStore {
    /// Create a store for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            indent: DEFAULT_INDENT,
        }
    }

    /// Set the number of spaces used to indent saved JSON
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, failing on a missing or malformed file
    pub fn load(&self) -> Result<Document, AcctreeError> {
        read_json(&self.path)
    }

    /// Load the document, falling back to an empty one
    ///
    /// Never fails. A missing or malformed file yields the empty document and
    /// the error that caused it.
    pub fn load_or_default(&self) -> Loaded {
        match self.load() {
            Ok(document) => {
                info!(
                    "Loaded {} accounts from {}",
                    document.accounts.len(),
                    self.path.display()
                );
                Loaded {
                    document,
                    warning: None,
                }
            }
            Err(err) => {
                warn!("Using empty document: {}", err);
                Loaded {
                    document: Document::empty(),
                    warning: Some(err),
                }
            }
        }
    }

    /// Write the whole document, replacing the file
    pub fn save(&self, document: &Document) -> Result<(), AcctreeError> {
        write_json(&self.path, document, self.indent)?;
        info!("Saved document to {}", self.path.display());
        Ok(())
    }
}
