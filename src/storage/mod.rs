//! Storage layer for acctree
//!
//! Provides JSON file storage for the document with lenient loading and
//! whole-file saves.

pub mod document;
pub mod file_io;

pub use document::{DocumentStore, Loaded, DEFAULT_INDENT};
pub use file_io::{read_json, write_json};
