//! acctree - Terminal editor for a JSON tree of accounts and services
//!
//! This library provides the core of the acctree editor. The data file holds
//! accounts keyed by email, each with credentials and a list of services,
//! plus a catch-all `OTHERS` bucket with the same shape.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The document, accounts, services and details blobs
//! - `storage`: Loading and saving the JSON document
//! - `editor`: Selection, edit sessions and CRUD over the document
//! - `audit`: Audit logging of every mutation
//! - `display`: Plain-text formatting for terminal output
//! - `cli`: One-shot command handlers
//! - `tui`: The interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use acctree::editor::RecordEditor;
//! use acctree::storage::DocumentStore;
//!
//! let (mut editor, _warning) = RecordEditor::open(DocumentStore::new("data.json"));
//! editor.create_account("a@b.com")?;
//! editor.save_all(true)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod editor;
pub mod error;
pub mod models;
pub mod storage;
pub mod tui;

pub use error::AcctreeError;
