//! Core data models for acctree
//!
//! This module contains the data structures that mirror the JSON document:
//! the document root, accounts, the OTHERS bucket, services and their
//! free-form details.

pub mod account;
pub mod details;
pub mod document;
pub mod lenient;
pub mod service;

pub use account::{Account, AccountKey, AccountUpdate, OthersBucket, OTHERS_KEY};
pub use details::Details;
pub use document::Document;
pub use service::{Service, ServiceForm};
