//! Configuration module for acctree
//!
//! This module provides configuration management including:
//! - Platform path resolution for settings and the audit log
//! - Data file resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::Settings;
