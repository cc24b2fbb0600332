//! User settings for acctree
//!
//! Persisted preferences: which data file to edit, how it is indented, and
//! whether edits are audited.

use serde::{Deserialize, Serialize};

use super::paths::AppPaths;
use crate::error::AcctreeError;
use crate::storage::DEFAULT_INDENT;

/// User settings for acctree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Data file used when no explicit path is given
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Spaces of indentation in the saved document
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Whether mutations are written to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Whether the TUI asks to save unsaved edits on exit
    #[serde(default = "default_true")]
    pub confirm_on_exit: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_data_file() -> String {
    "data.json".to_string()
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_file: default_data_file(),
            indent: default_indent(),
            audit_enabled: true,
            confirm_on_exit: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &AppPaths) -> Result<Self, AcctreeError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                AcctreeError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AcctreeError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AppPaths) -> Result<(), AcctreeError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AcctreeError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            AcctreeError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
