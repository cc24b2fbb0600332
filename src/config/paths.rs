//! Path management for acctree
//!
//! Resolves where settings and the audit log live, and where the data file
//! is read from.
//!
//! ## Config directory resolution
//!
//! 1. `ACCTREE_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/acctree` on Linux)
//!
//! ## Data file resolution
//!
//! 1. Explicit path (`--file` or `ACCTREE_DATA_FILE`)
//! 2. `data_file` from settings, relative to the working directory

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::AcctreeError;

/// Manages all paths used by acctree
#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    /// Create a new AppPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, AcctreeError> {
        let config_dir = if let Ok(custom) = std::env::var("ACCTREE_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "acctree")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    AcctreeError::Config("Could not determine a config directory".into())
                })?
        };

        Ok(Self { config_dir })
    }

    /// Create AppPaths with a custom config directory (useful for testing)
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.config_dir.join("audit.log")
    }

    /// Resolve the data file from an explicit override or the settings value
    pub fn data_file(&self, explicit: Option<&Path>, configured: &str) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(configured),
        }
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), AcctreeError> {
        std::fs::create_dir_all(&self.config_dir)
            .map_err(|e| AcctreeError::Io(format!("Failed to create config directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_config_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.config_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("settings.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("ACCTREE_CONFIG_DIR", temp_dir.path());
        let paths = AppPaths::new().unwrap();
        std::env::remove_var("ACCTREE_CONFIG_DIR");

        assert_eq!(paths.config_dir(), temp_dir.path());
    }

    #[test]
    fn test_data_file_resolution() {
        let paths = AppPaths::with_config_dir(PathBuf::from("/cfg"));

        assert_eq!(paths.data_file(None, "data.json"), PathBuf::from("data.json"));
        assert_eq!(
            paths.data_file(Some(Path::new("/tmp/x.json")), "data.json"),
            PathBuf::from("/tmp/x.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_config_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.config_dir().exists());
    }
}
