//! Path management for Carteira
//!
//! ## Path Resolution Order
//!
//! 1. `CARTEIRA_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/carteira` or `~/.config/carteira`
//! 3. Anything else: the platform config directory reported by `directories`

use std::path::PathBuf;

use crate::error::CarteiraError;

/// Manages all paths used by Carteira
#[derive(Debug, Clone)]
pub struct CarteiraPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl CarteiraPaths {
    /// Create a new CarteiraPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, CarteiraError> {
        let base_dir = if let Ok(custom) = std::env::var("CARTEIRA_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CarteiraPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("carteira.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CarteiraError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CarteiraError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }

    /// Check if Carteira has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CarteiraError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("carteira"));
    }
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home).join(".config").join("carteira"));
    }
    project_config_dir()
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CarteiraError> {
    project_config_dir()
}

fn project_config_dir() -> Result<PathBuf, CarteiraError> {
    directories::ProjectDirs::from("", "", "carteira")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CarteiraError::Config("Could not determine config directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CarteiraPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("carteira.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("carteira");
        let paths = CarteiraPaths::with_base_dir(base.clone());

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
