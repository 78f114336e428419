//! Path management for fintrack
//!
//! Provides XDG-compliant path resolution for configuration and the local
//! record store.
//!
//! ## Path Resolution Order
//!
//! 1. `FINTRACK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fintrack` or `~/.config/fintrack`
//! 3. Windows: `%APPDATA%\fintrack`

use std::path::PathBuf;

use crate::error::FintrackError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINTRACK_DATA_DIR";

/// Manages all paths used by fintrack
#[derive(Debug, Clone)]
pub struct FintrackPaths {
    /// Base directory for all fintrack data
    base_dir: PathBuf,
}

impl FintrackPaths {
    /// Create a new FintrackPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FintrackError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FintrackPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/fintrack/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/fintrack/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default path of the local record store
    pub fn store_file(&self) -> PathBuf {
        self.data_dir().join("records.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FintrackError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FintrackError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FintrackError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if fintrack has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FintrackError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                FintrackError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("fintrack"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FintrackError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FintrackError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("fintrack"))
}
