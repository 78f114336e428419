//! User settings for fintrack
//!
//! Manages display preferences, the location of the record store, and the
//! default log filter.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackError;

/// User settings for fintrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Override for the record store file (defaults to data/records.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_file: Option<PathBuf>,

    /// Log filter used when `FINTRACK_LOG` is not set (e.g. "fintrack=debug")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_filter() -> String {
    "fintrack=warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            store_file: None,
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FintrackError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FintrackError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FintrackError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FintrackError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Resolve the record store file, honoring the override if present
    pub fn store_path(&self, paths: &FintrackPaths) -> PathBuf {
        match &self.store_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => paths.base_dir().join(path),
            None => paths.store_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.log_filter, "fintrack=warn");
        assert!(settings.store_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();
        settings.store_file = Some(PathBuf::from("ledger.json"));
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(
            loaded.store_path(&paths),
            temp_dir.path().join("ledger.json")
        );
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.log_filter, "fintrack=warn");
    }

    #[test]
    fn test_default_store_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(Settings::default().store_path(&paths), paths.store_file());
    }
}
