//! User settings for TripLedger
//!
//! Manages display preferences and the onboarding flags (welcome completed,
//! cached user) that decide which screen a returning user lands on.

use serde::{Deserialize, Serialize};

use super::paths::TripLedgerPaths;
use crate::error::LedgerError;
use crate::export::ExportFormat;
use crate::models::{Money, UserRecord};
use crate::storage::file_io::write_json_atomic;

/// User settings for TripLedger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Format used by `settle` when none is given
    #[serde(default)]
    pub default_export_format: ExportFormat,

    /// Whether the welcome flow has been completed
    #[serde(default)]
    pub welcome_completed: bool,

    /// User record cached from the last session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_user: Option<UserRecord>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_export_format: ExportFormat::default(),
            welcome_completed: false,
            cached_user: None,
        }
    }
}

impl Settings {
    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TripLedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TripLedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert!(!settings.welcome_completed);
        assert!(settings.cached_user.is_none());
        assert_eq!(settings.default_export_format, ExportFormat::Table);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripLedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.welcome_completed = true;
        settings.cached_user = Some(UserRecord::logged_in("Asha", "asha@example.com"));

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert!(loaded.welcome_completed);
        assert_eq!(loaded.cached_user.unwrap().name, "Asha");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"welcome_completed": true}"#).unwrap();
        assert!(settings.welcome_completed);
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripLedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn test_format_money() {
        let mut settings = Settings::default();
        assert_eq!(settings.format_money(Money::from_major(1200)), "₹1,200.00");
        settings.currency_symbol = "$".into();
        assert_eq!(settings.format_money(Money::from_minor(-5)), "-$0.05");
    }
}
