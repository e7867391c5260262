//! Config CLI command

use std::io::Write;

use crate::config::{Settings, TripLedgerPaths};
use crate::error::LedgerResult;
use crate::setup::should_show_welcome;

/// Show the resolved paths and current settings
pub fn handle_config_command<W: Write>(
    paths: &TripLedgerPaths,
    settings: &Settings,
    out: &mut W,
) -> LedgerResult<()> {
    writeln!(out, "TripLedger Configuration")?;
    writeln!(out, "========================")?;
    writeln!(out, "Base directory: {}", paths.base_dir().display())?;
    writeln!(
        out,
        "Settings file:  {}{}",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not yet written)" }
    )?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Currency symbol: {}", settings.currency_symbol)?;
    writeln!(out, "  Date format:     {}", settings.date_format)?;
    writeln!(out, "  Default format:  {}", settings.default_export_format)?;
    writeln!(
        out,
        "  Welcome pending: {}",
        if should_show_welcome(settings) { "yes" } else { "no" }
    )?;
    if let Some(user) = settings.cached_user.as_ref().filter(|u| u.is_recognizable()) {
        writeln!(out, "  Cached user:     {} <{}>", user.name, user.email)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::render;
    use tempfile::TempDir;

    #[test]
    fn test_config_output() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripLedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let output = render(|out| handle_config_command(&paths, &Settings::default(), out));

        assert!(output.contains(&format!("Base directory: {}", temp_dir.path().display())));
        assert!(output.contains("config.json (not yet written)"));
        assert!(output.contains("Currency symbol: ₹"));
        assert!(output.contains("Default format:  table"));
        assert!(output.contains("Welcome pending: yes"));
        assert!(!output.contains("Cached user"));
    }

    #[test]
    fn test_saved_settings_file_is_not_flagged() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripLedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        Settings::default().save(&paths).unwrap();

        let output = render(|out| handle_config_command(&paths, &Settings::default(), out));
        assert!(output.contains("config.json\n"));
        assert!(!output.contains("not yet written"));
    }
}
