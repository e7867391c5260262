//! Welcome CLI command
//!
//! Records that onboarding has been completed so returning users skip the
//! welcome screen.

use std::io::Write;

use crate::config::{Settings, TripLedgerPaths};
use crate::error::LedgerResult;
use crate::models::UserRecord;
use crate::setup::{complete_welcome, should_show_welcome};

/// Handle the welcome command
pub fn handle_welcome_command<W: Write>(
    paths: &TripLedgerPaths,
    settings: &mut Settings,
    name: Option<String>,
    email: Option<String>,
    out: &mut W,
) -> LedgerResult<()> {
    if name.is_none() && email.is_none() && !should_show_welcome(settings) {
        writeln!(out, "Welcome already completed.")?;
        return Ok(());
    }

    let user = match (name, email) {
        (None, None) => settings.cached_user.clone().unwrap_or_default(),
        (name, email) => UserRecord::logged_in(name.unwrap_or_default(), email.unwrap_or_default()),
    };

    let greeting = if user.name.trim().is_empty() {
        "Welcome to TripLedger!".to_string()
    } else {
        format!("Welcome to TripLedger, {}!", user.name.trim())
    };

    complete_welcome(settings, user);
    settings.save(paths)?;

    writeln!(out, "{}", greeting)?;
    writeln!(out, "Settings saved to {}", paths.settings_file().display())?;
    Ok(())
}
