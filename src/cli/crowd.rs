//! Crowd CLI command

use std::io::Write;

use crate::display::format_crowd_forecast;
use crate::error::LedgerResult;
use crate::storage::GroupSnapshot;

/// Handle the crowd command
///
/// Prints every forecast, or the one matching `attraction`.
pub fn handle_crowd_command<W: Write>(
    snapshot: &GroupSnapshot,
    attraction: Option<&str>,
    out: &mut W,
) -> LedgerResult<()> {
    if let Some(name) = attraction {
        let forecast = snapshot.crowd_for(name)?;
        write!(out, "{}", format_crowd_forecast(forecast))?;
        return Ok(());
    }

    if snapshot.crowd.is_empty() {
        writeln!(out, "No crowd forecasts for this group.")?;
        return Ok(());
    }

    let rendered: Vec<String> = snapshot.crowd.iter().map(format_crowd_forecast).collect();
    write!(out, "{}", rendered.join("\n"))?;
    Ok(())
}
