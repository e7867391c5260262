//! Settle CLI command
//!
//! Prints the settlement sheet as a table, or exports it as JSON, YAML or
//! CSV.

use std::io::Write;

use crate::config::Settings;
use crate::display::format_settlement;
use crate::error::LedgerResult;
use crate::export::{export_settlement, ExportFormat};
use crate::reports::SettlementReport;
use crate::storage::GroupSnapshot;

/// Handle the settle command
///
/// Falls back to the configured default format when none is given.
pub fn handle_settle_command<W: Write>(
    snapshot: &GroupSnapshot,
    settings: &Settings,
    format: Option<ExportFormat>,
    out: &mut W,
) -> LedgerResult<()> {
    let report = SettlementReport::generate(snapshot)?;

    match format.unwrap_or(settings.default_export_format) {
        ExportFormat::Table => {
            write!(out, "{}", format_settlement(&report, settings))?;
        }
        other => export_settlement(&report, other, out)?,
    }

    Ok(())
}
