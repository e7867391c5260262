//! YAML export of the settlement report

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::reports::SettlementReport;

/// Export the report as YAML with a short header comment
pub fn export_settlement_yaml<W: Write>(
    report: &SettlementReport,
    writer: &mut W,
) -> LedgerResult<()> {
    writeln!(writer, "# TripLedger settlement: {}", report.group)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer, "# Amounts are in minor currency units")
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, report).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
