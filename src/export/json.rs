//! JSON export of the settlement report

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::reports::SettlementReport;

/// Export the report as pretty-printed JSON
pub fn export_settlement_json<W: Write>(
    report: &SettlementReport,
    writer: &mut W,
) -> LedgerResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}
