//! CSV export of the settlement report
//!
//! One row per member; amounts are written exactly in whole currency units
//! with two decimals.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::reports::SettlementReport;

/// Export the per-member settlement rows to CSV
pub fn export_settlement_csv<W: Write>(
    report: &SettlementReport,
    writer: &mut W,
) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Member ID", "Name", "Paid", "Share", "Owes", "Still Owed"])
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for row in &report.rows {
        csv_writer
            .write_record([
                row.member_id.to_string(),
                row.name.clone(),
                row.paid.to_decimal_string(),
                row.share.to_decimal_string(),
                row.owes.to_decimal_string(),
                row.still_owed.to_decimal_string(),
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
