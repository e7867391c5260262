//! Export module for TripLedger
//!
//! Writes the settlement report in machine-readable formats:
//! - CSV: one row per member, spreadsheet-compatible
//! - JSON: the full report
//! - YAML: the full report, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

pub use self::csv::export_settlement_csv;
pub use json::export_settlement_json;
pub use yaml::export_settlement_yaml;

use crate::error::LedgerResult;
use crate::reports::SettlementReport;

/// Output format for the settlement report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Terminal table
    #[default]
    Table,
    Json,
    Yaml,
    Csv,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Export a report in one of the machine-readable formats.
///
/// `Table` is rendered by the display layer and writes nothing here.
pub fn export_settlement<W: Write>(
    report: &SettlementReport,
    format: ExportFormat,
    writer: &mut W,
) -> LedgerResult<()> {
    match format {
        ExportFormat::Table => Ok(()),
        ExportFormat::Json => export_settlement_json(report, writer),
        ExportFormat::Yaml => export_settlement_yaml(report, writer),
        ExportFormat::Csv => export_settlement_csv(report, writer),
    }
}
