//! Reports module for TripLedger
//!
//! Reports combine ledger results with member names so they can be printed
//! or exported.

pub mod settlement;

pub use settlement::{SettlementReport, SettlementRow, TransferRow};
