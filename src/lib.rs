//! TripLedger - group trip ledger engine
//!
//! Computes who owes what across a group's shared expenses, tallies yes/no
//! votes on group decisions, and classifies budget health and attraction
//! crowd levels against fixed threshold tables.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (money, members, expenses, voting items, budget, crowd)
//! - `ledger`: Settlement computation, the expense store and vote tallying
//! - `classify`: Threshold tables for budget status and crowd levels
//! - `storage`: Group snapshot loading and atomic file writes
//! - `reports`: Settlement report joined with member names
//! - `export`: JSON, YAML and CSV export
//! - `display`: Terminal formatting
//! - `config`: Configuration and path management
//! - `setup`: Welcome flag store
//! - `cli`: Command handlers for the `tripledger` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use tripledger::storage::GroupSnapshot;
//!
//! let snapshot = GroupSnapshot::load("demos/delhi_trip.json")?;
//! let sheet = snapshot.settlement()?;
//! for transfer in sheet.settle_up() {
//!     println!("{} -> {}: {}", transfer.from, transfer.to, transfer.amount);
//! }
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod setup;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
