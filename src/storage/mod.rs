//! Storage layer for TripLedger
//!
//! Reads group snapshots (JSON or YAML) and writes the settings file
//! atomically. Ledger data itself is never written back.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json_required, read_yaml_required, write_json_atomic};
pub use snapshot::GroupSnapshot;
