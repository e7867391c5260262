//! Configuration module for TripLedger
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TripLedgerPaths;
pub use settings::Settings;
