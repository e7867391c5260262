//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the ledger, reports and display layers. Every
//! handler writes to the given output so it can be exercised in tests.

pub mod budget;
pub mod config;
pub mod crowd;
pub mod expense;
pub mod settle;
pub mod voting;
pub mod welcome;

use std::path::PathBuf;

use clap::Args;

use crate::error::LedgerResult;
use crate::storage::GroupSnapshot;

pub use budget::handle_budget_command;
pub use config::handle_config_command;
pub use crowd::handle_crowd_command;
pub use expense::{handle_expenses_command, ExpenseFilter};
pub use settle::handle_settle_command;
pub use voting::handle_votes_command;
pub use welcome::handle_welcome_command;

/// Snapshot file argument shared by the group commands
#[derive(Args, Debug, Clone)]
pub struct GroupArgs {
    /// Path to the group snapshot (JSON, or YAML by .yaml/.yml extension)
    pub group: PathBuf,
}

impl GroupArgs {
    /// Load and validate the snapshot
    pub fn load(&self) -> LedgerResult<GroupSnapshot> {
        GroupSnapshot::load(&self.group)
    }
}
