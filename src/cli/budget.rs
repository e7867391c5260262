//! Budget CLI command

use std::io::Write;

use crate::classify::BudgetTracker;
use crate::config::Settings;
use crate::display::format_budget;
use crate::error::LedgerResult;
use crate::storage::GroupSnapshot;

/// Handle the budget command
pub fn handle_budget_command<W: Write>(
    snapshot: &GroupSnapshot,
    settings: &Settings,
    out: &mut W,
) -> LedgerResult<()> {
    match &snapshot.budget {
        Some(budget) => {
            let tracker = BudgetTracker::new(budget);
            write!(out, "{}", format_budget(&tracker, settings))?;
        }
        None => writeln!(out, "No budget set for this group.")?,
    }
    Ok(())
}
