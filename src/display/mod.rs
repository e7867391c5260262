//! Display formatting for terminal output
//!
//! Renders ledger results, votes, budgets and crowd forecasts as plain text
//! and tables for the CLI.

pub mod budget;
pub mod crowd;
pub mod expense;
pub mod settlement;
pub mod voting;

pub use budget::format_budget;
pub use crowd::format_crowd_forecast;
pub use expense::format_expense_list;
pub use settlement::format_settlement;
pub use voting::format_voting_board;

/// Render a percentage (0-100) as a fixed-width text bar
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let clamped = percentage.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 10), "[----------]");
        assert_eq!(progress_bar(50.0, 10), "[#####-----]");
        assert_eq!(progress_bar(100.0, 4), "[####]");
        assert_eq!(progress_bar(250.0, 4), "[####]");
    }
}
