//! Votes CLI command

use std::io::Write;

use crate::display::format_voting_board;
use crate::error::LedgerResult;
use crate::models::VotingItemId;
use crate::storage::GroupSnapshot;

/// Handle the votes command
///
/// Shows the whole board, or a single item when an id is given.
pub fn handle_votes_command<W: Write>(
    snapshot: &GroupSnapshot,
    item: Option<&str>,
    out: &mut W,
) -> LedgerResult<()> {
    let board = match item {
        Some(id) => {
            let item = snapshot.voting_item(&VotingItemId::new(id))?;
            format_voting_board(std::slice::from_ref(item))
        }
        None => format_voting_board(&snapshot.voting_items),
    };

    writeln!(out, "{}", board.trim_end())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::{render, snapshot};

    #[test]
    fn test_board() {
        let output = render(|out| handle_votes_command(&snapshot(), None, out));
        assert!(output.contains("Sunrise at the Taj [leading]"));
        assert!(output.contains("Yes: 2  No: 1"));
        assert!(output.contains("67%"));
    }

    #[test]
    fn test_unknown_item() {
        let mut out = Vec::new();
        let err = handle_votes_command(&snapshot(), Some("v9"), &mut out).unwrap_err();
        assert!(err.is_not_found());
    }
}
