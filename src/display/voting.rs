//! Voting board display

use super::progress_bar;
use crate::models::VotingItem;

/// Format every voting item with its counts, bar and badge
pub fn format_voting_board(items: &[VotingItem]) -> String {
    if items.is_empty() {
        return "No decisions up for a vote.".to_string();
    }

    let mut output = String::new();

    for (i, item) in items.iter().enumerate() {
        let tally = item.tally();

        output.push_str(&format!("{} [{}]\n", item.title, item.badge_label()));
        if !item.description.is_empty() {
            output.push_str(&format!("  {}\n", item.description));
        }
        output.push_str(&format!(
            "  Yes: {}  No: {}  {} {:.0}%\n",
            tally.yes_count,
            tally.no_count,
            progress_bar(tally.percentage, 20),
            tally.percentage
        ));
        if !item.deadline.is_empty() {
            output.push_str(&format!("  Deadline: {}\n", item.deadline));
        }

        if i < items.len() - 1 {
            output.push('\n');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vote;

    #[test]
    fn test_empty_board() {
        assert_eq!(format_voting_board(&[]), "No decisions up for a vote.");
    }

    #[test]
    fn test_board_lines() {
        let mut active = VotingItem::new("1", "Sunrise visit", "6 AM slot?", "2 hours");
        active.votes = vec![Vote::yes("1"), Vote::yes("2"), Vote::yes("3"), Vote::no("4")];

        let mut done = VotingItem::new("2", "Luxury hotel", "", "Completed");
        done.votes = vec![Vote::no("1"), Vote::yes("2")];
        done.close();

        let output = format_voting_board(&[active, done]);

        assert!(output.contains("Sunrise visit [winning]"));
        assert!(output.contains("Yes: 3  No: 1  [###############-----] 75%"));
        assert!(output.contains("Deadline: 2 hours"));
        assert!(output.contains("Luxury hotel [completed]"));
    }
}
