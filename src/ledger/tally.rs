//! Vote tally
//!
//! Counts yes/no votes on a group decision and classifies its standing.
//! The tally ignores the item's status; relabelling completed items is a
//! presentation concern.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classify::{Bound, ThresholdTable};
use crate::models::{Vote, VoteChoice};

/// Standing of a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteClassification {
    Winning,
    Leading,
    Losing,
}

impl fmt::Display for VoteClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winning => write!(f, "winning"),
            Self::Leading => write!(f, "leading"),
            Self::Losing => write!(f, "losing"),
        }
    }
}

/// Lower bounds are inclusive
pub const VOTE_CLASSIFICATIONS: ThresholdTable<VoteClassification> = ThresholdTable::new(
    &[
        (Bound::AtLeast(75.0), VoteClassification::Winning),
        (Bound::AtLeast(50.0), VoteClassification::Leading),
    ],
    VoteClassification::Losing,
);

/// Result of tallying a vote list
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoteTallyResult {
    pub yes_count: usize,
    pub no_count: usize,
    /// Share of yes votes, 0-100; 0 when nobody voted
    pub percentage: f64,
    pub classification: VoteClassification,
}

/// Tally a list of votes
pub fn compute_vote_tally(votes: &[Vote]) -> VoteTallyResult {
    let yes_count = votes.iter().filter(|v| v.choice == VoteChoice::Yes).count();
    let no_count = votes.len() - yes_count;
    let total = yes_count + no_count;

    let percentage = if total > 0 {
        yes_count as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    VoteTallyResult {
        yes_count,
        no_count,
        percentage,
        classification: VOTE_CLASSIFICATIONS.classify(percentage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn votes(yes: usize, no: usize) -> Vec<Vote> {
        let mut out = Vec::new();
        for i in 0..yes {
            out.push(Vote::yes(format!("y{}", i)));
        }
        for i in 0..no {
            out.push(Vote::no(format!("n{}", i)));
        }
        out
    }

    #[test]
    fn test_three_to_one_is_winning() {
        let tally = compute_vote_tally(&votes(3, 1));
        assert_eq!(tally.percentage, 75.0);
        assert_eq!(tally.classification, VoteClassification::Winning);
    }

    #[test]
    fn test_even_split_is_leading() {
        let tally = compute_vote_tally(&votes(2, 2));
        assert_eq!(tally.percentage, 50.0);
        assert_eq!(tally.classification, VoteClassification::Leading);
    }

    #[test]
    fn test_one_to_three_is_losing() {
        let tally = compute_vote_tally(&votes(1, 3));
        assert_eq!(tally.percentage, 25.0);
        assert_eq!(tally.classification, VoteClassification::Losing);
    }

    #[test]
    fn test_no_votes_is_losing_at_zero() {
        let tally = compute_vote_tally(&[]);
        assert_eq!(tally.yes_count, 0);
        assert_eq!(tally.no_count, 0);
        assert_eq!(tally.percentage, 0.0);
        assert_eq!(tally.classification, VoteClassification::Losing);
    }

    #[test]
    fn test_counts() {
        let tally = compute_vote_tally(&votes(2, 1));
        assert_eq!(tally.yes_count, 2);
        assert_eq!(tally.no_count, 1);
        assert_eq!(tally.classification, VoteClassification::Leading);
    }

    #[test]
    fn test_unanimous_yes() {
        let tally = compute_vote_tally(&votes(4, 0));
        assert_eq!(tally.percentage, 100.0);
        assert_eq!(tally.classification, VoteClassification::Winning);
    }
}
