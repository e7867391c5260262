//! Group decision voting model
//!
//! A voting item collects one yes/no vote per member. A second vote from the
//! same member replaces the first.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::ids::{MemberId, VotingItemId};
use super::member::Roster;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::tally::{compute_vote_tally, VoteTallyResult};

/// A yes/no choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Yes,
    No,
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "yes"),
            Self::No => write!(f, "no"),
        }
    }
}

/// A single cast vote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    #[serde(alias = "userId")]
    pub voter: MemberId,
    pub choice: VoteChoice,
}

impl Vote {
    pub fn new(voter: impl Into<MemberId>, choice: VoteChoice) -> Self {
        Self {
            voter: voter.into(),
            choice,
        }
    }

    pub fn yes(voter: impl Into<MemberId>) -> Self {
        Self::new(voter, VoteChoice::Yes)
    }

    pub fn no(voter: impl Into<MemberId>) -> Self {
        Self::new(voter, VoteChoice::No)
    }
}

/// Whether an item still accepts votes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VotingStatus {
    #[default]
    Active,
    Completed,
}

impl fmt::Display for VotingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A group decision put to a vote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingItem {
    /// Unique identifier
    pub id: VotingItemId,

    /// Short title
    pub title: String,

    /// Question put to the group
    #[serde(default)]
    pub description: String,

    /// Active or completed
    #[serde(default)]
    pub status: VotingStatus,

    /// Free-form deadline descriptor ("2 hours", "Completed")
    #[serde(default)]
    pub deadline: String,

    /// Votes in the order they were cast
    #[serde(default)]
    pub votes: Vec<Vote>,
}

impl VotingItem {
    /// Create a new active voting item with no votes
    pub fn new(
        id: impl Into<VotingItemId>,
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            status: VotingStatus::Active,
            deadline: deadline.into(),
            votes: Vec::new(),
        }
    }

    /// Check whether the item still accepts votes
    pub fn is_active(&self) -> bool {
        self.status == VotingStatus::Active
    }

    /// Record a vote from a roster member, replacing any earlier vote by the
    /// same member
    pub fn cast_vote(
        &mut self,
        roster: &Roster,
        voter: &MemberId,
        choice: VoteChoice,
    ) -> LedgerResult<()> {
        if !roster.contains(voter) {
            return Err(LedgerError::unknown_voter(voter.as_str()));
        }
        if !self.is_active() {
            return Err(LedgerError::VotingClosed(self.title.clone()));
        }

        match self.votes.iter_mut().find(|v| &v.voter == voter) {
            Some(existing) => existing.choice = choice,
            None => self.votes.push(Vote::new(voter.clone(), choice)),
        }
        Ok(())
    }

    /// Mark the item as completed
    pub fn close(&mut self) {
        self.status = VotingStatus::Completed;
    }

    /// Current tally of the votes
    pub fn tally(&self) -> VoteTallyResult {
        compute_vote_tally(&self.votes)
    }

    /// Label for the status badge: the classification while active,
    /// "completed" afterwards
    pub fn badge_label(&self) -> String {
        match self.status {
            VotingStatus::Active => self.tally().classification.to_string(),
            VotingStatus::Completed => VotingStatus::Completed.to_string(),
        }
    }

    /// Check that every voter is on the roster and voted at most once
    pub fn validate_voters(&self, roster: &Roster) -> LedgerResult<()> {
        let mut seen = HashSet::new();
        for vote in &self.votes {
            if !roster.contains(&vote.voter) {
                return Err(LedgerError::unknown_voter(vote.voter.as_str()));
            }
            if !seen.insert(&vote.voter) {
                return Err(LedgerError::Duplicate {
                    entity_type: "Vote",
                    identifier: format!("{} on '{}'", vote.voter, self.id),
                });
            }
        }
        Ok(())
    }
}
