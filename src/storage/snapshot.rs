//! Group snapshot files
//!
//! A snapshot is a read-only description of one trip group: members,
//! expenses, decisions under vote, and optionally the trip budget and crowd
//! forecasts. JSON and YAML are both accepted, chosen by file extension.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::file_io::{read_json_required, read_yaml_required};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{ExpenseStore, SettlementResult};
use crate::models::{CrowdForecast, Expense, Roster, TripBudget, VotingItem, VotingItemId};

/// Everything known about a trip group at one point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSnapshot {
    /// Group or trip name
    #[serde(default)]
    pub name: String,

    pub members: Roster,

    #[serde(default)]
    pub expenses: Vec<Expense>,

    #[serde(default, alias = "votingItems")]
    pub voting_items: Vec<VotingItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<TripBudget>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub crowd: Vec<CrowdForecast>,
}

impl GroupSnapshot {
    /// Load and validate a snapshot file
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let snapshot: GroupSnapshot = if is_yaml {
            read_yaml_required(path)?
        } else {
            read_json_required(path)?
        };

        snapshot.validate()?;
        debug!(
            path = %path.display(),
            members = snapshot.members.len(),
            expenses = snapshot.expenses.len(),
            voting_items = snapshot.voting_items.len(),
            "loaded group snapshot"
        );
        Ok(snapshot)
    }

    /// Parse and validate a snapshot from a JSON string
    pub fn from_json_str(json: &str) -> LedgerResult<Self> {
        let snapshot: GroupSnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check every expense and vote against the roster, and the budget and
    /// crowd sections for range
    pub fn validate(&self) -> LedgerResult<()> {
        self.expense_store()?;

        if let Some(budget) = &self.budget {
            budget.validate()?;
        }

        for (i, item) in self.voting_items.iter().enumerate() {
            if self.voting_items[..i].iter().any(|other| other.id == item.id) {
                return Err(LedgerError::Duplicate {
                    entity_type: "Voting item",
                    identifier: item.id.to_string(),
                });
            }
            item.validate_voters(&self.members)?;
        }

        if let Some(forecast) = self
            .crowd
            .iter()
            .find(|f| f.current_level > 100 || f.hourly.iter().any(|h| h.level > 100))
        {
            return Err(LedgerError::Validation(format!(
                "Crowd level for '{}' must be between 0 and 100",
                forecast.attraction
            )));
        }

        Ok(())
    }

    /// Build the expense store for this group
    pub fn expense_store(&self) -> LedgerResult<ExpenseStore> {
        ExpenseStore::with_expenses(self.members.clone(), self.expenses.clone())
    }

    /// Compute the settlement sheet
    pub fn settlement(&self) -> LedgerResult<SettlementResult> {
        crate::ledger::compute_settlement(&self.members, &self.expenses)
    }

    /// Look up a voting item
    pub fn voting_item(&self, id: &VotingItemId) -> LedgerResult<&VotingItem> {
        self.voting_items
            .iter()
            .find(|item| &item.id == id)
            .ok_or_else(|| LedgerError::voting_item_not_found(id.as_str()))
    }

    /// Look up a crowd forecast by attraction name (case-insensitive)
    pub fn crowd_for(&self, attraction: &str) -> LedgerResult<&CrowdForecast> {
        self.crowd
            .iter()
            .find(|f| f.attraction.eq_ignore_ascii_case(attraction.trim()))
            .ok_or_else(|| LedgerError::attraction_not_found(attraction))
    }
}
