//! Settlement report
//!
//! Joins the settlement sheet with member names so it can be rendered or
//! exported without the roster at hand.

use serde::{Deserialize, Serialize};

use crate::error::LedgerResult;
use crate::ledger::SettlementResult;
use crate::models::{MemberId, Money, Roster};
use crate::storage::GroupSnapshot;

/// One member's row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRow {
    pub member_id: MemberId,
    pub name: String,
    pub paid: Money,
    pub share: Money,
    /// True balance, may be negative
    pub owes: Money,
    /// Balance floored at zero for display
    pub still_owed: Money,
    /// What the group owes this member, never negative
    pub gets_back: Money,
}

/// One suggested payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRow {
    pub from_id: MemberId,
    pub from: String,
    pub to_id: MemberId,
    pub to: String,
    pub amount: Money,
}

/// Settlement report for a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReport {
    pub group: String,
    pub total_expenses: Money,
    pub expense_count: usize,
    pub rows: Vec<SettlementRow>,
    pub transfers: Vec<TransferRow>,
}

impl SettlementReport {
    /// Generate the report for a snapshot
    pub fn generate(snapshot: &GroupSnapshot) -> LedgerResult<Self> {
        let sheet = snapshot.settlement()?;
        Ok(Self::from_sheet(
            &snapshot.name,
            &snapshot.members,
            &sheet,
            snapshot.expenses.len(),
        ))
    }

    /// Build the report from an already computed sheet
    pub fn from_sheet(
        group: &str,
        roster: &Roster,
        sheet: &SettlementResult,
        expense_count: usize,
    ) -> Self {
        let rows = sheet
            .entries
            .iter()
            .map(|e| SettlementRow {
                member_id: e.member_id.clone(),
                name: roster.name_of(&e.member_id),
                paid: e.paid,
                share: e.share,
                owes: e.owes,
                still_owed: e.amount_still_owed(),
                gets_back: e.amount_to_receive(),
            })
            .collect();

        let transfers = sheet
            .settle_up()
            .into_iter()
            .map(|t| TransferRow {
                from: roster.name_of(&t.from),
                to: roster.name_of(&t.to),
                from_id: t.from,
                to_id: t.to,
                amount: t.amount,
            })
            .collect();

        Self {
            group: group.to_string(),
            total_expenses: sheet.total_expenses,
            expense_count,
            rows,
            transfers,
        }
    }

    /// Check whether everybody is square
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}
