//! Settlement calculator
//!
//! Converts a list of shared expenses into a per-member balance sheet.
//!
//! Shares are whole minor units. An expense of `a` split `n` ways gives every
//! participant `a / n` (floored); the `a mod n` leftover units go one each to
//! the participants with the lowest member ids. Shares therefore always add
//! up to the total exactly, whatever order the expenses arrive in.

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, MemberId, Money, Roster};

/// One member's line in the settlement sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementEntry {
    pub member_id: MemberId,

    /// Sum of expenses this member paid for
    pub paid: Money,

    /// This member's portion of every expense they share
    pub share: Money,

    /// `share - paid`: positive means the member owes the group,
    /// negative means the group owes the member
    pub owes: Money,
}

impl SettlementEntry {
    /// What is still owed for display purposes; never negative
    pub fn amount_still_owed(&self) -> Money {
        self.owes.floor_zero()
    }

    /// What the group owes this member; never negative
    pub fn amount_to_receive(&self) -> Money {
        (-self.owes).floor_zero()
    }

    pub fn is_debtor(&self) -> bool {
        self.owes.is_positive()
    }

    pub fn is_creditor(&self) -> bool {
        self.owes.is_negative()
    }
}

/// A suggested payment to square up the group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transfer {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: Money,
}

/// Balance sheet for a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementResult {
    /// One entry per member, in roster order
    pub entries: Vec<SettlementEntry>,

    /// Sum of all expense amounts
    pub total_expenses: Money,
}

impl SettlementResult {
    /// Look up a member's entry
    pub fn entry(&self, member_id: &MemberId) -> Option<&SettlementEntry> {
        self.entries.iter().find(|e| &e.member_id == member_id)
    }

    /// Suggest payments that settle every balance.
    ///
    /// Repeatedly pairs the largest debtor with the largest creditor (lowest
    /// member id on ties) and moves the smaller of the two amounts. Needs at
    /// most `members - 1` transfers.
    pub fn settle_up(&self) -> Vec<Transfer> {
        let mut debtors: Vec<(MemberId, Money)> = self
            .entries
            .iter()
            .filter(|e| e.is_debtor())
            .map(|e| (e.member_id.clone(), e.owes))
            .collect();
        let mut creditors: Vec<(MemberId, Money)> = self
            .entries
            .iter()
            .filter(|e| e.is_creditor())
            .map(|e| (e.member_id.clone(), -e.owes))
            .collect();

        let mut transfers = Vec::new();
        while let (Some(d), Some(c)) = (largest(&debtors), largest(&creditors)) {
            let amount = debtors[d].1.min(creditors[c].1);
            transfers.push(Transfer {
                from: debtors[d].0.clone(),
                to: creditors[c].0.clone(),
                amount,
            });
            debtors[d].1 -= amount;
            creditors[c].1 -= amount;
        }

        transfers
    }
}

fn largest(balances: &[(MemberId, Money)]) -> Option<usize> {
    balances
        .iter()
        .enumerate()
        .filter(|(_, (_, amount))| amount.is_positive())
        .max_by(|(_, (a_id, a)), (_, (b_id, b))| a.cmp(b).then_with(|| b_id.cmp(a_id)))
        .map(|(i, _)| i)
}

/// Check an expense on its own and against the roster
pub(crate) fn check_expense(roster: &Roster, expense: &Expense) -> LedgerResult<()> {
    expense.validate()?;

    if !roster.contains(&expense.paid_by) {
        return Err(LedgerError::unknown_payer(expense.paid_by.as_str()));
    }

    if let Some(unknown) = expense.split_between.iter().find(|m| !roster.contains(m)) {
        return Err(LedgerError::unknown_participant(unknown.as_str()));
    }

    Ok(())
}

/// Compute the settlement sheet for a roster and its expenses.
///
/// Every expense is checked before anything is accumulated; a single bad
/// expense rejects the whole computation.
pub fn compute_settlement(roster: &Roster, expenses: &[Expense]) -> LedgerResult<SettlementResult> {
    for expense in expenses {
        check_expense(roster, expense)?;
    }

    let index: HashMap<&MemberId, usize> = roster
        .iter()
        .enumerate()
        .map(|(i, m)| (&m.id, i))
        .collect();

    let mut paid = vec![Money::zero(); roster.len()];
    let mut share = vec![Money::zero(); roster.len()];
    let mut total_expenses = Money::zero();

    for expense in expenses {
        let overflow = || LedgerError::InvalidAmount {
            expense: expense.id.to_string(),
            amount: expense.amount.minor(),
        };

        // Paid and share sums are bounded by the total
        total_expenses = total_expenses
            .checked_add(expense.amount)
            .ok_or_else(overflow)?;

        if let Some(&payer) = index.get(&expense.paid_by) {
            paid[payer] += expense.amount;
        }

        // split_between iterates in ascending id order
        let portions = expense.amount.allocate(expense.split_size());
        for (member, portion) in expense.split_between.iter().zip(portions) {
            if let Some(&i) = index.get(member) {
                share[i] += portion;
            }
        }
    }

    let entries = roster
        .iter()
        .enumerate()
        .map(|(i, member)| SettlementEntry {
            member_id: member.id.clone(),
            paid: paid[i],
            share: share[i],
            owes: share[i] - paid[i],
        })
        .collect();

    debug!(
        members = roster.len(),
        expenses = expenses.len(),
        total = total_expenses.minor(),
        "computed settlement"
    );

    Ok(SettlementResult {
        entries,
        total_expenses,
    })
}
