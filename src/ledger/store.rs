//! Expense record store
//!
//! Holds the roster and the ordered list of recorded expenses. An expense is
//! fully checked before it is appended, so a rejected expense leaves the
//! store exactly as it was.

use tracing::debug;

use super::settlement::{check_expense, compute_settlement, SettlementResult};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money, Roster};

/// In-memory store of a group's expenses
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    roster: Roster,
    expenses: Vec<Expense>,
    total: Money,
}

impl ExpenseStore {
    /// Create an empty store for a roster
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            expenses: Vec::new(),
            total: Money::zero(),
        }
    }

    /// Create a store from existing expenses, recording them in order
    pub fn with_expenses(roster: Roster, expenses: Vec<Expense>) -> LedgerResult<Self> {
        let mut store = Self::new(roster);
        for expense in expenses {
            store.record(expense)?;
        }
        Ok(store)
    }

    /// Record an expense after validating it against the roster
    pub fn record(&mut self, expense: Expense) -> LedgerResult<&Expense> {
        check_expense(&self.roster, &expense)?;

        if self.get(&expense.id).is_some() {
            return Err(LedgerError::Duplicate {
                entity_type: "Expense",
                identifier: expense.id.to_string(),
            });
        }

        let total = self
            .total
            .checked_add(expense.amount)
            .ok_or_else(|| LedgerError::InvalidAmount {
                expense: expense.id.to_string(),
                amount: expense.amount.minor(),
            })?;

        debug!(id = %expense.id, amount = expense.amount.minor(), "recorded expense");
        self.total = total;
        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Look up an expense by id
    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    /// Expenses in the order they were recorded
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses with the given category tag
    pub fn by_category(&self, category: ExpenseCategory) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of all recorded amounts
    pub fn total(&self) -> Money {
        self.total
    }

    /// Recompute the settlement sheet from the recorded expenses
    pub fn settlement(&self) -> LedgerResult<SettlementResult> {
        compute_settlement(&self.roster, &self.expenses)
    }
}
