//! Expenses CLI command

use std::io::Write;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseCategory, Money};
use crate::storage::GroupSnapshot;

/// Filters for the expense list
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub category: Option<ExpenseCategory>,
    /// Member id or name; keeps expenses this member shares
    pub member: Option<String>,
    pub min_amount: Option<Money>,
}

/// Handle the expenses command
pub fn handle_expenses_command<W: Write>(
    snapshot: &GroupSnapshot,
    settings: &Settings,
    filter: &ExpenseFilter,
    out: &mut W,
) -> LedgerResult<()> {
    let store = snapshot.expense_store()?;

    let member = match &filter.member {
        Some(query) => Some(
            store
                .roster()
                .find(query)
                .ok_or_else(|| LedgerError::member_not_found(query.as_str()))?,
        ),
        None => None,
    };

    let candidates: Vec<&Expense> = match filter.category {
        Some(category) => store.by_category(category),
        None => store.expenses().iter().collect(),
    };

    let expenses: Vec<Expense> = candidates
        .into_iter()
        .filter(|e| member.map_or(true, |m| e.is_shared_by(&m.id)))
        .filter(|e| filter.min_amount.map_or(true, |min| e.amount >= min))
        .cloned()
        .collect();

    writeln!(out, "{}", format_expense_list(&expenses, store.roster(), settings))?;
    Ok(())
}
