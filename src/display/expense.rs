//! Expense list display

use chrono::NaiveDate;
use std::fmt::Write;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Expense, Roster};

#[derive(Tabled)]
struct ExpenseLine {
    #[tabled(rename = "")]
    icon: &'static str,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Paid by")]
    paid_by: String,
    #[tabled(rename = "Split")]
    split: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a date with the configured pattern, falling back to ISO format
/// when the pattern is invalid
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.to_string();
    }
    out
}

/// Format the expense list
pub fn format_expense_list(expenses: &[Expense], roster: &Roster, settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let lines: Vec<ExpenseLine> = expenses
        .iter()
        .map(|e| {
            let split = if e.split_size() == roster.len() {
                "everyone".to_string()
            } else {
                e.split_between
                    .iter()
                    .map(|id| roster.name_of(id))
                    .collect::<Vec<_>>()
                    .join(", ")
            };

            ExpenseLine {
                icon: e.category.icon(),
                description: e.description.clone(),
                paid_by: roster.name_of(&e.paid_by),
                split,
                date: format_date(e.date, &settings.date_format),
                amount: settings.format_money(e.amount),
            }
        })
        .collect();

    let total: crate::models::Money = expenses.iter().map(|e| e.amount).sum();

    let mut table = Table::new(lines);
    table.with(Style::rounded());

    format!("{}\nTotal: {}\n", table, settings.format_money(total))
}
