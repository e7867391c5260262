//! Shared expense model
//!
//! An expense is paid by one member and split evenly between a set of
//! members. Expenses are immutable once recorded.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::ids::{ExpenseId, MemberId};
use super::money::Money;

/// Category tag of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Accommodation,
    Activities,
    #[default]
    #[serde(other)]
    Other,
}

impl ExpenseCategory {
    /// Icon shown next to the expense
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍽️",
            Self::Transport => "🚗",
            Self::Accommodation => "🏨",
            Self::Activities => "🎯",
            Self::Other => "💰",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Food => write!(f, "Food"),
            Self::Transport => write!(f, "Transport"),
            Self::Accommodation => write!(f, "Accommodation"),
            Self::Activities => write!(f, "Activities"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A shared group expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount paid (non-negative)
    pub amount: Money,

    /// Member who paid
    #[serde(alias = "paidBy")]
    pub paid_by: MemberId,

    /// Members sharing the cost; duplicates collapse
    #[serde(alias = "splitBetween")]
    pub split_between: BTreeSet<MemberId>,

    /// Category tag
    #[serde(default)]
    pub category: ExpenseCategory,

    /// Date the expense was incurred
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense with a generated id
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        paid_by: impl Into<MemberId>,
        split_between: impl IntoIterator<Item = MemberId>,
        category: ExpenseCategory,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::generate(),
            description: description.into(),
            amount,
            paid_by: paid_by.into(),
            split_between: split_between.into_iter().collect(),
            category,
            date,
        }
    }

    /// Replace the generated id with a caller-chosen one
    pub fn with_id(mut self, id: impl Into<ExpenseId>) -> Self {
        self.id = id.into();
        self
    }

    /// Number of members sharing this expense
    pub fn split_size(&self) -> usize {
        self.split_between.len()
    }

    /// Check whether a member shares this expense
    pub fn is_shared_by(&self, member: &MemberId) -> bool {
        self.split_between.contains(member)
    }

    /// Validate the expense on its own, without a roster
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription(self.id.to_string()));
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount {
                expense: self.id.to_string(),
                amount: self.amount.minor(),
            });
        }

        if self.split_between.is_empty() {
            return Err(ExpenseValidationError::EmptySplit(self.id.to_string()));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} ({})",
            self.category.icon(),
            self.description,
            self.amount,
            self.date
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription(String),
    NegativeAmount { expense: String, amount: i64 },
    EmptySplit(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription(id) => write!(f, "Expense '{}' has no description", id),
            Self::NegativeAmount { expense, amount } => {
                write!(f, "Expense '{}' has a negative amount: {}", expense, amount)
            }
            Self::EmptySplit(id) => write!(f, "Expense '{}' has an empty split-set", id),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
