//! Trip budget category model
//!
//! Tracks how much of the trip budget is allocated to a category and how
//! much has been spent against it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// A budget category for a trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Category name
    pub name: String,

    /// Amount allocated to this category
    pub allocated: Money,

    /// Amount spent so far
    #[serde(default)]
    pub spent: Money,

    /// Icon shown next to the category
    #[serde(default)]
    pub icon: String,
}

impl BudgetCategory {
    /// Create a new category
    pub fn new(name: impl Into<String>, allocated: Money, spent: Money) -> Self {
        Self {
            name: name.into(),
            allocated,
            spent,
            icon: String::new(),
        }
    }

    /// Allocated minus spent (negative when overspent)
    pub fn left(&self) -> Money {
        self.allocated - self.spent
    }

    /// Amount spent beyond the allocation, zero when within budget
    pub fn overspend(&self) -> Money {
        (self.spent - self.allocated).floor_zero()
    }

    /// Check if spending exceeds the allocation
    pub fn is_over(&self) -> bool {
        self.spent > self.allocated
    }

    /// Check if spending is below the allocation
    pub fn is_under(&self) -> bool {
        self.spent < self.allocated
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} / {}", self.name, self.spent, self.allocated)
    }
}

/// The overall trip budget with its categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripBudget {
    /// Total trip budget
    pub total: Money,

    /// Per-category allocations
    #[serde(default)]
    pub categories: Vec<BudgetCategory>,
}

impl TripBudget {
    /// Check that amounts are non-negative and category sums fit
    pub fn validate(&self) -> LedgerResult<()> {
        if self.total.is_negative() {
            return Err(LedgerError::Validation("Trip budget total is negative".into()));
        }

        let mut allocated = Money::zero();
        let mut spent = Money::zero();
        for category in &self.categories {
            if category.allocated.is_negative() || category.spent.is_negative() {
                return Err(LedgerError::Validation(format!(
                    "Budget category '{}' has a negative amount",
                    category.name
                )));
            }
            let overflow = || {
                LedgerError::Validation(format!(
                    "Budget totals overflow at category '{}'",
                    category.name
                ))
            };
            allocated = allocated.checked_add(category.allocated).ok_or_else(overflow)?;
            spent = spent.checked_add(category.spent).ok_or_else(overflow)?;
        }

        Ok(())
    }
}
