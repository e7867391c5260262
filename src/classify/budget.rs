//! Budget health classification and the trip budget tracker

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Bound, ThresholdTable};
use crate::models::{BudgetCategory, Money, TripBudget};

/// Health of a budget category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Good,
    Warning,
    Over,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Warning => write!(f, "warning"),
            Self::Over => write!(f, "over"),
        }
    }
}

/// Lower bounds are exclusive
pub const BUDGET_STATUSES: ThresholdTable<BudgetStatus> = ThresholdTable::new(
    &[
        (Bound::Above(100.0), BudgetStatus::Over),
        (Bound::Above(80.0), BudgetStatus::Warning),
    ],
    BudgetStatus::Good,
);

/// Status together with the percentage it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetStatusReport {
    pub status: BudgetStatus,
    pub percentage: f64,
}

impl BudgetStatusReport {
    /// Percentage rounded for badges
    pub fn rounded_percentage(&self) -> i64 {
        self.percentage.round() as i64
    }

    /// Percentage capped at 100 for progress bars
    pub fn progress(&self) -> f64 {
        self.percentage.min(100.0)
    }
}

/// Classify spending against an allocation.
///
/// A zero allocation has no meaningful percentage: it reports 0% and `good`
/// when nothing is spent, and `over` otherwise.
pub fn budget_status(allocated: Money, spent: Money) -> BudgetStatusReport {
    if allocated.minor() <= 0 {
        return if spent.is_positive() {
            BudgetStatusReport {
                status: BudgetStatus::Over,
                percentage: 100.0,
            }
        } else {
            BudgetStatusReport {
                status: BudgetStatus::Good,
                percentage: 0.0,
            }
        };
    }

    let percentage = spent.minor() as f64 / allocated.minor() as f64 * 100.0;
    BudgetStatusReport {
        status: BUDGET_STATUSES.classify(percentage),
        percentage,
    }
}

/// Derived view over a trip budget
#[derive(Debug, Clone, Copy)]
pub struct BudgetTracker<'a> {
    budget: &'a TripBudget,
}

impl<'a> BudgetTracker<'a> {
    pub fn new(budget: &'a TripBudget) -> Self {
        Self { budget }
    }

    pub fn total_budget(&self) -> Money {
        self.budget.total
    }

    pub fn total_allocated(&self) -> Money {
        self.budget.categories.iter().map(|c| c.allocated).sum()
    }

    pub fn total_spent(&self) -> Money {
        self.budget.categories.iter().map(|c| c.spent).sum()
    }

    /// Total budget minus total spent; negative when the trip is over budget
    pub fn remaining(&self) -> Money {
        self.total_budget() - self.total_spent()
    }

    /// Overall spend status against the total budget
    pub fn overall_status(&self) -> BudgetStatusReport {
        budget_status(self.total_budget(), self.total_spent())
    }

    pub fn over_budget(&self) -> Vec<&'a BudgetCategory> {
        self.budget.categories.iter().filter(|c| c.is_over()).collect()
    }

    pub fn under_budget(&self) -> Vec<&'a BudgetCategory> {
        self.budget.categories.iter().filter(|c| c.is_under()).collect()
    }

    /// Categories paired with their status, in budget order
    pub fn statuses(&self) -> Vec<(&'a BudgetCategory, BudgetStatusReport)> {
        self.budget
            .categories
            .iter()
            .map(|c| (c, budget_status(c.allocated, c.spent)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rupees(n: i64) -> Money {
        Money::from_major(n)
    }

    fn trip_budget() -> TripBudget {
        TripBudget {
            total: rupees(50000),
            categories: vec![
                BudgetCategory::new("Accommodation", rupees(20000), rupees(17500)),
                BudgetCategory::new("Transportation", rupees(12000), rupees(14200)),
                BudgetCategory::new("Food & Dining", rupees(8000), rupees(6200)),
                BudgetCategory::new("Activities", rupees(7000), rupees(5800)),
                BudgetCategory::new("Miscellaneous", rupees(3000), rupees(1200)),
            ],
        }
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(budget_status(rupees(100), rupees(101)).status, BudgetStatus::Over);
        assert_eq!(budget_status(rupees(100), rupees(100)).status, BudgetStatus::Warning);
        assert_eq!(budget_status(rupees(100), rupees(81)).status, BudgetStatus::Warning);
        assert_eq!(budget_status(rupees(100), rupees(80)).status, BudgetStatus::Good);
        assert_eq!(budget_status(rupees(100), rupees(0)).status, BudgetStatus::Good);
    }

    #[test]
    fn test_zero_allocation() {
        assert_eq!(budget_status(Money::zero(), Money::zero()).status, BudgetStatus::Good);
        assert_eq!(budget_status(Money::zero(), rupees(1)).status, BudgetStatus::Over);
    }

    #[test]
    fn test_report_helpers() {
        let report = budget_status(rupees(12000), rupees(14200));
        assert_eq!(report.rounded_percentage(), 118);
        assert_eq!(report.progress(), 100.0);
    }

    #[test]
    fn test_tracker_totals() {
        let budget = trip_budget();
        let tracker = BudgetTracker::new(&budget);
        assert_eq!(tracker.total_allocated(), rupees(50000));
        assert_eq!(tracker.total_spent(), rupees(44900));
        assert_eq!(tracker.remaining(), rupees(5100));
        assert_eq!(tracker.overall_status().status, BudgetStatus::Warning);
    }

    #[test]
    fn test_tracker_over_and_under() {
        let budget = trip_budget();
        let tracker = BudgetTracker::new(&budget);
        let over: Vec<&str> = tracker.over_budget().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(over, vec!["Transportation"]);
        assert_eq!(tracker.under_budget().len(), 4);

        let statuses: Vec<BudgetStatus> = tracker.statuses().iter().map(|(_, r)| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                BudgetStatus::Warning,
                BudgetStatus::Over,
                BudgetStatus::Good,
                BudgetStatus::Warning,
                BudgetStatus::Good,
            ]
        );
    }
}
