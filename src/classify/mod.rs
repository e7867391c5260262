//! Threshold classifiers
//!
//! Status labels (vote standing, crowd level, budget health) are defined as
//! ordered tables of bounds evaluated top-down. The first row whose bound
//! admits the value wins; the table's fallback label covers everything else.

pub mod budget;
pub mod crowd;

pub use budget::{budget_status, BudgetStatus, BudgetStatusReport, BudgetTracker};
pub use crowd::{crowd_level, CrowdLevel};

/// A bound on a numeric value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// value >= limit
    AtLeast(f64),
    /// value <= limit
    AtMost(f64),
    /// value > limit
    Above(f64),
}

impl Bound {
    /// Check whether the value satisfies this bound
    pub fn admits(&self, value: f64) -> bool {
        match *self {
            Bound::AtLeast(limit) => value >= limit,
            Bound::AtMost(limit) => value <= limit,
            Bound::Above(limit) => value > limit,
        }
    }
}

/// An ordered list of `(bound, label)` rows with a fallback label
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable<L: 'static> {
    rows: &'static [(Bound, L)],
    fallback: L,
}

impl<L: Copy + 'static> ThresholdTable<L> {
    pub const fn new(rows: &'static [(Bound, L)], fallback: L) -> Self {
        Self { rows, fallback }
    }

    /// Label of the first row admitting `value`, or the fallback
    pub fn classify(&self, value: f64) -> L {
        self.rows
            .iter()
            .find(|(bound, _)| bound.admits(value))
            .map(|(_, label)| *label)
            .unwrap_or(self.fallback)
    }
}
