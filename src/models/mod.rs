//! Core data models for TripLedger
//!
//! This module contains the data structures of a trip group: members,
//! shared expenses, decision votes, the trip budget and crowd forecasts.

pub mod budget;
pub mod crowd;
pub mod expense;
pub mod ids;
pub mod member;
pub mod money;
pub mod user;
pub mod voting;

pub use budget::{BudgetCategory, TripBudget};
pub use crowd::{CrowdForecast, HourlyCrowd};
pub use expense::{Expense, ExpenseCategory, ExpenseValidationError};
pub use ids::{ExpenseId, MemberId, VotingItemId};
pub use member::{Member, Roster};
pub use money::Money;
pub use user::UserRecord;
pub use voting::{Vote, VoteChoice, VotingItem, VotingStatus};
