//! Group ledger engine
//!
//! Pure computations over an explicit snapshot of a group: the settlement
//! calculator, the vote tally, and the expense store that feeds them.

pub mod settlement;
pub mod store;
pub mod tally;

pub use settlement::{compute_settlement, SettlementEntry, SettlementResult, Transfer};
pub use store::ExpenseStore;
pub use tally::{compute_vote_tally, VoteClassification, VoteTallyResult};
