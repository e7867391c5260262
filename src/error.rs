//! Custom error types for TripLedger
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::expense::ExpenseValidationError;

/// The main error type for TripLedger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// An expense or vote names a member that is not on the roster
    #[error("Invalid reference: {entity_type} '{identifier}' is not a group member")]
    InvalidReference {
        entity_type: &'static str,
        identifier: String,
    },

    /// An expense has an empty split-set
    #[error("Invalid split: expense '{0}' is not split between any members")]
    InvalidSplit(String),

    /// An expense amount is negative
    #[error("Invalid amount for expense '{expense}': {amount}")]
    InvalidAmount { expense: String, amount: i64 },

    /// The member roster is empty
    #[error("Group has no members")]
    EmptyRoster,

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Vote cast on an item that is no longer active
    #[error("Voting is closed for '{0}'")]
    VotingClosed(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create an invalid reference error for a payer
    pub fn unknown_payer(identifier: impl Into<String>) -> Self {
        Self::InvalidReference {
            entity_type: "Payer",
            identifier: identifier.into(),
        }
    }

    /// Create an invalid reference error for a split participant
    pub fn unknown_participant(identifier: impl Into<String>) -> Self {
        Self::InvalidReference {
            entity_type: "Participant",
            identifier: identifier.into(),
        }
    }

    /// Create an invalid reference error for a voter
    pub fn unknown_voter(identifier: impl Into<String>) -> Self {
        Self::InvalidReference {
            entity_type: "Voter",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for members
    pub fn member_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Member",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for voting items
    pub fn voting_item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Voting item",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for attractions
    pub fn attraction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Attraction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is an invalid reference error
    pub fn is_invalid_reference(&self) -> bool {
        matches!(self, Self::InvalidReference { .. })
    }

    /// Check if this is an invalid split error
    pub fn is_invalid_split(&self) -> bool {
        matches!(self, Self::InvalidSplit(_))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidAmount { .. } | Self::EmptyRoster
        )
    }
}

impl From<ExpenseValidationError> for LedgerError {
    fn from(err: ExpenseValidationError) -> Self {
        match err {
            ExpenseValidationError::EmptySplit(expense) => Self::InvalidSplit(expense),
            ExpenseValidationError::NegativeAmount { expense, amount } => {
                Self::InvalidAmount { expense, amount }
            }
            ExpenseValidationError::EmptyDescription(_) => Self::Validation(err.to_string()),
        }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for LedgerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for TripLedger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
