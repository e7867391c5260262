//! Strongly-typed ID wrappers for all entity types
//!
//! Ids are plain strings (group snapshots use short ids such as `"1"`), but
//! each entity gets its own newtype so a member id can never be passed where
//! an expense id is expected.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $generated_prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing string
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Mint a fresh random ID
            pub fn generate() -> Self {
                let uuid = Uuid::new_v4().simple().to_string();
                Self(format!("{}{}", $generated_prefix, &uuid[..12]))
            }

            /// Get the underlying string
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Check whether the ID is blank
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().to_string()))
            }
        }
    };
}

define_id!(MemberId, "mem-");
define_id!(ExpenseId, "exp-");
define_id!(VotingItemId, "vote-");
