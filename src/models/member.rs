//! Group member and roster models
//!
//! The roster is fixed when the group forms. It keeps members in the order
//! they joined and guarantees unique ids.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MemberId;
use crate::error::{LedgerError, LedgerResult};

/// A member of a trip group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,

    /// Display name
    pub name: String,

    /// Whether this member administers the group
    #[serde(default, alias = "isAdmin")]
    pub is_admin: bool,
}

impl Member {
    /// Create a new non-admin member
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_admin: false,
        }
    }

    /// Create a new admin member
    pub fn admin(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            is_admin: true,
            ..Self::new(id, name)
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_admin {
            write!(f, "{} (admin)", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// The fixed, non-empty set of members in a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    /// Build a roster, rejecting an empty member list or duplicate ids
    pub fn new(members: Vec<Member>) -> LedgerResult<Self> {
        if members.is_empty() {
            return Err(LedgerError::EmptyRoster);
        }

        for (i, member) in members.iter().enumerate() {
            if member.id.is_blank() {
                return Err(LedgerError::Validation(format!(
                    "Member '{}' has a blank id",
                    member.name
                )));
            }
            if members[..i].iter().any(|m| m.id == member.id) {
                return Err(LedgerError::Duplicate {
                    entity_type: "Member",
                    identifier: member.id.to_string(),
                });
            }
        }

        Ok(Self { members })
    }

    /// Check whether an id belongs to the roster
    pub fn contains(&self, id: &MemberId) -> bool {
        self.members.iter().any(|m| &m.id == id)
    }

    /// Look up a member by id
    pub fn get(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    /// Find a member by id, or by name ignoring case
    pub fn find(&self, query: &str) -> Option<&Member> {
        let query = query.trim();
        self.members
            .iter()
            .find(|m| m.id.as_str() == query)
            .or_else(|| self.members.iter().find(|m| m.name.eq_ignore_ascii_case(query)))
    }

    /// Display name for an id, falling back to the id itself
    pub fn name_of(&self, id: &MemberId) -> String {
        self.get(id)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Iterate members in roster order
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for a constructed roster
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members as a slice
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let members = Vec::<Member>::deserialize(deserializer)?;
        Roster::new(members).map_err(serde::de::Error::custom)
    }
}
