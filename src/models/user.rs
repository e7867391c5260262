//! Cached user profile
//!
//! The identity itself comes from an external profile provider; only the
//! fields needed to greet the user again are cached in settings.

use serde::{Deserialize, Serialize};

/// The user record cached between sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserRecord {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, alias = "isLoggedIn")]
    pub is_logged_in: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, alias = "travelStyle", skip_serializing_if = "Option::is_none")]
    pub travel_style: Option<String>,
}

impl UserRecord {
    /// Create a logged-in user record
    pub fn logged_in(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            is_logged_in: true,
            ..Self::default()
        }
    }

    /// A cached record counts as a returning user only if it carries a name,
    /// an email, or a logged-in marker
    pub fn is_recognizable(&self) -> bool {
        !self.name.trim().is_empty() || !self.email.trim().is_empty() || self.is_logged_in
    }
}
