//! Shared DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless. The auth reducer treats them as opaque values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A Boards account as returned by the backend users API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address; guests have none.
    #[serde(default)]
    pub email: Option<String>,
    /// Whether the account was created through guest sign-in.
    #[serde(default)]
    pub is_guest: bool,
    /// Whether the email address has been verified.
    #[serde(default)]
    pub is_verified: bool,
    /// RFC 3339 creation timestamp, if the backend sent one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// RFC 3339 last-update timestamp, if the backend sent one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl User {
    /// Short label for UI chrome: the display name, or `"Guest"` when blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() { "Guest" } else { name }
    }
}
