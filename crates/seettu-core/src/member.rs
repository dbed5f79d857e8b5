//! Roster member type

use crate::identifiers::MemberId;
use serde::{Deserialize, Serialize};

/// A pool member.
///
/// Created at roster initialization; only the `paid` flag is mutated
/// afterwards, by the payment-toggle command. Members are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable identifier within the roster.
    pub id: MemberId,
    /// Display name.
    pub name: String,
    /// Whether this member has paid the contribution for the current round.
    pub paid: bool,
    /// Contact number, as entered (may contain spaces).
    pub phone: String,
}

impl Member {
    /// Create a new member with an unpaid contribution.
    pub fn new(id: MemberId, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            paid: false,
            phone: phone.into(),
        }
    }

    /// Create a member with the paid flag already set.
    pub fn paid(id: MemberId, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            paid: true,
            ..Self::new(id, name, phone)
        }
    }
}

/// The hardcoded current user.
///
/// There is no authentication in this scope; the admin flag drives display
/// only and gates nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// The user's roster identifier.
    pub id: MemberId,
    /// Display name for the dashboard greeting.
    pub name: String,
    /// Whether the admin badge is shown.
    pub is_admin: bool,
}
