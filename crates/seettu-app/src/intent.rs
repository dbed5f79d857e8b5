//! # Intents: User Actions as Commands
//!
//! An intent represents a user action dispatched into the app core. Views
//! never mutate pool state directly; they hand one of these to
//! [`AppCore::dispatch`](crate::AppCore::dispatch) and re-read their
//! snapshot afterwards.

use seettu_core::MemberId;
use serde::{Deserialize, Serialize};

/// Screen identifier for navigation intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    /// Dashboard/home screen
    Dashboard,
    /// Member roster screen
    Members,
    /// Lucky draw screen
    Draw,
    /// Winner history screen
    History,
}

/// A user action dispatched into the app core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Flip a member's payment flag
    TogglePayment {
        /// Target member
        member: MemberId,
    },

    /// Run the lucky draw over the current eligible set
    StartDraw,

    /// Flip the cosmetic group-call flag
    ToggleGroupCall,

    /// Initiate a call to a member's stored number
    CallMember {
        /// Target member
        member: MemberId,
    },

    /// Navigate to a screen
    NavigateTo {
        /// Target screen
        screen: Screen,
    },
}

impl Intent {
    /// Get a human-readable description of this intent
    pub fn description(&self) -> &'static str {
        match self {
            Self::TogglePayment { .. } => "toggle payment",
            Self::StartDraw => "start draw",
            Self::ToggleGroupCall => "toggle group call",
            Self::CallMember { .. } => "call member",
            Self::NavigateTo { .. } => "navigate",
        }
    }

    /// Check if this intent mutates pool state.
    ///
    /// Navigation and call initiation leave the roster and history untouched.
    pub fn mutates_pool(&self) -> bool {
        !matches!(self, Self::NavigateTo { .. } | Self::CallMember { .. })
    }
}
