//! Roster abstraction.
//!
//! The shell only needs the members of one chat at the moment a call starts.

use crate::domain::error::Result;
use crate::domain::Profile;
use serde::{Deserialize, Serialize};

/// A chat member as reported by the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(flatten)]
    pub profile: Profile,
    /// Whether the member is currently talking.
    #[serde(default)]
    pub is_speaking: bool,
}

impl RosterEntry {
    #[must_use]
    pub const fn new(profile: Profile) -> Self {
        Self {
            profile,
            is_speaking: false,
        }
    }

    #[must_use]
    pub const fn speaking(mut self) -> Self {
        self.is_speaking = true;
        self
    }
}

/// Source of chat membership.
///
/// # Implementations
///
/// - [`JsonRoster`](super::JsonRoster): members read from a JSON file
/// - [`EmptyRoster`]: every chat has no other members
pub trait Roster: Send + Sync {
    /// Returns the members of `chat_id`, in display order.
    ///
    /// An unknown chat yields an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source cannot be queried.
    fn members(&self, chat_id: &str) -> Result<Vec<RosterEntry>>;
}

/// Roster with no members in any chat.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyRoster;

impl Roster for EmptyRoster {
    fn members(&self, _chat_id: &str) -> Result<Vec<RosterEntry>> {
        Ok(Vec::new())
    }
}
