//! Navigation tabs of the authenticated shell.
//!
//! Exactly one tab is active at any time. The set is closed: adding a tab means
//! touching every exhaustive `match` over [`Tab`], which is what the view-model
//! computation relies on.

use super::error::ShellError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six mutually exclusive content modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// News feed. Initial tab.
    #[default]
    Feed,
    /// Chat list plus the selected conversation.
    Chats,
    /// Call history and call management.
    Calls,
    /// Friends list; starting a chat from here jumps to [`Tab::Chats`].
    Friends,
    /// Own profile editor.
    Profile,
    /// Application settings.
    Settings,
}

impl Tab {
    /// All tabs in sidebar order.
    pub const ALL: [Self; 6] = [
        Self::Feed,
        Self::Chats,
        Self::Calls,
        Self::Friends,
        Self::Profile,
        Self::Settings,
    ];

    /// Lowercase identifier used in config and pipe messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Chats => "chats",
            Self::Calls => "calls",
            Self::Friends => "friends",
            Self::Profile => "profile",
            Self::Settings => "settings",
        }
    }

    /// Human-readable sidebar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Feed => "Feed",
            Self::Chats => "Chats",
            Self::Calls => "Calls",
            Self::Friends => "Friends",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
        }
    }

    /// Position in [`Tab::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Feed => 0,
            Self::Chats => 1,
            Self::Calls => 2,
            Self::Friends => 3,
            Self::Profile => 4,
            Self::Settings => 5,
        }
    }

    /// Tab at a sidebar position, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next tab in sidebar order, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab in sidebar order, wrapping to the last.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == wanted)
            .ok_or_else(|| ShellError::Config(format!("unknown tab: {s}")))
    }
}
