//! JSON file-backed roster.
//!
//! The whole file is read once at construction and kept in memory.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "chats": {
//!     "c1": [
//!       { "id": "u2", "name": "Anna", "avatar": "", "is_speaking": true }
//!     ]
//!   }
//! }
//! ```

use crate::domain::error::{Result, ShellError};
use crate::roster::backend::{Roster, RosterEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RosterData {
    version: u32,
    #[serde(default)]
    chats: HashMap<String, Vec<RosterEntry>>,
}

impl Default for RosterData {
    fn default() -> Self {
        Self {
            version: 1,
            chats: HashMap::new(),
        }
    }
}

/// Roster loaded from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonRoster {
    data: RosterData,
}

impl JsonRoster {
    /// Opens a roster file.
    ///
    /// A missing file is treated as an empty roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not valid
    /// roster JSON.
    pub fn new(file_path: &Path) -> Result<Self> {
        tracing::debug!(path = ?file_path, "loading roster");

        let data = if file_path.exists() {
            Self::load_from_file(file_path)?
        } else {
            tracing::debug!("roster file missing, using empty roster");
            RosterData::default()
        };

        tracing::debug!(
            version = data.version,
            chat_count = data.chats.len(),
            "roster loaded"
        );

        Ok(Self { data })
    }

    /// Builds a roster from in-memory chat membership.
    #[must_use]
    pub fn from_chats(chats: HashMap<String, Vec<RosterEntry>>) -> Self {
        Self {
            data: RosterData { version: 1, chats },
        }
    }

    fn load_from_file(path: &Path) -> Result<RosterData> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| ShellError::Storage(format!("invalid roster file {}: {e}", path.display())))
    }
}

impl Roster for JsonRoster {
    fn members(&self, chat_id: &str) -> Result<Vec<RosterEntry>> {
        Ok(self.data.chats.get(chat_id).cloned().unwrap_or_default())
    }
}
