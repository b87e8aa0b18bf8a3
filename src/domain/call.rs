//! Call sessions and participants.
//!
//! A [`CallSession`] exists only while a call is in progress. It is created by
//! the shell when a call is started from a chat and dropped when the call ends.

use super::session::Profile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Media type of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallType {
    Audio,
    Video,
}

impl CallType {
    /// Whether participants join with video turned on.
    #[must_use]
    pub const fn enables_video(self) -> bool {
        matches!(self, Self::Video)
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audio => f.write_str("audio"),
            Self::Video => f.write_str("video"),
        }
    }
}

/// One person in a call, with their media state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub is_audio_enabled: bool,
    pub is_video_enabled: bool,
    pub is_speaking: bool,
}

impl Participant {
    /// The local user placing the call.
    ///
    /// Audio is always on, video follows the call type, and the caller starts
    /// out silent.
    #[must_use]
    pub fn caller(profile: &Profile, call_type: CallType) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            avatar: profile.avatar.clone(),
            is_audio_enabled: true,
            is_video_enabled: call_type.enables_video(),
            is_speaking: false,
        }
    }

    /// A remote chat member joining the call.
    #[must_use]
    pub fn remote(profile: &Profile, is_speaking: bool, call_type: CallType) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            avatar: profile.avatar.clone(),
            is_audio_enabled: true,
            is_video_enabled: call_type.enables_video(),
            is_speaking,
        }
    }
}

/// An in-progress call bound to a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSession {
    pub chat_id: String,
    pub call_type: CallType,
    /// Caller first, then remote members in roster order.
    pub participants: Vec<Participant>,
    /// Unix timestamp (seconds) when the call started.
    pub started_at: i64,
}

impl CallSession {
    /// Starts a call session now.
    #[must_use]
    pub fn new(chat_id: String, call_type: CallType, participants: Vec<Participant>) -> Self {
        Self {
            chat_id,
            call_type,
            participants,
            started_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Elapsed call time as `mm:ss` (or `h:mm:ss` past an hour).
    ///
    /// Clock skew that puts `now` before `started_at` reads as `00:00`.
    ///
    /// # Examples
    ///
    /// ```
    /// use socialshell::domain::{CallSession, CallType};
    ///
    /// let mut call = CallSession::new("c1".into(), CallType::Audio, vec![]);
    /// call.started_at = 1_000;
    /// assert_eq!(call.elapsed_label(1_075), "01:15");
    /// assert_eq!(call.elapsed_label(1_000 + 3_725), "1:02:05");
    /// ```
    #[must_use]
    pub fn elapsed_label(&self, now: i64) -> String {
        let secs = (now - self.started_at).max(0);
        let (hours, mins, secs) = (secs / 3600, (secs % 3600) / 60, secs % 60);
        if hours > 0 {
            format!("{hours}:{mins:02}:{secs:02}")
        } else {
            format!("{mins:02}:{secs:02}")
        }
    }
}
