//! Music tracks for the player overlay.

use serde::{Deserialize, Serialize};

/// A piece of audio content eligible for playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub url: String,
    /// Length in seconds.
    pub duration: f64,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Track {
    /// Duration formatted as `m:ss`.
    ///
    /// Negative or non-finite durations render as `0:00`.
    ///
    /// # Examples
    ///
    /// ```
    /// use socialshell::domain::Track;
    ///
    /// let track = Track {
    ///     id: "t1".into(),
    ///     title: "Song".into(),
    ///     artist: "Band".into(),
    ///     url: "https://example.invalid/song.mp3".into(),
    ///     duration: 214.6,
    ///     avatar: None,
    /// };
    /// assert_eq!(track.duration_label(), "3:34");
    /// ```
    #[must_use]
    pub fn duration_label(&self) -> String {
        let total = if self.duration.is_finite() && self.duration > 0.0 {
            self.duration.floor() as u64
        } else {
            0
        };
        format!("{}:{:02}", total / 60, total % 60)
    }
}
