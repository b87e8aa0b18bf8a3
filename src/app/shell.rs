//! State owned by the authenticated shell.
//!
//! [`Shell`] holds the five independent pieces of shell state: active tab,
//! selected chat, active call, current track and player visibility. Each
//! operation writes only its own slot, with one documented exception:
//! [`Shell::start_chat`] selects a chat and switches to [`Tab::Chats`] in the
//! same write.
//!
//! # Invariants
//!
//! - A call can only exist while a chat is selected.
//! - At most one call exists at a time; starting another replaces it.
//! - Hiding the music player never clears the current track.

use crate::domain::error::Result;
use crate::domain::{CallSession, CallType, Participant, Profile, Tab, Track};
use crate::roster::Roster;

/// Authenticated shell state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shell {
    active_tab: Tab,
    selected_chat_id: Option<String>,
    active_call: Option<CallSession>,
    current_track: Option<Track>,
    music_player_visible: bool,
}

impl Shell {
    /// Creates a shell starting on `tab` with everything else empty.
    #[must_use]
    pub fn starting_on(tab: Tab) -> Self {
        Self {
            active_tab: tab,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn active_tab(&self) -> Tab {
        self.active_tab
    }

    #[must_use]
    pub fn selected_chat_id(&self) -> Option<&str> {
        self.selected_chat_id.as_deref()
    }

    #[must_use]
    pub const fn active_call(&self) -> Option<&CallSession> {
        self.active_call.as_ref()
    }

    #[must_use]
    pub const fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    #[must_use]
    pub const fn is_music_player_visible(&self) -> bool {
        self.music_player_visible
    }

    /// Whether the player overlay is on screen: a track exists and the player
    /// has not been closed.
    #[must_use]
    pub const fn music_player_shown(&self) -> bool {
        self.current_track.is_some() && self.music_player_visible
    }

    pub fn select_tab(&mut self, tab: Tab) {
        tracing::debug!(from = %self.active_tab, to = %tab, "tab selected");
        self.active_tab = tab;
    }

    /// Selects a chat from the chat list. The active tab is left alone.
    pub fn select_chat(&mut self, chat_id: &str) {
        tracing::debug!(chat_id = %chat_id, "chat selected");
        self.selected_chat_id = Some(chat_id.to_string());
    }

    /// Opens a chat from the friends list: selects it and jumps to the chats tab.
    pub fn start_chat(&mut self, chat_id: &str) {
        tracing::debug!(chat_id = %chat_id, from = %self.active_tab, "chat started from friends");
        self.selected_chat_id = Some(chat_id.to_string());
        self.active_tab = Tab::Chats;
    }

    /// Starts a call in the selected chat.
    ///
    /// Returns `Ok(false)` without touching state when no chat is selected.
    /// Otherwise the participants are the caller followed by the chat's other
    /// members from `roster`, and any existing call is replaced.
    ///
    /// # Errors
    ///
    /// Propagates roster lookup failures; the active call is left unchanged.
    pub fn start_call(
        &mut self,
        call_type: CallType,
        caller: &Profile,
        roster: &dyn Roster,
    ) -> Result<bool> {
        let Some(chat_id) = self.selected_chat_id.clone() else {
            tracing::debug!(call_type = %call_type, "no chat selected, call not started");
            return Ok(false);
        };

        let members = roster.members(&chat_id)?;

        let mut participants = Vec::with_capacity(members.len() + 1);
        participants.push(Participant::caller(caller, call_type));
        participants.extend(
            members
                .iter()
                .filter(|entry| entry.profile.id != caller.id)
                .map(|entry| Participant::remote(&entry.profile, entry.is_speaking, call_type)),
        );

        if let Some(previous) = &self.active_call {
            tracing::debug!(previous_chat = %previous.chat_id, "replacing active call");
        }

        tracing::debug!(
            chat_id = %chat_id,
            call_type = %call_type,
            participant_count = participants.len(),
            "call started"
        );

        self.active_call = Some(CallSession::new(chat_id, call_type, participants));
        Ok(true)
    }

    /// Ends the active call. Returns whether a call was actually ended.
    pub fn end_call(&mut self) -> bool {
        let ended = self.active_call.take();
        if let Some(call) = &ended {
            tracing::debug!(chat_id = %call.chat_id, "call ended");
        }
        ended.is_some()
    }

    /// Sets the now-playing track and shows the player.
    pub fn play_track(&mut self, track: Track) {
        tracing::debug!(track_id = %track.id, title = %track.title, "track loaded");
        self.current_track = Some(track);
        self.music_player_visible = true;
    }

    /// Hides the player. The track is kept so it can be reopened.
    pub fn close_music_player(&mut self) {
        self.music_player_visible = false;
    }

    /// Shows or hides the player. Showing requires a track.
    ///
    /// Returns whether the on-screen state changed.
    pub fn toggle_music_player(&mut self) -> bool {
        if self.music_player_visible {
            self.music_player_visible = false;
            return self.current_track.is_some();
        }
        if self.current_track.is_none() {
            return false;
        }
        self.music_player_visible = true;
        true
    }
}
