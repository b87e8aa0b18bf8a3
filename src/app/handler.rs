//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place state changes. It applies one event,
//! reports whether a redraw is needed, and returns the side effects for the
//! plugin runtime to execute.
//!
//! # Event Types
//!
//! - **Session**: `SessionChanged` from the auth provider
//! - **Auth screen**: `SwitchToRegister`, `SwitchToLogin`, `ToggleAuthMode`
//! - **Navigation**: `SelectTab`, `NextTab`, `PrevTab`
//! - **Chats**: `SelectChat` (chat list), `StartChat` (friends list)
//! - **Calls**: `StartCall`, `EndCall`
//! - **Music**: `PlayTrack`, `CloseMusicPlayer`, `ToggleMusicPlayer`
//! - **Runtime**: `Tick`, `CloseFocus`
//!
//! Auth screen events are ignored while signed in, and shell events are
//! ignored while the auth screen or the loading skeleton is showing.
//!
//! # Example
//!
//! ```rust
//! use socialshell::app::{handle_event, AppState, Event};
//! use socialshell::domain::{Profile, Session, Tab};
//! use socialshell::roster::EmptyRoster;
//! use socialshell::ui::Theme;
//! use std::sync::Arc;
//!
//! let session = Session::signed_in(Profile::new("u1", "Ada"));
//! let mut state = AppState::new(session, Theme::default(), Arc::new(EmptyRoster));
//! let (render, _actions) = handle_event(&mut state, &Event::SelectTab(Tab::Friends))?;
//! assert!(render);
//! # Ok::<(), socialshell::ShellError>(())
//! ```

use crate::app::modes::Gate;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{CallType, Session, Tab, Track};

/// Delay between transition frames, in seconds.
const TICK_SECONDS: f64 = 0.06;

/// Events triggered by user input, collaborators, or the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The auth provider pushed a new session.
    SessionChanged(Session),

    /// Login form asked to show the register form.
    SwitchToRegister,
    /// Register form asked to show the login form.
    SwitchToLogin,
    /// Flip between login and register.
    ToggleAuthMode,

    /// Sidebar selection.
    SelectTab(Tab),
    /// Move to the next tab in sidebar order.
    NextTab,
    /// Move to the previous tab in sidebar order.
    PrevTab,

    /// Chat list selection.
    SelectChat(String),
    /// Friends list "start chat": selects the chat and opens the chats tab.
    StartChat(String),

    /// Chat window asked to start a call in the selected chat.
    StartCall(CallType),
    /// Call interface asked to hang up.
    EndCall,

    /// A track was queued for playback.
    PlayTrack(Track),
    /// Music player asked to close.
    CloseMusicPlayer,
    /// Show or hide the music player.
    ToggleMusicPlayer,

    /// Animation frame timer fired.
    Tick,
    /// Hide the plugin pane.
    CloseFocus,
}

impl Event {
    const fn is_auth_event(&self) -> bool {
        matches!(
            self,
            Self::SwitchToRegister | Self::SwitchToLogin | Self::ToggleAuthMode
        )
    }

    const fn is_shell_event(&self) -> bool {
        matches!(
            self,
            Self::SelectTab(_)
                | Self::NextTab
                | Self::PrevTab
                | Self::SelectChat(_)
                | Self::StartChat(_)
                | Self::StartCall(_)
                | Self::EndCall
                | Self::PlayTrack(_)
                | Self::CloseMusicPlayer
                | Self::ToggleMusicPlayer
        )
    }
}

/// Processes an event, mutates application state, and returns actions.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI must be redrawn, and the side
/// effects to run in order.
///
/// # Errors
///
/// Currently infallible in practice: roster failures during `StartCall` are
/// logged and reported through [`Action::Notify`] instead of aborting.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let gate_allows = match state.gate() {
        Gate::Authenticated(_) => !event.is_auth_event(),
        Gate::Unauthenticated => !event.is_shell_event(),
        Gate::Loading => !event.is_auth_event() && !event.is_shell_event(),
    };
    if !gate_allows {
        tracing::debug!("event ignored in current gate");
        return Ok((false, vec![]));
    }

    let dismissed = !matches!(event, Event::Tick) && state.dismiss_notification();
    let (applied, mut actions) = apply(state, event)?;
    let should_render = applied || dismissed;

    // A running animation already has a tick pending; observe only restarts it.
    let key = state.view_key();
    let was_animating = state.transition.is_animating();
    if should_render && state.transition.observe(key) && !was_animating {
        actions.push(Action::ScheduleTick {
            seconds: TICK_SECONDS,
        });
    }

    Ok((should_render, actions))
}

fn apply(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::SessionChanged(session) => Ok((state.apply_session(session.clone()), vec![])),
        Event::SwitchToRegister => {
            state.auth.switch_to_register();
            Ok((true, vec![]))
        }
        Event::SwitchToLogin => {
            state.auth.switch_to_login();
            Ok((true, vec![]))
        }
        Event::ToggleAuthMode => {
            state.auth.toggle();
            Ok((true, vec![]))
        }
        Event::SelectTab(tab) => {
            state.shell.select_tab(*tab);
            Ok((true, vec![]))
        }
        Event::NextTab => {
            state.shell.select_tab(state.shell.active_tab().next());
            Ok((true, vec![]))
        }
        Event::PrevTab => {
            state.shell.select_tab(state.shell.active_tab().prev());
            Ok((true, vec![]))
        }
        Event::SelectChat(chat_id) => {
            state.shell.select_chat(chat_id);
            Ok((true, vec![]))
        }
        Event::StartChat(chat_id) => {
            state.shell.start_chat(chat_id);
            Ok((true, vec![]))
        }
        Event::StartCall(call_type) => start_call(state, *call_type),
        Event::EndCall => Ok((state.shell.end_call(), vec![])),
        Event::PlayTrack(track) => {
            state.shell.play_track(track.clone());
            Ok((true, vec![]))
        }
        Event::CloseMusicPlayer => {
            let was_shown = state.shell.music_player_shown();
            state.shell.close_music_player();
            Ok((was_shown, vec![]))
        }
        Event::ToggleMusicPlayer => Ok((state.shell.toggle_music_player(), vec![])),
        Event::Tick => {
            if !state.transition.is_animating() {
                return Ok((false, vec![]));
            }
            let mut actions = vec![];
            if state.transition.tick() {
                actions.push(Action::ScheduleTick {
                    seconds: TICK_SECONDS,
                });
            }
            Ok((true, actions))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

fn start_call(state: &mut AppState, call_type: CallType) -> Result<(bool, Vec<Action>)> {
    let Some(caller) = state.current_user().cloned() else {
        return Ok((false, vec![]));
    };

    match state
        .shell
        .start_call(call_type, &caller, state.roster.as_ref())
    {
        Ok(started) => Ok((started, vec![])),
        Err(e) => {
            tracing::warn!(error = %e, call_type = %call_type, "failed to start call");
            let message = format!("Could not start {call_type} call: {e}");
            state.notify(message.clone());
            Ok((true, vec![Action::Notify { message }]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::AuthMode;
    use crate::domain::{Profile, ShellError};
    use crate::roster::{EmptyRoster, JsonRoster, Roster, RosterEntry};
    use crate::ui::theme::Theme;
    use crate::ui::viewmodel::{ChatDetail, ContentView, UIViewModel};
    use std::collections::HashMap;
    use std::sync::Arc;

    struct FailingRoster;

    impl Roster for FailingRoster {
        fn members(&self, _chat_id: &str) -> Result<Vec<RosterEntry>> {
            Err(ShellError::Roster("offline".to_string()))
        }
    }

    fn ada() -> Profile {
        Profile::new("u1", "Ada")
    }

    fn signed_in_with(roster: Arc<dyn Roster>) -> AppState {
        AppState::new(Session::signed_in(ada()), Theme::default(), roster)
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    fn track() -> Track {
        Track {
            id: "t1".into(),
            title: "Song".into(),
            artist: "Band".into(),
            url: "https://example.invalid/t1.mp3".into(),
            duration: 200.0,
            avatar: None,
        }
    }

    #[test]
    fn auth_switches_flip_mode() {
        let mut state = AppState::new(Session::signed_out(), Theme::default(), Arc::new(EmptyRoster));

        send(&mut state, Event::SwitchToRegister);
        assert_eq!(state.auth.mode(), AuthMode::Register);
        send(&mut state, Event::SwitchToLogin);
        assert_eq!(state.auth.mode(), AuthMode::Login);
    }

    #[test]
    fn shell_events_ignored_while_signed_out() {
        let mut state = AppState::new(Session::signed_out(), Theme::default(), Arc::new(EmptyRoster));

        let (render, actions) = send(&mut state, Event::SelectTab(Tab::Chats));
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.shell.active_tab(), Tab::Feed);
    }

    #[test]
    fn auth_events_ignored_while_signed_in() {
        let mut state = signed_in_with(Arc::new(EmptyRoster));
        let (render, _) = send(&mut state, Event::SwitchToRegister);
        assert!(!render);
        assert_eq!(state.auth.mode(), AuthMode::Login);
    }

    #[test]
    fn start_chat_from_friends_is_one_transition() {
        let mut state = signed_in_with(Arc::new(EmptyRoster));
        send(&mut state, Event::SelectTab(Tab::Friends));
        send(&mut state, Event::StartChat("c2".to_string()));

        match state.compute_viewmodel(0) {
            UIViewModel::Shell(view) => match view.content {
                ContentView::Chats { detail: ChatDetail::Window { chat_id }, .. } => {
                    assert_eq!(chat_id, "c2");
                }
                other => panic!("unexpected content: {other:?}"),
            },
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn video_call_uses_roster_members() {
        let mut chats = HashMap::new();
        chats.insert(
            "c1".to_string(),
            vec![RosterEntry::new(Profile::new("u2", "Anna")).speaking()],
        );
        let mut state = signed_in_with(Arc::new(JsonRoster::from_chats(chats)));

        send(&mut state, Event::SelectChat("c1".to_string()));
        let (render, _) = send(&mut state, Event::StartCall(CallType::Video));
        assert!(render);

        let call = state.shell.active_call().unwrap();
        assert_eq!(call.participants.len(), 2);
        assert_eq!(call.participants[0].id, "u1");
        assert!(call.participants[0].is_video_enabled);
        assert!(call.participants[1].is_video_enabled);
        assert!(call.participants[1].is_speaking);
    }

    #[test]
    fn call_without_chat_changes_nothing() {
        let mut state = signed_in_with(Arc::new(EmptyRoster));
        let (render, actions) = send(&mut state, Event::StartCall(CallType::Audio));
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.shell.active_call().is_none());
    }

    #[test]
    fn roster_failure_shows_toast_without_call() {
        let mut state = signed_in_with(Arc::new(FailingRoster));
        send(&mut state, Event::SelectChat("c1".to_string()));

        let (render, actions) = send(&mut state, Event::StartCall(CallType::Video));
        assert!(render);
        assert!(matches!(actions.as_slice(), [Action::Notify { .. }]));
        assert!(state.shell.active_call().is_none());

        let toast = match state.compute_viewmodel(0) {
            UIViewModel::Shell(view) => view.toast,
            other => panic!("unexpected view: {other:?}"),
        };
        assert_eq!(toast.as_deref(), Some("Could not start video call: Roster error: offline"));
    }

    #[test]
    fn next_user_event_dismisses_toast() {
        let mut state = signed_in_with(Arc::new(FailingRoster));
        send(&mut state, Event::SelectChat("c1".to_string()));
        send(&mut state, Event::StartCall(CallType::Audio));

        assert!(!send(&mut state, Event::Tick).0);
        assert!(state.notification.is_some());

        let (render, _) = send(&mut state, Event::EndCall);
        assert!(render);
        assert!(state.notification.is_none());
    }

    #[test]
    fn end_call_twice_is_harmless() {
        let mut state = signed_in_with(Arc::new(EmptyRoster));
        send(&mut state, Event::SelectChat("c1".to_string()));
        send(&mut state, Event::StartCall(CallType::Audio));

        assert!(send(&mut state, Event::EndCall).0);
        assert!(!send(&mut state, Event::EndCall).0);
        assert!(state.shell.active_call().is_none());
    }

    #[test]
    fn closing_player_keeps_track() {
        let mut state = signed_in_with(Arc::new(EmptyRoster));
        send(&mut state, Event::PlayTrack(track()));
        send(&mut state, Event::CloseMusicPlayer);

        assert!(!state.shell.music_player_shown());
        assert_eq!(state.shell.current_track(), Some(&track()));
    }

    #[test]
    fn tab_change_schedules_transition_ticks() {
        let mut state = signed_in_with(Arc::new(EmptyRoster));

        let (_, actions) = send(&mut state, Event::SelectTab(Tab::Calls));
        assert!(matches!(actions.as_slice(), [Action::ScheduleTick { .. }]));
        assert_eq!(state.shell.active_tab(), Tab::Calls);

        let mut frames = 0;
        loop {
            let (render, actions) = send(&mut state, Event::Tick);
            if !render {
                break;
            }
            frames += 1;
            if actions.is_empty() {
                break;
            }
        }
        assert!(frames > 0);
        assert!(!state.transition.is_animating());
        assert_eq!(send(&mut state, Event::Tick), (false, vec![]));
    }

    #[test]
    fn view_change_mid_animation_keeps_a_single_tick_chain() {
        let mut state = signed_in_with(Arc::new(EmptyRoster));

        let (_, first) = send(&mut state, Event::SelectTab(Tab::Calls));
        assert!(matches!(first.as_slice(), [Action::ScheduleTick { .. }]));

        let (render, second) = send(&mut state, Event::SelectTab(Tab::Friends));
        assert!(render);
        assert!(second.is_empty());
        assert!(state.transition.is_animating());
    }

    #[test]
    fn signing_in_leaves_loading_skeleton() {
        let mut state = AppState::new(Session::loading(), Theme::default(), Arc::new(EmptyRoster));
        assert!(matches!(state.compute_viewmodel(0), UIViewModel::Loading(_)));

        let (render, _) = send(&mut state, Event::SessionChanged(Session::signed_in(ada())));
        assert!(render);
        assert!(matches!(state.compute_viewmodel(0), UIViewModel::Shell(_)));
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = signed_in_with(Arc::new(EmptyRoster));
        assert_eq!(send(&mut state, Event::CloseFocus), (false, vec![Action::CloseFocus]));
    }
}
