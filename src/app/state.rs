//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin. It is built by
//! dependency injection: the session, theme and roster are passed in rather
//! than read from any ambient context, so tests can construct it directly.
//!
//! # State Components
//!
//! - **Session**: pushed by the auth provider, read-only here
//! - **Auth screen**: login/register toggle
//! - **Shell**: tab, chat, call and music state of the signed-in user
//! - **Roster**: chat membership lookup used when a call starts
//! - **Transition**: cosmetic slide-in state, never consulted by transitions
//!
//! # Example
//!
//! ```rust
//! use socialshell::app::AppState;
//! use socialshell::domain::{Profile, Session};
//! use socialshell::roster::EmptyRoster;
//! use socialshell::ui::{viewmodel::UIViewModel, Theme};
//! use std::sync::Arc;
//!
//! let session = Session::signed_in(Profile::new("u1", "Ada"));
//! let state = AppState::new(session, Theme::default(), Arc::new(EmptyRoster));
//! assert!(matches!(state.compute_viewmodel(0), UIViewModel::Shell(_)));
//! ```

use super::modes::{AuthMode, AuthScreen, Gate};
use super::shell::Shell;
use crate::domain::{Profile, Session, Tab};
use crate::roster::Roster;
use crate::ui::theme::Theme;
use crate::ui::transition::{Transition, ViewKey};
use crate::ui::viewmodel::{
    AuthView, CallOverlay, ChatDetail, ChatListProps, ContentView, EmptyState, FooterInfo,
    HeaderInfo, LoadingView, MusicPlayerView, ShellView, SidebarItem, SidebarView, UIViewModel,
};
use std::fmt;
use std::sync::Arc;

/// Placeholder bars drawn in the loading sidebar.
const SKELETON_SIDEBAR_BARS: usize = 6;

/// Placeholder blocks drawn in the loading content area.
const SKELETON_CONTENT_BLOCKS: usize = 3;

/// Central application state container.
#[derive(Clone)]
pub struct AppState {
    /// Latest session pushed by the auth provider.
    pub session: Session,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Auth screen state; meaningful only while signed out.
    pub auth: AuthScreen,

    /// Shell state of the signed-in user.
    pub shell: Shell,

    /// Chat membership lookup.
    pub roster: Arc<dyn Roster>,

    /// Slide-in effect for the view on screen.
    pub transition: Transition,

    /// Tab the shell opens on after sign-in.
    pub start_tab: Tab,

    /// Transient message shown until the next user event.
    pub notification: Option<String>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("session", &self.session)
            .field("theme", &self.theme.name)
            .field("auth", &self.auth)
            .field("shell", &self.shell)
            .field("transition", &self.transition)
            .field("start_tab", &self.start_tab)
            .field("notification", &self.notification)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Creates application state from injected collaborators.
    #[must_use]
    pub fn new(session: Session, theme: Theme, roster: Arc<dyn Roster>) -> Self {
        let mut state = Self {
            session,
            theme,
            auth: AuthScreen::default(),
            shell: Shell::default(),
            roster,
            transition: Transition::default(),
            start_tab: Tab::default(),
            notification: None,
        };
        let key = state.view_key();
        state.transition.settle(key);
        state
    }

    /// Sets the tab the shell opens on, and resets the shell to it.
    #[must_use]
    pub fn with_start_tab(mut self, tab: Tab) -> Self {
        self.start_tab = tab;
        self.shell = Shell::starting_on(tab);
        let key = self.view_key();
        self.transition.settle(key);
        self
    }

    /// Replaces the transition settings.
    #[must_use]
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        let key = self.view_key();
        self.transition.settle(key);
        self
    }

    /// Current top-level gate.
    #[must_use]
    pub fn gate(&self) -> Gate<'_> {
        Gate::from_session(&self.session)
    }

    /// The signed-in user, if the shell is showing.
    #[must_use]
    pub fn current_user(&self) -> Option<&Profile> {
        match self.gate() {
            Gate::Authenticated(profile) => Some(profile),
            Gate::Loading | Gate::Unauthenticated => None,
        }
    }

    /// Applies a new session from the auth provider.
    ///
    /// A different user (including signing out) starts from fresh shell
    /// state. A refresh of the same user keeps it. The auth screen is back in
    /// login mode whenever it is shown again after being hidden.
    ///
    /// Returns whether anything visible changed.
    pub fn apply_session(&mut self, session: Session) -> bool {
        if self.session == session {
            return false;
        }

        let user_changed = self.session.user_id() != session.user_id();
        tracing::debug!(
            user_changed,
            is_loading = session.is_loading,
            signed_in = session.current_user.is_some(),
            "session updated"
        );

        if user_changed {
            self.shell = Shell::starting_on(self.start_tab);
            self.notification = None;
        }
        self.session = session;
        if !matches!(self.gate(), Gate::Unauthenticated) {
            self.auth = AuthScreen::default();
        }
        true
    }

    /// Shows `message` until the next user event.
    pub fn notify(&mut self, message: String) {
        tracing::debug!(%message, "notification shown");
        self.notification = Some(message);
    }

    /// Clears the notification. Returns whether one was showing.
    pub fn dismiss_notification(&mut self) -> bool {
        self.notification.take().is_some()
    }

    /// Identity of the view that would be drawn right now.
    #[must_use]
    pub fn view_key(&self) -> ViewKey {
        match self.gate() {
            Gate::Loading => ViewKey::Loading,
            Gate::Unauthenticated => match self.auth.mode() {
                AuthMode::Login => ViewKey::Login,
                AuthMode::Register => ViewKey::Register,
            },
            Gate::Authenticated(_) => ViewKey::Tab(self.shell.active_tab()),
        }
    }

    /// Computes the view model for the current state.
    ///
    /// `now` is the unix time in seconds, used for the call timer.
    #[must_use]
    pub fn compute_viewmodel(&self, now: i64) -> UIViewModel {
        match self.gate() {
            Gate::Loading => UIViewModel::Loading(LoadingView {
                sidebar_bars: SKELETON_SIDEBAR_BARS,
                content_blocks: SKELETON_CONTENT_BLOCKS,
            }),
            Gate::Unauthenticated => UIViewModel::Auth(self.compute_auth_view()),
            Gate::Authenticated(user) => UIViewModel::Shell(self.compute_shell_view(user, now)),
        }
    }

    fn compute_auth_view(&self) -> AuthView {
        match self.auth.mode() {
            AuthMode::Login => AuthView {
                mode: AuthMode::Login,
                title: "Sign in".to_string(),
                subtitle: "Welcome back".to_string(),
                switch_hint: "Tab: create an account".to_string(),
            },
            AuthMode::Register => AuthView {
                mode: AuthMode::Register,
                title: "Create account".to_string(),
                subtitle: "Join the network".to_string(),
                switch_hint: "Tab: I already have an account".to_string(),
            },
        }
    }

    fn compute_shell_view(&self, user: &Profile, now: i64) -> ShellView {
        let content = self.compute_content(user);

        ShellView {
            header: HeaderInfo {
                title: format!(" {} ", content.tab().label()),
            },
            sidebar: Self::compute_sidebar(user, self.shell.active_tab()),
            content,
            content_offset: self.transition.offset(),
            call_overlay: self.shell.active_call().map(|call| CallOverlay {
                chat_id: call.chat_id.clone(),
                call_type: call.call_type,
                participants: call.participants.clone(),
                elapsed: call.elapsed_label(now),
            }),
            toast: self.notification.clone(),
            music_player: MusicPlayerView {
                track: self.shell.current_track().cloned(),
                is_visible: self.shell.music_player_shown(),
            },
            footer: self.compute_footer(),
        }
    }

    fn compute_sidebar(user: &Profile, active: Tab) -> SidebarView {
        let items = Tab::ALL
            .into_iter()
            .zip('1'..='6')
            .map(|(tab, shortcut)| SidebarItem {
                tab,
                label: tab.label(),
                shortcut,
                is_active: tab == active,
            })
            .collect();

        SidebarView {
            user_name: user.name.clone(),
            user_id: user.id.clone(),
            items,
        }
    }

    fn compute_content(&self, user: &Profile) -> ContentView {
        match self.shell.active_tab() {
            Tab::Feed => ContentView::Feed,
            Tab::Chats => {
                let selected = self.shell.selected_chat_id().map(ToString::to_string);
                let detail = selected.clone().map_or_else(
                    || {
                        ChatDetail::Empty(EmptyState {
                            message: "Select a chat".to_string(),
                            subtitle: "Pick a conversation from the list or start a new one"
                                .to_string(),
                        })
                    },
                    |chat_id| ChatDetail::Window { chat_id },
                );
                ContentView::Chats {
                    list: ChatListProps {
                        selected_chat_id: selected,
                    },
                    detail,
                }
            }
            Tab::Calls => ContentView::Calls,
            Tab::Friends => ContentView::Friends,
            Tab::Profile => ContentView::Profile { user: user.clone() },
            Tab::Settings => ContentView::Settings,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let mut hints = vec!["1-6/Tab: navigate"];

        if self.shell.active_call().is_some() {
            hints.push("e: end call");
        } else if self.shell.active_tab() == Tab::Chats && self.shell.selected_chat_id().is_some() {
            hints.push("a: audio call");
            hints.push("v: video call");
        }

        if self.shell.current_track().is_some() {
            hints.push(if self.shell.music_player_shown() {
                "m: hide player"
            } else {
                "m: show player"
            });
        }

        hints.push("q: quit");

        FooterInfo {
            keybindings: hints.join("  "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CallType, Track};
    use crate::roster::{EmptyRoster, JsonRoster, RosterEntry};
    use std::collections::HashMap;

    fn ada() -> Profile {
        Profile::new("u1", "Ada")
    }

    fn signed_in() -> AppState {
        AppState::new(Session::signed_in(ada()), Theme::default(), Arc::new(EmptyRoster))
    }

    fn shell_view(state: &AppState) -> ShellView {
        match state.compute_viewmodel(0) {
            UIViewModel::Shell(view) => view,
            other => panic!("expected shell view, got {other:?}"),
        }
    }

    #[test]
    fn loading_renders_skeleton_even_with_user() {
        let mut session = Session::signed_in(ada());
        session.is_loading = true;
        let state = AppState::new(session, Theme::default(), Arc::new(EmptyRoster));

        assert!(matches!(state.compute_viewmodel(0), UIViewModel::Loading(_)));
    }

    #[test]
    fn signed_out_renders_login() {
        let state = AppState::new(Session::signed_out(), Theme::default(), Arc::new(EmptyRoster));
        match state.compute_viewmodel(0) {
            UIViewModel::Auth(view) => assert_eq!(view.mode, AuthMode::Login),
            other => panic!("expected auth view, got {other:?}"),
        }
    }

    #[test]
    fn each_tab_maps_to_its_own_view() {
        let mut state = signed_in();
        for tab in Tab::ALL {
            state.shell.select_tab(tab);
            let view = shell_view(&state);
            assert_eq!(view.content.tab(), tab);
            assert_eq!(view.sidebar.items.iter().filter(|i| i.is_active).count(), 1);
            assert!(view.sidebar.items[tab.index()].is_active);
        }
    }

    #[test]
    fn chats_tab_switches_from_empty_state_to_window() {
        let mut state = signed_in();
        state.shell.select_tab(Tab::Chats);

        match shell_view(&state).content {
            ContentView::Chats { detail: ChatDetail::Empty(empty), list } => {
                assert_eq!(empty.message, "Select a chat");
                assert_eq!(list.selected_chat_id, None);
            }
            other => panic!("unexpected content: {other:?}"),
        }

        state.shell.select_chat("c1");

        match shell_view(&state).content {
            ContentView::Chats { detail: ChatDetail::Window { chat_id }, list } => {
                assert_eq!(chat_id, "c1");
                assert_eq!(list.selected_chat_id.as_deref(), Some("c1"));
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn call_overlay_follows_call_state() {
        let mut chats = HashMap::new();
        chats.insert(
            "c1".to_string(),
            vec![RosterEntry::new(Profile::new("u2", "Anna")).speaking()],
        );
        let mut state = AppState::new(
            Session::signed_in(ada()),
            Theme::default(),
            Arc::new(JsonRoster::from_chats(chats)),
        );
        state.shell.select_chat("c1");
        state
            .shell
            .start_call(CallType::Video, &ada(), state.roster.as_ref())
            .unwrap();

        let overlay = shell_view(&state).call_overlay.unwrap();
        assert_eq!(overlay.chat_id, "c1");
        assert_eq!(overlay.participants.len(), 2);

        state.shell.end_call();
        assert!(shell_view(&state).call_overlay.is_none());
    }

    #[test]
    fn music_player_props_keep_track_when_hidden() {
        let track = Track {
            id: "t1".into(),
            title: "Song".into(),
            artist: "Band".into(),
            url: "https://example.invalid/t1.mp3".into(),
            duration: 61.0,
            avatar: None,
        };
        let mut state = signed_in();
        state.shell.play_track(track.clone());
        assert!(shell_view(&state).music_player.is_visible);

        state.shell.close_music_player();
        let player = shell_view(&state).music_player;
        assert!(!player.is_visible);
        assert_eq!(player.track, Some(track));
    }

    #[test]
    fn new_user_gets_fresh_shell() {
        let mut state = signed_in().with_start_tab(Tab::Calls);
        state.shell.select_chat("c1");
        state.shell.select_tab(Tab::Settings);

        assert!(state.apply_session(Session::signed_in(Profile::new("u9", "Grace"))));
        assert_eq!(state.shell.active_tab(), Tab::Calls);
        assert_eq!(state.shell.selected_chat_id(), None);
    }

    #[test]
    fn same_user_refresh_keeps_shell() {
        let mut state = signed_in();
        state.shell.select_chat("c1");

        assert!(state.apply_session(Session::signed_in(ada().with_avatar("new.png"))));
        assert_eq!(state.shell.selected_chat_id(), Some("c1"));
        assert!(!state.apply_session(state.session.clone()));
    }

    #[test]
    fn auth_screen_returns_in_login_mode_after_loading() {
        let mut state = AppState::new(Session::signed_out(), Theme::default(), Arc::new(EmptyRoster));
        state.auth.switch_to_register();

        assert!(state.apply_session(Session::loading()));
        assert!(state.apply_session(Session::signed_out()));
        assert_eq!(state.auth.mode(), AuthMode::Login);
    }

    #[test]
    fn auth_mode_survives_while_auth_screen_stays_up() {
        let mut state = AppState::new(Session::signed_out(), Theme::default(), Arc::new(EmptyRoster));
        state.auth.switch_to_register();

        assert!(!state.apply_session(Session::signed_out()));
        assert_eq!(state.auth.mode(), AuthMode::Register);
    }

    #[test]
    fn notification_reaches_shell_view_until_dismissed() {
        let mut state = signed_in();
        assert_eq!(shell_view(&state).toast, None);

        state.notify("Could not start call".to_string());
        assert_eq!(shell_view(&state).toast.as_deref(), Some("Could not start call"));

        assert!(state.dismiss_notification());
        assert!(!state.dismiss_notification());
        assert_eq!(shell_view(&state).toast, None);
    }

    #[test]
    fn with_start_tab_does_not_leave_an_animation_running() {
        let state = signed_in().with_start_tab(Tab::Calls);
        assert!(!state.transition.is_animating());
        assert_eq!(shell_view(&state).content_offset, 0);
    }

    #[test]
    fn footer_offers_calls_only_with_selected_chat() {
        let mut state = signed_in();
        state.shell.select_tab(Tab::Chats);
        assert!(!shell_view(&state).footer.keybindings.contains("a: audio call"));

        state.shell.select_chat("c1");
        assert!(shell_view(&state).footer.keybindings.contains("a: audio call"));
    }
}
