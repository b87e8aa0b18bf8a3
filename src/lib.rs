//! Socialshell: the application shell of a social client, as a Zellij plugin.
//!
//! Socialshell decides what a user sees at the top level:
//! - A loading skeleton while the session is being resolved
//! - Login and register forms while signed out
//! - A six-tab shell (feed, chats, calls, friends, profile, settings) once
//!   signed in, with a chat selection, a call overlay and a music player
//!
//! The child widgets (feed, chat list, chat window, friends list, ...) are
//! external; the shell only decides which one is mounted and with which props.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys, pipes, timers
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Auth gate and auth screen                        │
//! │  - Shell state: tab, chat, call, music              │
//! │  - Event handling and view model computation        │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Roster        │
//! │ (ui/)         │   │ (roster/)     │
//! │ - Rendering   │   │ - Chat members│
//! │ - Theming     │   │ - JSON file   │
//! │ - Transitions │   │               │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) and sandbox paths (infrastructure/)│
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← OTLP file export
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/socialshell.wasm" {
//!         theme "catppuccin-mocha"
//!         start_tab "chats"
//!         roster_file "~/.config/socialshell/roster.json"
//!         user_id "u1"
//!         user_name "Ada"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! Without `user_id` the plugin starts signed out; a session can be pushed
//! later with `zellij pipe --name socialshell:session`.
//!
//! # Example
//!
//! ```rust
//! use socialshell::{handle_event, initialize, Config, Event};
//! use socialshell::domain::{CallType, Profile, Tab};
//!
//! let config = Config {
//!     user: Some(Profile::new("u1", "Ada")),
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! handle_event(&mut state, &Event::StartChat("c1".to_string()))?;
//! handle_event(&mut state, &Event::StartCall(CallType::Video))?;
//! assert_eq!(state.shell.active_tab(), Tab::Chats);
//! assert!(state.shell.active_call().is_some());
//! # Ok::<(), socialshell::ShellError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod roster;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, AuthMode, Event, Gate};
pub use domain::{Result, ShellError};
pub use ui::Theme;

use domain::{Profile, Session, Tab};
use roster::{EmptyRoster, JsonRoster, Roster};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use ui::Transition;

/// Frames of the slide-in effect when `transition_frames` is not set.
const DEFAULT_TRANSITION_FRAMES: u8 = 3;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Filter level for exported spans. Default: `"info"`
    pub trace_level: Option<String>,

    /// Tab the shell opens on after sign-in.
    pub start_tab: Tab,

    /// JSON roster consulted when a call starts.
    pub roster_file: Option<String>,

    /// Seeds a signed-in session at load.
    pub user: Option<Profile>,

    /// Slide-in frames per view change; 0 disables the effect.
    pub transition_frames: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            start_tab: Tab::default(),
            roster_file: None,
            user: None,
            transition_frames: DEFAULT_TRANSITION_FRAMES,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Malformed values fall back to their defaults:
    ///
    /// - `start_tab`: lowercase tab name, default `feed`
    /// - `transition_frames`: `u8`, default 3
    /// - `user_id`: required for `user`; `user_name` defaults to the id and
    ///   `user_avatar` to empty
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use socialshell::Config;
    /// use socialshell::domain::Tab;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("start_tab".to_string(), "friends".to_string());
    /// map.insert("user_id".to_string(), "u7".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.start_tab, Tab::Friends);
    /// assert_eq!(config.user.map(|u| u.name), Some("u7".to_string()));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let start_tab = value("start_tab")
            .and_then(|name| {
                name.parse::<Tab>()
                    .map_err(|e| tracing::debug!(error = %e, "ignoring start_tab"))
                    .ok()
            })
            .unwrap_or_default();

        let transition_frames = value("transition_frames")
            .and_then(|s| s.parse::<u8>().ok())
            .unwrap_or(DEFAULT_TRANSITION_FRAMES);

        let user = value("user_id").map(|id| {
            let name = value("user_name").unwrap_or_else(|| id.clone());
            let profile = Profile::new(id, name);
            match value("user_avatar") {
                Some(avatar) => profile.with_avatar(avatar),
                None => profile,
            }
        });

        Self {
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
            start_tab,
            roster_file: value("roster_file"),
            user,
            transition_frames,
        }
    }
}

/// Builds the initial [`AppState`] from configuration.
///
/// Theme resolution is file, then name, then the default theme; a roster that
/// cannot be loaded is replaced by an empty one. Neither failure is fatal.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing socialshell plugin");

    let theme = load_theme(config);
    let roster = load_roster(config);
    let session = config
        .user
        .clone()
        .map_or_else(Session::signed_out, Session::signed_in);

    AppState::new(session, theme, roster)
        .with_start_tab(config.start_tab)
        .with_transition(Transition::new(config.transition_frames))
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        return Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

fn load_roster(config: &Config) -> Arc<dyn Roster> {
    let Some(roster_file) = &config.roster_file else {
        return Arc::new(EmptyRoster);
    };

    let path = PathBuf::from(infrastructure::expand_tilde(roster_file));
    match JsonRoster::new(&path) {
        Ok(roster) => Arc::new(roster),
        Err(e) => {
            tracing::warn!(roster_file = %roster_file, error = %e, "failed to load roster, calls will only include the caller");
            Arc::new(EmptyRoster)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Gate;
    use crate::domain::CallType;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.start_tab, Tab::Feed);
        assert_eq!(config.transition_frames, 3);
        assert!(config.user.is_none());
        assert!(config.roster_file.is_none());
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("start_tab", "inbox"),
            ("transition_frames", "lots"),
            ("theme", "  "),
        ]));
        assert_eq!(config.start_tab, Tab::Feed);
        assert_eq!(config.transition_frames, 3);
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn user_keys_build_a_profile() {
        let config = Config::from_zellij(&map(&[
            ("user_id", "u1"),
            ("user_name", "Ada"),
            ("user_avatar", "https://example.test/ada.png"),
        ]));
        let user = config.user.unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.name, "Ada");
        assert_eq!(user.avatar, "https://example.test/ada.png");

        let nameless = Config::from_zellij(&map(&[("user_name", "Ada")]));
        assert!(nameless.user.is_none());
    }

    #[test]
    fn initialize_without_user_shows_auth_screen() {
        let state = initialize(&Config::default());
        assert!(matches!(state.gate(), Gate::Unauthenticated));
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }

    #[test]
    fn initialize_with_user_opens_start_tab() {
        let config = Config {
            user: Some(Profile::new("u1", "Ada")),
            start_tab: Tab::Settings,
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert!(matches!(state.gate(), Gate::Authenticated(_)));
        assert_eq!(state.shell.active_tab(), Tab::Settings);
        assert_eq!(state.theme.name, "catppuccin-latte");
    }

    #[test]
    fn unreadable_theme_and_roster_fall_back() {
        let config = Config {
            user: Some(Profile::new("u1", "Ada")),
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            roster_file: Some("/nonexistent/dir/roster.json".to_string()),
            ..Default::default()
        };
        let mut state = initialize(&config);
        assert_eq!(state.theme, Theme::default());

        handle_event(&mut state, &Event::SelectChat("c1".to_string())).unwrap();
        handle_event(&mut state, &Event::StartCall(CallType::Audio)).unwrap();
        assert_eq!(state.shell.active_call().unwrap().participants.len(), 1);
    }

    #[test]
    fn roster_file_supplies_call_participants() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"version":1,"chats":{{"c1":[{{"id":"u2","name":"Grace","is_speaking":true}}]}}}}"#
        )
        .unwrap();

        let config = Config {
            user: Some(Profile::new("u1", "Ada")),
            roster_file: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        let mut state = initialize(&config);
        handle_event(&mut state, &Event::SelectChat("c1".to_string())).unwrap();
        handle_event(&mut state, &Event::StartCall(CallType::Video)).unwrap();

        let call = state.shell.active_call().unwrap();
        let names: Vec<&str> = call.participants.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Ada", "Grace"]);
        assert!(call.participants[1].is_speaking);
    }
}
