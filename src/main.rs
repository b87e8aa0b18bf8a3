//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the socialshell library and the Zellij
//! plugin system: it translates host input into library events and library
//! actions into host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: `Key`, `Timer`, `PermissionRequestResult`
//! 3. **Update / Pipe**: Map input to events, delegate to `handle_event`
//! 4. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Auth screen:
//! - `Tab`: Switch between login and register
//! - `q` / `Esc`: Close plugin
//!
//! Shell:
//! - `1`-`6`: Feed, Chats, Calls, Friends, Profile, Settings
//! - `Tab` / `Shift+Tab`: Next / previous tab
//! - `a` / `v`: Start audio / video call in the selected chat
//! - `e`: End call
//! - `m`: Show or hide the music player
//! - `q` / `Esc`: Close plugin
//!
//! # Pipe Messages
//!
//! - `socialshell:session`: JSON session, e.g. `{"current_user":{"id":"u1","name":"Ada"},"is_loading":false}`
//! - `socialshell:select_chat`: chat id
//! - `socialshell:start_chat`: chat id (opens the chats tab)
//! - `socialshell:track`: JSON track, e.g. `{"id":"t1","title":"Song","artist":"Band","url":"...","duration":184}`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use socialshell::domain::{CallType, Session, Tab, Track};
use socialshell::{handle_event, Action, Config, Event, Gate};

register_plugin!(State);

/// Redraw interval for the call clock, in seconds.
const CALL_CLOCK_SECONDS: f64 = 1.0;

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: socialshell::AppState,

    /// Whether a call clock timer is pending.
    clock_armed: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: socialshell::initialize(&Config::default()),
            clock_armed: false,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        socialshell::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(start_tab = %config.start_tab, signed_in = config.user.is_some(), "parsed configuration");
        self.app = socialshell::initialize(&config);

        request_permission(&[PermissionType::ReadApplicationState]);
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(our_event) => self.dispatch(&our_event),
                None => false,
            },
            zellij_tile::prelude::Event::Timer(elapsed) => self.handle_timer(elapsed),
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match status {
                    PermissionStatus::Granted => tracing::debug!("permissions granted"),
                    PermissionStatus::Denied => tracing::warn!("permissions denied"),
                }
                false
            }
            _ => false,
        }
    }

    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        let _guard = tracing::debug_span!("plugin_pipe", name = %pipe_message.name).entered();

        match Self::map_pipe_message(&pipe_message.name, pipe_message.payload.as_deref()) {
            Some(event) => self.dispatch(&event),
            None => false,
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        socialshell::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs an event through the library and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    Self::execute_action(action);
                }
                self.arm_call_clock();
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Transition frames use short timers; the call clock uses one-second timers.
    fn handle_timer(&mut self, elapsed: f64) -> bool {
        if elapsed >= CALL_CLOCK_SECONDS {
            self.clock_armed = false;
            let in_call = self.app.shell.active_call().is_some();
            self.arm_call_clock();
            return in_call;
        }
        self.dispatch(&Event::Tick)
    }

    fn arm_call_clock(&mut self) {
        if self.clock_armed || self.app.shell.active_call().is_none() {
            return;
        }
        set_timeout(CALL_CLOCK_SECONDS);
        self.clock_armed = true;
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current gate.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if matches!(key.bare_key, BareKey::Esc | BareKey::Char('q')) {
            return Some(Event::CloseFocus);
        }

        match self.app.gate() {
            Gate::Loading => None,
            Gate::Unauthenticated => match key.bare_key {
                BareKey::Tab => Some(Event::ToggleAuthMode),
                _ => None,
            },
            Gate::Authenticated(_) => Some(match key.bare_key {
                BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevTab,
                BareKey::Tab => Event::NextTab,
                BareKey::Char(c @ '1'..='6') => {
                    let index = c.to_digit(10).map_or(0, |d| d as usize - 1);
                    Event::SelectTab(Tab::from_index(index)?)
                }
                BareKey::Char('a') => Event::StartCall(CallType::Audio),
                BareKey::Char('v') => Event::StartCall(CallType::Video),
                BareKey::Char('e') => Event::EndCall,
                BareKey::Char('m') => Event::ToggleMusicPlayer,
                _ => return None,
            }),
        }
    }

    /// Maps pipe messages to application events.
    fn map_pipe_message(name: &str, payload: Option<&str>) -> Option<Event> {
        let payload = payload.map(str::trim).filter(|p| !p.is_empty());
        tracing::debug!(pipe = %name, payload_len = payload.map_or(0, str::len), "pipe message");

        match (name, payload) {
            ("socialshell:session", Some(json)) => serde_json::from_str::<Session>(json)
                .map(Event::SessionChanged)
                .map_err(|e| tracing::warn!(error = %e, "invalid session payload"))
                .ok(),
            ("socialshell:select_chat", Some(chat_id)) => Some(Event::SelectChat(chat_id.to_string())),
            ("socialshell:start_chat", Some(chat_id)) => Some(Event::StartChat(chat_id.to_string())),
            ("socialshell:track", Some(json)) => serde_json::from_str::<Track>(json)
                .map(Event::PlayTrack)
                .map_err(|e| tracing::warn!(error = %e, "invalid track payload"))
                .ok(),
            _ => {
                tracing::debug!(pipe = %name, "ignoring pipe message");
                None
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::Notify { message } => tracing::warn!(%message, "notification"),
            Action::ScheduleTick { seconds } => set_timeout(*seconds),
        }
    }
}
