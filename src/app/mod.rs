//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain, roster and UI
//! layers.
//!
//! ```text
//! Key / pipe input → Events → handle_event → State mutations → Actions → Side effects
//!                                  ↓
//!                          compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and gating
//! - [`modes`]: Authentication gate and auth screen mode
//! - [`shell`]: Tab, chat, call and music state of the signed-in user
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod shell;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{AuthMode, AuthScreen, Gate};
pub use shell::Shell;
pub use state::AppState;
