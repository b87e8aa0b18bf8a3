//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to the host directly. It mutates
//! [`AppState`](crate::app::AppState) and returns a list of [`Action`]s that
//! the plugin shim turns into Zellij API calls.
//!
//! # Example
//!
//! ```rust
//! use socialshell::Action;
//!
//! let actions = vec![Action::ScheduleTick { seconds: 0.1 }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Shows a short transient message to the user.
    ///
    /// Used for failures the user should know about, such as a roster lookup
    /// failing when a call starts. The handler has already stored the message
    /// in [`AppState::notification`](crate::app::AppState::notification) for
    /// the toast row; the host only records it.
    Notify {
        /// Message text.
        message: String,
    },

    /// Requests a `Tick` event after `seconds`.
    ///
    /// Emitted while a view transition is animating so the next frame gets
    /// drawn. State changes never wait on it.
    ScheduleTick {
        /// Delay before the tick.
        seconds: f64,
    },
}
