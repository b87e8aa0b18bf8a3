//! Chat roster collaborator.
//!
//! When a call is started the shell asks the roster who else belongs to the
//! selected chat. The roster is an injected trait object so the shell can be
//! driven by a real chat backend, a JSON fixture, or nothing at all.
//!
//! # Modules
//!
//! - `backend`: [`Roster`] trait, [`RosterEntry`] and the empty roster
//! - `json`: JSON file-backed roster

pub mod backend;
pub mod json;

pub use backend::{EmptyRoster, Roster, RosterEntry};
pub use json::JsonRoster;
