//! Domain layer for the social shell.
//!
//! Plain data types shared by the application, roster and UI layers. Nothing in
//! here knows about Zellij or about rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`session`]: Signed-in profile and loading flag pushed by the auth provider
//! - [`tab`]: The closed set of navigation tabs
//! - [`call`]: Call sessions and their participants
//! - [`track`]: Music tracks for the player overlay

pub mod call;
pub mod error;
pub mod session;
pub mod tab;
pub mod track;

pub use call::{CallSession, CallType, Participant};
pub use error::{Result, ShellError};
pub use session::{Profile, Session};
pub use tab::Tab;
pub use track::Track;
