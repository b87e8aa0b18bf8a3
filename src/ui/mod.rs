//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Renderable view state and child widget props
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Component renderers
//! - [`helpers`]: Cursor and text fitting utilities
//! - [`theme`]: Theme tokens and ANSI escape generation
//! - [`transition`]: Slide-in effect keyed per view

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod transition;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use transition::{Transition, ViewKey};
pub use viewmodel::{
    AuthView, CallOverlay, ChatDetail, ChatListProps, ContentView, EmptyState, FooterInfo,
    HeaderInfo, LoadingView, MusicPlayerView, ShellView, SidebarItem, SidebarView, UIViewModel,
};
