//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) by
//! `compute_viewmodel` and consumed by the renderer. They hold no behavior,
//! only the display-ready data and the props each child view receives.
//!
//! The main content is a [`ContentView`] with one variant per [`Tab`]. Code
//! that maps tabs to views matches on it exhaustively, so a new tab cannot be
//! added without deciding what it renders.

use crate::app::modes::AuthMode;
use crate::domain::{CallType, Participant, Profile, Tab, Track};

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum UIViewModel {
    /// Skeleton shown while the session is loading.
    Loading(LoadingView),
    /// Login or register screen.
    Auth(AuthView),
    /// Authenticated shell.
    Shell(ShellView),
}

/// Placeholder skeleton layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingView {
    /// Number of placeholder bars in the sidebar column.
    pub sidebar_bars: usize,
    /// Number of placeholder blocks in the content column.
    pub content_blocks: usize,
}

/// Auth screen contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthView {
    pub mode: AuthMode,
    pub title: String,
    pub subtitle: String,
    /// Hint for the key that switches to the other form.
    pub switch_hint: String,
}

/// Authenticated shell frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellView {
    pub header: HeaderInfo,
    pub sidebar: SidebarView,
    pub content: ContentView,
    /// Horizontal slide-in offset for the content panel, in columns.
    pub content_offset: usize,
    /// Present while a call is active; drawn above the content.
    pub call_overlay: Option<CallOverlay>,
    /// Transient message drawn above the footer.
    pub toast: Option<String>,
    pub music_player: MusicPlayerView,
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Persistent side navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    pub user_name: String,
    pub user_id: String,
    pub items: Vec<SidebarItem>,
}

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub tab: Tab,
    pub label: &'static str,
    /// Digit key that selects this tab.
    pub shortcut: char,
    pub is_active: bool,
}

/// Main content region, one variant per tab.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentView {
    Feed,
    Chats {
        /// Props for the chat list.
        list: ChatListProps,
        /// Right-hand pane.
        detail: ChatDetail,
    },
    Calls,
    Friends,
    Profile {
        /// The profile being edited.
        user: Profile,
    },
    Settings,
}

impl ContentView {
    /// The tab this view belongs to.
    #[must_use]
    pub const fn tab(&self) -> Tab {
        match self {
            Self::Feed => Tab::Feed,
            Self::Chats { .. } => Tab::Chats,
            Self::Calls => Tab::Calls,
            Self::Friends => Tab::Friends,
            Self::Profile { .. } => Tab::Profile,
            Self::Settings => Tab::Settings,
        }
    }

    /// Name of the collaborator widget that fills this view.
    #[must_use]
    pub const fn widget_name(&self) -> &'static str {
        match self {
            Self::Feed => "NewsFeed",
            Self::Chats { .. } => "ChatList",
            Self::Calls => "CallManager",
            Self::Friends => "FriendsManager",
            Self::Profile { .. } => "ProfileEditor",
            Self::Settings => "Settings",
        }
    }
}

/// Props handed to the chat list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatListProps {
    pub selected_chat_id: Option<String>,
}

/// Right-hand pane of the chats tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatDetail {
    /// Conversation window for the selected chat.
    Window { chat_id: String },
    /// Nothing selected yet.
    Empty(EmptyState),
}

/// Empty state message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Props handed to the call interface overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOverlay {
    pub chat_id: String,
    pub call_type: CallType,
    pub participants: Vec<Participant>,
    /// Elapsed call time, already formatted.
    pub elapsed: String,
}

/// Props handed to the music player.
#[derive(Debug, Clone, PartialEq)]
pub struct MusicPlayerView {
    pub track: Option<Track>,
    /// True only when a track exists and the player has not been closed.
    pub is_visible: bool,
}
