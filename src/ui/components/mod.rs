//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`footer`]: Keybinding hints
//! - [`sidebar`]: User card and tab navigation
//! - [`content`]: Panel for the active tab's widget
//! - [`empty`]: Empty state message
//! - [`call`]: Call interface overlay
//! - [`player`]: Music player bar
//! - [`toast`]: Transient notification row
//! - [`auth`]: Login and register forms
//! - [`skeleton`]: Loading placeholder
//!
//! # Shell Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Sidebar] │ [Content (slides in)]      [Call overlay]
//!    ...    │        ...
//! [Toast, when a notification is showing]
//! [Music player bar, when shown]
//! [Border]
//! [Footer]
//! ```

mod auth;
mod call;
mod content;
mod empty;
mod footer;
mod header;
mod player;
mod sidebar;
mod skeleton;
mod toast;

pub use auth::render_auth;
pub use skeleton::render_loading;

use crate::ui::helpers::{position_cursor, Region};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ShellView;

use call::render_call_overlay;
use content::render_content;
use footer::render_footer;
use header::render_header;
use player::render_music_player;
use sidebar::render_sidebar;
use toast::render_toast;

/// Sidebar column width, excluding the divider.
const SIDEBAR_WIDTH: usize = 22;

/// Rows taken by header and top border.
const TOP_CHROME: usize = 2;

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the authenticated shell frame.
pub fn render_shell(vm: &ShellView, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 1;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let footer_row = rows;
    let bottom_border = rows.saturating_sub(1);
    let player_row = vm.music_player.is_visible.then(|| rows.saturating_sub(2));
    let toast_row = vm
        .toast
        .as_ref()
        .map(|_| player_row.unwrap_or(bottom_border).saturating_sub(1));
    let body_bottom = toast_row
        .or(player_row)
        .unwrap_or(bottom_border)
        .saturating_sub(1);
    let body_height = (body_bottom + 1).saturating_sub(current_row);

    if body_height > 0 {
        let sidebar_width = SIDEBAR_WIDTH.min(cols / 3);
        let sidebar_region = Region {
            top: current_row,
            left: 1,
            width: sidebar_width,
            height: body_height,
        };
        render_sidebar(&vm.sidebar, theme, sidebar_region);

        print!("{}", Theme::fg(&theme.colors.border));
        for row in current_row..=body_bottom {
            position_cursor(row, sidebar_width + 1);
            print!("│");
        }
        print!("{}", Theme::reset());

        let content_region = Region {
            top: current_row,
            left: sidebar_width + 3,
            width: cols.saturating_sub(sidebar_width + 3),
            height: body_height,
        };
        render_content(&vm.content, theme, content_region.shifted(vm.content_offset));
    }

    if let Some(overlay) = &vm.call_overlay {
        render_call_overlay(overlay, theme, TOP_CHROME + 1, body_bottom, cols);
    }

    if let (Some(row), Some(message)) = (toast_row, &vm.toast) {
        render_toast(message, theme, row, cols);
    }

    if let Some(row) = player_row {
        render_music_player(&vm.music_player, theme, row, cols);
    }

    render_border(bottom_border, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
