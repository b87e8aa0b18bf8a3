//! Side navigation renderer.

use crate::ui::helpers::{fit, position_cursor, Region};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SidebarView;

/// Renders the user card and one line per tab inside `region`.
///
/// ```text
///  Ada
///  @u1
///
///  1  Feed
/// ▌2  Chats        ← active
///  3  Calls
/// ```
pub fn render_sidebar(sidebar: &SidebarView, theme: &Theme, region: Region) {
    let width = region.width;
    let mut row = region.top;

    position_cursor(row, region.left);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
    print!("{}", fit(&format!(" {}", sidebar.user_name), width));
    print!("{}", Theme::reset());
    row += 1;

    position_cursor(row, region.left);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", fit(&format!(" @{}", sidebar.user_id), width));
    print!("{}", Theme::reset());
    row += 2;

    for item in &sidebar.items {
        if row > region.bottom() {
            break;
        }
        position_cursor(row, region.left);
        let line = fit(&format!("{}{}  {}", if item.is_active { '▌' } else { ' ' }, item.shortcut, item.label), width);
        if item.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.sidebar_active_fg));
            print!("{}", Theme::bg(&theme.colors.sidebar_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{line}");
        print!("{}", Theme::reset());
        row += 1;
    }
}
