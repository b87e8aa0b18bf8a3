//! Main content panel renderer.
//!
//! Child widgets are external collaborators; the shell draws a framed panel
//! naming the widget and listing the props it hands over.

use super::empty::render_empty_state;
use crate::ui::helpers::{fit, position_cursor, Region};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ChatDetail, ContentView};

/// Renders the content view for the active tab inside `region`.
pub fn render_content(content: &ContentView, theme: &Theme, region: Region) {
    match content {
        ContentView::Chats { list, detail } => {
            let list_width = region.width / 3;
            let list_region = Region { width: list_width, ..region };
            let detail_region = Region {
                left: region.left + list_width + 1,
                width: region.width.saturating_sub(list_width + 1),
                ..region
            };

            let selected = list.selected_chat_id.as_deref().unwrap_or("none");
            render_panel("ChatList", &[format!("selected: {selected}")], theme, list_region);
            render_divider(theme, region.left + list_width, region);

            match detail {
                ChatDetail::Window { chat_id } => render_panel(
                    "ChatWindow",
                    &[format!("chat: {chat_id}"), "a: audio call  v: video call".to_string()],
                    theme,
                    detail_region,
                ),
                ChatDetail::Empty(empty) => render_empty_state(empty, theme, detail_region),
            }
        }
        ContentView::Profile { user } => render_panel(
            content.widget_name(),
            &[format!("name: {}", user.name), format!("id: {}", user.id)],
            theme,
            region,
        ),
        ContentView::Feed | ContentView::Calls | ContentView::Friends | ContentView::Settings => {
            render_panel(content.widget_name(), &[], theme, region);
        }
    }
}

fn render_panel(title: &str, props: &[String], theme: &Theme, region: Region) {
    if region.height == 0 || region.width == 0 {
        return;
    }

    position_cursor(region.top, region.left);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
    print!("{}", fit(&format!(" {title}"), region.width));
    print!("{}", Theme::reset());

    for (i, prop) in props.iter().enumerate() {
        let row = region.top + 2 + i;
        if row > region.bottom() {
            break;
        }
        position_cursor(row, region.left);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", fit(&format!("   {prop}"), region.width));
        print!("{}", Theme::reset());
    }
}

fn render_divider(theme: &Theme, col: usize, region: Region) {
    print!("{}", Theme::fg(&theme.colors.border));
    for row in region.top..=region.bottom() {
        position_cursor(row, col);
        print!("│");
    }
    print!("{}", Theme::reset());
}
