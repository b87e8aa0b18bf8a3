//! Empty state component renderer.

use crate::ui::helpers::{centered, position_cursor, Region};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a two-line message centered inside `region`.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, region: Region) {
    if region.height < 2 {
        return;
    }
    let row = region.top + (region.height - 2) / 2;

    position_cursor(row, region.left);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", centered(&empty.message, region.width));
    print!("{}", Theme::reset());

    position_cursor(row + 1, region.left);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", centered(&empty.subtitle, region.width));
    print!("{}", Theme::reset());
}
