//! Loading skeleton renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LoadingView;

/// Sidebar skeleton column width.
const SIDEBAR_WIDTH: usize = 22;

/// Rows per content block.
const BLOCK_HEIGHT: usize = 3;

/// Draws placeholder bars: an avatar line and nav bars on the left, a title
/// and content blocks on the right.
pub fn render_loading(view: &LoadingView, theme: &Theme, rows: usize, cols: usize) {
    let shade = Theme::fg(&theme.colors.skeleton_fg);
    let sidebar_width = SIDEBAR_WIDTH.min(cols);
    let content_left = sidebar_width + 3;
    let content_width = cols.saturating_sub(content_left + 1);

    position_cursor(2, 2);
    print!("{shade}██ {}", "▆".repeat(sidebar_width.saturating_sub(6)));

    for i in 0..view.sidebar_bars {
        let row = 4 + i * 2;
        if row > rows {
            break;
        }
        position_cursor(row, 2);
        print!("{shade}{}", "▆".repeat(sidebar_width.saturating_sub(2)));
    }

    if content_width == 0 {
        print!("{}", Theme::reset());
        return;
    }

    position_cursor(2, content_left);
    print!("{shade}{}", "▆".repeat(content_width.min(24)));

    for i in 0..view.content_blocks {
        let top = 4 + i * (BLOCK_HEIGHT + 1);
        for row in top..top + BLOCK_HEIGHT {
            if row > rows {
                break;
            }
            position_cursor(row, content_left);
            print!("{shade}{}", "█".repeat(content_width));
        }
    }
    print!("{}", Theme::reset());
}
