//! Toast row renderer.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;

/// Draws `message` as a full-width highlighted row.
pub fn render_toast(message: &str, theme: &Theme, row: usize, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("{}", fit(&format!(" ! {message}"), cols));
    print!("{}", Theme::reset());
}
