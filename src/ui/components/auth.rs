//! Auth screen renderer.

use crate::app::modes::AuthMode;
use crate::ui::helpers::{centered, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::AuthView;

const FORM_WIDTH: usize = 40;

/// Renders the login or register form centered on screen, shifted right by
/// `offset` while sliding in.
pub fn render_auth(view: &AuthView, theme: &Theme, rows: usize, cols: usize, offset: usize) {
    let width = FORM_WIDTH.min(cols.saturating_sub(offset));
    if width == 0 {
        return;
    }
    let left = (cols.saturating_sub(FORM_WIDTH)) / 2 + 1 + offset;
    let fields: &[&str] = match view.mode {
        AuthMode::Login => &["Email", "Password"],
        AuthMode::Register => &["Name", "Email", "Password", "Confirm password"],
    };
    let height = 4 + fields.len() + 2;
    let mut row = rows.saturating_sub(height) / 2 + 1;

    position_cursor(row, left);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
    print!("{}", centered(&view.title, width));
    print!("{}", Theme::reset());
    row += 1;

    position_cursor(row, left);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", centered(&view.subtitle, width));
    print!("{}", Theme::reset());
    row += 2;

    for field in fields {
        position_cursor(row, left);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", fit(&format!("{field}: ________________"), width));
        print!("{}", Theme::reset());
        row += 1;
    }
    row += 1;

    position_cursor(row, left);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", centered(&view.switch_hint, width));
    print!("{}", Theme::reset());
}
