//! Call interface overlay renderer.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CallOverlay;

/// Width of the overlay box, clipped to the terminal.
const OVERLAY_WIDTH: usize = 44;

/// Draws the call box in the top-right corner between `top` and `bottom`.
///
/// One line per participant; when they do not fit, the last line counts the
/// rest:
///
/// ```text
/// ┌ video call · c1 · 01:15 ─────────┐
/// │ ● Anna            mic cam        │
/// │   Ada             mic            │
/// └ e: end call ─────────────────────┘
/// ```
pub fn render_call_overlay(overlay: &CallOverlay, theme: &Theme, top: usize, bottom: usize, cols: usize) {
    let width = OVERLAY_WIDTH.min(cols);
    if width < 4 || bottom < top + 1 {
        return;
    }
    let body_rows = bottom - top - 1;
    let (shown, hidden) = visible_participants(overlay.participants.len(), body_rows);
    let inner = width - 2;
    let left = cols - width + 1;
    let mut row = top;

    let title = format!(" {} call · {} · {} ", overlay.call_type, overlay.chat_id, overlay.elapsed);
    position_cursor(row, left);
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("┌{}┐", fill(&title, inner, '─'));
    row += 1;

    for participant in overlay.participants.iter().take(shown) {
        position_cursor(row, left);
        print!("{}│", Theme::fg(&theme.colors.overlay_border));
        let marker = if participant.is_speaking { '●' } else { ' ' };
        let media = match (participant.is_audio_enabled, participant.is_video_enabled) {
            (true, true) => "mic cam",
            (true, false) => "mic",
            (false, true) => "cam",
            (false, false) => "muted",
        };
        let name_width = inner.saturating_sub(12);
        if participant.is_speaking {
            print!("{}", Theme::fg(&theme.colors.speaking_fg));
        } else {
            print!("{}", Theme::fg(&theme.colors.overlay_fg));
        }
        print!("{}", fit(&format!(" {marker} {}", fit(&participant.name, name_width.saturating_sub(3))), name_width));
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", fit(media, inner - name_width));
        print!("{}│", Theme::fg(&theme.colors.overlay_border));
        row += 1;
    }

    if hidden > 0 && body_rows > 0 {
        position_cursor(row, left);
        print!("{}│", Theme::fg(&theme.colors.overlay_border));
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", fit(&format!("   +{hidden} more"), inner));
        print!("{}│", Theme::fg(&theme.colors.overlay_border));
        row += 1;
    }

    position_cursor(row, left);
    print!("└{}┘", fill(" e: end call ", inner, '─'));
    print!("{}", Theme::reset());
}

/// Participant lines to draw and how many are left out, given `rows` lines
/// between the borders. A cut list spends its last line on the `+N more` note.
fn visible_participants(total: usize, rows: usize) -> (usize, usize) {
    if total <= rows {
        (total, 0)
    } else {
        let shown = rows.saturating_sub(1);
        (shown, total - shown)
    }
}

/// `text` followed by `pad` up to `width` characters.
fn fill(text: &str, width: usize, pad: char) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(pad).take(width - len));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_pane_keeps_a_line_for_the_overflow_note() {
        assert_eq!(visible_participants(3, 5), (3, 0));
        assert_eq!(visible_participants(5, 5), (5, 0));
        assert_eq!(visible_participants(9, 4), (3, 6));
        assert_eq!(visible_participants(2, 0), (0, 2));
    }

    #[test]
    fn fill_pads_and_clips() {
        assert_eq!(fill(" ab ", 6, '─'), " ab ──");
        assert_eq!(fill("abcdef", 3, '─'), "abc");
    }
}
