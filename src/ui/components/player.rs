//! Music player bar renderer.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::MusicPlayerView;

/// Draws the now-playing bar on `row`. Draws nothing when hidden.
pub fn render_music_player(player: &MusicPlayerView, theme: &Theme, row: usize, cols: usize) {
    let (Some(track), true) = (&player.track, player.is_visible) else {
        return;
    };

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.player_fg));
    let line = format!(
        " ♪ {} — {}  [{}]   m: hide",
        track.title,
        track.artist,
        track.duration_label()
    );
    print!("{}", fit(&line, cols));
    print!("{}", Theme::reset());
}
