//! Top-level rendering coordinator.
//!
//! Computes the view model and hands it to the component for the current
//! gate: skeleton, auth form, or shell frame.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; the host repaints the pane before each render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(chrono::Utc::now().timestamp());
    render_viewmodel(&viewmodel, &state.theme, state.transition.offset(), rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, offset: usize, rows: usize, cols: usize) {
    match vm {
        UIViewModel::Loading(loading) => components::render_loading(loading, theme, rows, cols),
        UIViewModel::Auth(auth) => components::render_auth(auth, theme, rows, cols, offset),
        UIViewModel::Shell(shell) => components::render_shell(shell, theme, rows, cols),
    }
}
