//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! Output goes to stdout, which Zellij draws into the plugin pane.

use crate::app::AppState;
use crate::ui::components;

/// Minimum size below which only a resize hint is drawn.
const MIN_ROWS: usize = 12;
const MIN_COLS: usize = 40;

/// Renders the plugin UI to stdout for the state's current viewport.
pub fn render(state: &AppState) {
    let layout = state.viewport();

    if layout.rows < MIN_ROWS || layout.cols < MIN_COLS {
        tracing::trace!(rows = layout.rows, cols = layout.cols, "pane too small to render board");
        print!("Enlarge the pane to at least {MIN_COLS}x{MIN_ROWS}");
        return;
    }

    let viewmodel = state.compute_viewmodel();
    components::render_board(&viewmodel, &state.theme, &layout);
}
