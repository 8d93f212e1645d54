//! Use-Case: Hover-Hervorhebung bei Mausbewegung ohne gedrückte Taste.

use crate::app::EditorState;
use glam::DVec2;

/// Merkt sich nächsten Punkt und nächste Linie im Hover-Radius.
pub fn pointer_moved(state: &mut EditorState, screen: DVec2) {
    let radius = state.options.hover_radius_px;
    state.hover.point = state.viewport.pick_point(&state.scene, screen, radius);
    state.hover.line = state.viewport.pick_line(&state.scene, screen, radius);
}
