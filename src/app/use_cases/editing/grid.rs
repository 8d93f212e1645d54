//! Use-Case: Raster umschalten.

use crate::app::EditorState;

/// Schaltet auf die nächste Rasterdichte weiter.
pub fn next_grid_density(state: &mut EditorState) {
    state.grid.next_density();
}

/// Schaltet das Einrasten beim Verschieben um.
pub fn toggle_snap_to_grid(state: &mut EditorState) {
    state.grid.toggle_snap();
    log::debug!("Einrasten: {}", state.grid.snap_to_grid);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Scene;
    use crate::shared::EditorOptions;
    use glam::DVec2;

    #[test]
    fn grid_commands_update_state() {
        let mut state = EditorState::new(Scene::new(), EditorOptions::default(), DVec2::ONE);

        next_grid_density(&mut state);
        assert_eq!(state.grid.step(), Some(32.0));

        toggle_snap_to_grid(&mut state);
        assert!(!state.grid.snap_active());
    }
}
