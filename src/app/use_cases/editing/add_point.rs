//! Use-Case: Neuen Punkt an einer Screen-Position hinzufügen.

use crate::app::EditorState;
use crate::core::PointId;
use glam::DVec2;

/// Fügt einen neuen Punkt unter der Screen-Position hinzu.
///
/// Bei aktivem Einrasten landet der Punkt auf dem Raster. Der neue Punkt
/// wird anschließend als einziger selektiert.
pub fn add_point_at(state: &mut EditorState, screen: DVec2, label: &str) -> PointId {
    let world = state.grid.snap(state.viewport.screen_to_world(screen));
    let point_id = state.scene.add_point(world, label);

    state.selection.clear();
    state.selection.insert(point_id);
    log::debug!("Punkt {} bei ({}, {}) hinzugefügt", point_id, world.x, world.y);
    point_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Scene;
    use crate::shared::EditorOptions;

    #[test]
    fn add_point_snaps_and_selects() {
        let mut state = EditorState::new(Scene::new(), EditorOptions::default(), DVec2::ZERO);

        let id = add_point_at(&mut state, DVec2::new(70.0, -20.0), "Neu");

        let point = state.scene.point(id).expect("Punkt erwartet");
        assert_eq!(point.position, DVec2::new(64.0, 0.0));
        assert_eq!(point.label, "Neu");
        assert_eq!(state.selection.iter().copied().collect::<Vec<_>>(), vec![id]);
    }

    #[test]
    fn add_point_without_snap_keeps_position() {
        let mut state = EditorState::new(Scene::new(), EditorOptions::default(), DVec2::ZERO);
        state.grid.snap_to_grid = false;

        let id = add_point_at(&mut state, DVec2::new(70.5, -20.0), "");

        assert_eq!(
            state.scene.point(id).map(|p| p.position),
            Some(DVec2::new(70.5, -20.0))
        );
    }
}
