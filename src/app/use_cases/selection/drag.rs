//! Use-Case: Ziehen und Loslassen der linken Maustaste.

use crate::app::{EditorState, Gesture};
use glam::DVec2;

/// Aktualisiert die laufende Geste mit der neuen Mausposition.
///
/// Beim Verschieben wird nur die Vorschau aktualisiert, die Szene ändert
/// sich erst beim Loslassen. Das Auswahlrechteck berechnet seine
/// vorläufige Selektion bei jedem Aufruf neu.
pub fn drag(state: &mut EditorState, screen: DVec2) {
    let cursor = state.viewport.screen_to_world(screen);

    match &mut state.gesture {
        Gesture::PointMove(movement) => movement.update(cursor, &state.grid),
        Gesture::RectSelect(rect) => {
            rect.end = Some(cursor);
            rect.temp_selection = state.scene.points_within_rect(rect.start, cursor);
            if !rect.additive {
                state.selection.clear();
            }
        }
        Gesture::Idle | Gesture::LineSelected(_) => {}
    }
}

/// Beendet die laufende Geste.
///
/// Verschiebt die Selektion um das aufgelaufene Delta bzw. übernimmt die
/// vorläufige Selektion des Rechtecks. Eine selektierte Linie bleibt selektiert.
pub fn release(state: &mut EditorState) {
    match std::mem::take(&mut state.gesture) {
        Gesture::PointMove(movement) => {
            let delta = movement.delta();
            if delta != DVec2::ZERO {
                state.scene.shift_points(&state.selection, delta);
                log::debug!(
                    "{} Punkte um ({}, {}) verschoben",
                    state.selection.len(),
                    delta.x,
                    delta.y
                );
            }
        }
        Gesture::RectSelect(rect) => {
            if !rect.additive {
                state.selection.clear();
            }
            if rect.end.is_some() {
                state.selection.extend(rect.temp_selection);
            }
        }
        Gesture::LineSelected(line_id) => state.gesture = Gesture::LineSelected(line_id),
        Gesture::Idle => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::helpers::fixtures::chain_state;
    use super::super::press;
    use super::*;

    #[test]
    fn drag_without_release_only_previews() {
        let (mut state, ids, _) = chain_state();
        state.grid.snap_to_grid = false;

        press(&mut state, DVec2::new(200.0, 200.0), false);
        drag(&mut state, DVec2::new(230.0, 215.0));

        assert_eq!(state.gesture.pending_move_delta(), DVec2::new(30.0, 15.0));
        assert_eq!(
            state.scene.point(ids[0]).map(|p| p.position),
            Some(DVec2::new(200.0, 200.0))
        );
    }

    #[test]
    fn release_shifts_whole_selection() {
        let (mut state, ids, _) = chain_state();
        state.grid.snap_to_grid = false;
        state.selection.extend([ids[0], ids[2]]);

        press(&mut state, DVec2::new(201.0, 201.0), false);
        drag(&mut state, DVec2::new(211.0, 196.0));
        release(&mut state);

        assert!(state.gesture.is_idle());
        assert_eq!(
            state.scene.point(ids[0]).map(|p| p.position),
            Some(DVec2::new(210.0, 195.0))
        );
        assert_eq!(
            state.scene.point(ids[2]).map(|p| p.position),
            Some(DVec2::new(417.0, 395.0))
        );
        assert_eq!(
            state.scene.point(ids[1]).map(|p| p.position),
            Some(DVec2::new(200.0, 390.0))
        );
    }

    #[test]
    fn move_snaps_grabbed_point_to_grid() {
        let (mut state, ids, _) = chain_state();
        state.grid.density = 4;

        // 3 px rechts vom Punkt gegriffen
        press(&mut state, DVec2::new(203.0, 200.0), false);
        drag(&mut state, DVec2::new(230.0, 213.0));
        release(&mut state);

        // Punkt wäre bei (227, 213) → Raster 16 → (224, 208)
        assert_eq!(
            state.scene.point(ids[0]).map(|p| p.position),
            Some(DVec2::new(224.0, 208.0))
        );
    }

    #[test]
    fn click_on_point_without_drag_moves_nothing() {
        let (mut state, ids, _) = chain_state();

        press(&mut state, DVec2::new(203.0, 203.0), false);
        release(&mut state);

        assert_eq!(
            state.scene.point(ids[0]).map(|p| p.position),
            Some(DVec2::new(200.0, 200.0))
        );
        assert!(state.selection.contains(&ids[0]));
    }

    #[test]
    fn rect_selection_is_merged_on_release() {
        let (mut state, ids, _) = chain_state();

        press(&mut state, DVec2::new(150.0, 150.0), false);
        drag(&mut state, DVec2::new(250.0, 395.0));

        assert_eq!(state.gesture.temp_selection().map(|s| s.len()), Some(2));
        assert!(state.selection.is_empty());

        release(&mut state);

        assert!(state.gesture.is_idle());
        assert_eq!(
            state.selection.iter().copied().collect::<Vec<_>>(),
            vec![ids[0], ids[1]]
        );
    }

    #[test]
    fn non_additive_rect_replaces_selection() {
        let (mut state, ids, _) = chain_state();
        state.selection.insert(ids[2]);

        press(&mut state, DVec2::new(150.0, 150.0), false);
        drag(&mut state, DVec2::new(250.0, 250.0));
        release(&mut state);

        assert_eq!(state.selection.iter().copied().collect::<Vec<_>>(), vec![ids[0]]);
    }

    #[test]
    fn additive_rect_extends_selection() {
        let (mut state, ids, _) = chain_state();
        state.selection.insert(ids[2]);

        press(&mut state, DVec2::new(150.0, 150.0), true);
        drag(&mut state, DVec2::new(250.0, 250.0));
        assert!(state.selection.contains(&ids[2]));
        release(&mut state);

        assert_eq!(state.selection.len(), 2);
        assert!(state.selection.contains(&ids[0]));
        assert!(state.selection.contains(&ids[2]));
    }

    #[test]
    fn click_on_empty_space_clears_selection() {
        let (mut state, ids, _) = chain_state();
        state.selection.insert(ids[1]);

        press(&mut state, DVec2::new(700.0, 50.0), false);
        release(&mut state);

        assert!(state.selection.is_empty());
    }

    #[test]
    fn selected_line_survives_release() {
        let (mut state, _, lines) = chain_state();

        press(&mut state, DVec2::new(202.0, 300.0), false);
        drag(&mut state, DVec2::new(260.0, 300.0));
        release(&mut state);

        assert_eq!(state.gesture.selected_line(), Some(lines[0]));
    }
}
