//! Use-Case: Drücken der linken Maustaste.

use crate::app::gesture::{PointMove, RectSelect};
use crate::app::{EditorState, Gesture};
use glam::DVec2;

/// Startet eine Geste an der Screen-Position.
///
/// - Treffer auf einen Punkt: Verschieben der Selektion. Mit `additive`
///   wird ein bereits selektierter Punkt stattdessen abgewählt.
/// - Treffer auf eine Linie (nur ohne `additive`): Linie wird selektiert,
///   die Punkt-Selektion geleert.
/// - Sonst: Auswahlrechteck.
pub fn press(state: &mut EditorState, screen: DVec2, additive: bool) {
    let cursor = state.viewport.screen_to_world(screen);

    if let Some(point_id) =
        state
            .viewport
            .pick_point(&state.scene, screen, state.options.point_pick_size_px)
    {
        if additive && state.selection.contains(&point_id) {
            state.selection.shift_remove(&point_id);
            state.gesture = Gesture::Idle;
            return;
        }
        if !additive && !state.selection.contains(&point_id) {
            state.selection.clear();
        }
        state.selection.insert(point_id);

        let position = state.scene.point(point_id).map_or(cursor, |p| p.position);
        state.gesture = Gesture::PointMove(PointMove::new(point_id, position, cursor));
        return;
    }

    if !additive {
        if let Some(line_id) =
            state
                .viewport
                .pick_line(&state.scene, screen, state.options.line_pick_distance_px)
        {
            state.selection.clear();
            state.gesture = Gesture::LineSelected(line_id);
            return;
        }
    }

    state.gesture = Gesture::RectSelect(RectSelect::new(cursor, additive));
}

#[cfg(test)]
mod tests {
    use super::super::helpers::fixtures::chain_state;
    use super::*;

    #[test]
    fn press_on_point_selects_and_starts_move() {
        let (mut state, ids, _) = chain_state();

        press(&mut state, DVec2::new(203.0, 198.0), false);

        assert_eq!(state.selection.iter().copied().collect::<Vec<_>>(), vec![ids[0]]);
        match &state.gesture {
            Gesture::PointMove(movement) => {
                assert_eq!(movement.anchor, ids[0]);
                assert_eq!(movement.start, DVec2::new(200.0, 200.0));
                assert_eq!(movement.offset, DVec2::new(3.0, -2.0));
                assert_eq!(movement.end, None);
            }
            other => panic!("PointMove erwartet, war {:?}", other),
        }
    }

    #[test]
    fn press_on_unselected_point_replaces_selection() {
        let (mut state, ids, _) = chain_state();
        state.selection.insert(ids[2]);

        press(&mut state, DVec2::new(200.0, 390.0), false);

        assert_eq!(state.selection.len(), 1);
        assert!(state.selection.contains(&ids[1]));
    }

    #[test]
    fn press_on_selected_point_keeps_selection() {
        let (mut state, ids, _) = chain_state();
        state.selection.extend([ids[0], ids[2]]);

        press(&mut state, DVec2::new(200.0, 200.0), false);

        assert_eq!(state.selection.len(), 2);
        assert!(matches!(state.gesture, Gesture::PointMove(_)));
    }

    #[test]
    fn additive_press_toggles_selected_point_out() {
        let (mut state, ids, _) = chain_state();
        state.selection.extend([ids[0], ids[1]]);

        press(&mut state, DVec2::new(200.0, 200.0), true);

        assert!(!state.selection.contains(&ids[0]));
        assert!(state.selection.contains(&ids[1]));
        assert!(state.gesture.is_idle());
    }

    #[test]
    fn additive_press_adds_unselected_point() {
        let (mut state, ids, _) = chain_state();
        state.selection.insert(ids[2]);

        press(&mut state, DVec2::new(200.0, 390.0), true);

        assert_eq!(state.selection.len(), 2);
        assert!(matches!(state.gesture, Gesture::PointMove(_)));
    }

    #[test]
    fn press_on_line_selects_line_and_clears_points() {
        let (mut state, ids, lines) = chain_state();
        state.selection.insert(ids[2]);

        press(&mut state, DVec2::new(202.0, 300.0), false);

        assert!(state.selection.is_empty());
        assert_eq!(state.gesture.selected_line(), Some(lines[0]));
    }

    #[test]
    fn additive_press_on_line_starts_rect() {
        let (mut state, _, _) = chain_state();

        press(&mut state, DVec2::new(202.0, 300.0), true);

        match &state.gesture {
            Gesture::RectSelect(rect) => assert!(rect.additive),
            other => panic!("RectSelect erwartet, war {:?}", other),
        }
    }

    #[test]
    fn press_on_empty_space_starts_rect() {
        let (mut state, _, _) = chain_state();

        press(&mut state, DVec2::new(600.0, 100.0), false);

        match &state.gesture {
            Gesture::RectSelect(rect) => {
                assert!(!rect.additive);
                assert_eq!(rect.start, DVec2::new(600.0, 100.0));
            }
            other => panic!("RectSelect erwartet, war {:?}", other),
        }
    }
}
