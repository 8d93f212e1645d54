use glam::DVec2;
use planar_scene_editor::app::use_cases::{camera, editing, selection};
use planar_scene_editor::app::build_render_scene;
use planar_scene_editor::{EditorOptions, EditorState, Gesture, PointId, Scene, WorldBounds};

/// Beispielszene auf 800×600 mit Szenengrenzen 0..800 × 0..600 (Welt = Screen).
fn sample_state() -> (EditorState, Vec<PointId>) {
    let mut scene = Scene::sample();
    scene.set_bounds(Some(WorldBounds::from_corners(
        DVec2::ZERO,
        DVec2::new(800.0, 600.0),
    )));
    let state = EditorState::new(scene, EditorOptions::default(), DVec2::new(800.0, 600.0));
    let ids = state.scene.points().map(|p| p.id).collect();
    (state, ids)
}

fn position(state: &EditorState, id: PointId) -> DVec2 {
    state.scene.point(id).map(|p| p.position).expect("Punkt vorhanden")
}

#[test]
fn test_move_with_snapping_updates_lines() {
    let (mut state, ids) = sample_state();

    selection::press(&mut state, DVec2::new(407.0, 400.0), false);
    selection::drag(&mut state, DVec2::new(430.0, 430.0));
    selection::drag(&mut state, DVec2::new(452.0, 441.0));

    // Vorschau bereits eingerastet, Szene unverändert
    let frame = build_render_scene(&state);
    assert_eq!(
        frame.point(ids[2]).map(|p| p.screen),
        Some(DVec2::new(448.0, 448.0))
    );
    assert_eq!(position(&state, ids[2]), DVec2::new(407.0, 400.0));

    selection::release(&mut state);

    assert_eq!(position(&state, ids[2]), DVec2::new(448.0, 448.0));
    let line = state.scene.lines().nth(1).expect("Linie erwartet");
    let geometry = line.geometry();
    assert!(geometry.evaluate(position(&state, ids[1])).abs() < 1e-9);
    assert!(geometry.evaluate(position(&state, ids[2])).abs() < 1e-9);
}

#[test]
fn test_rect_select_then_group_move() {
    let (mut state, ids) = sample_state();
    state.grid.snap_to_grid = false;

    selection::press(&mut state, DVec2::new(100.0, 100.0), false);
    selection::drag(&mut state, DVec2::new(300.0, 395.0));
    selection::release(&mut state);
    assert_eq!(state.selection.len(), 2);

    selection::press(&mut state, DVec2::new(200.0, 390.0), false);
    selection::drag(&mut state, DVec2::new(250.0, 380.0));
    selection::release(&mut state);

    assert_eq!(position(&state, ids[0]), DVec2::new(250.0, 190.0));
    assert_eq!(position(&state, ids[1]), DVec2::new(250.0, 380.0));
    assert_eq!(position(&state, ids[2]), DVec2::new(407.0, 400.0));
}

#[test]
fn test_line_select_then_delete() {
    let (mut state, ids) = sample_state();
    state.selection.insert(ids[0]);

    selection::press(&mut state, DVec2::new(300.0, 394.0), false);
    assert!(state.selection.is_empty());
    assert!(matches!(state.gesture, Gesture::LineSelected(_)));
    selection::release(&mut state);

    assert_eq!(editing::delete_selection(&mut state), 1);

    assert_eq!(state.scene.line_count(), 1);
    assert_eq!(state.scene.point_count(), 3);
    assert!(state.gesture.is_idle());
}

#[test]
fn test_delete_points_cascades_and_clears_render_state() {
    let (mut state, ids) = sample_state();

    selection::press(&mut state, DVec2::new(200.0, 390.0), false);
    selection::release(&mut state);
    selection::pointer_moved(&mut state, DVec2::new(200.0, 392.0));
    assert_eq!(state.hover.point, Some(ids[1]));

    assert_eq!(editing::delete_selection(&mut state), 1);

    assert_eq!(state.scene.line_count(), 0);
    let frame = build_render_scene(&state);
    assert_eq!(frame.points.len(), 2);
    assert!(frame.lines.is_empty());
    assert!(frame.points.iter().all(|p| !p.selected && !p.hovered));
}

#[test]
fn test_zoomed_view_picks_with_screen_tolerance() {
    let (mut state, ids) = sample_state();
    camera::zoom_towards(&mut state, 8, Some(DVec2::new(200.0, 200.0)));
    assert!((state.viewport.zoom_coefficient() - 2.0).abs() < 1e-9);

    // 6 px neben dem Punkt → 3 Welteinheiten
    selection::press(&mut state, DVec2::new(206.0, 200.0), false);

    assert_eq!(
        state.selection.iter().copied().collect::<Vec<_>>(),
        vec![ids[0]]
    );
    assert!(matches!(state.gesture, Gesture::PointMove(_)));
}

#[test]
fn test_add_and_connect_new_points() {
    let (mut state, ids) = sample_state();
    state.grid.snap_to_grid = false;

    let new_point = editing::add_point_at(&mut state, DVec2::new(600.0, 100.0), "Neu");
    state.selection.insert(ids[2]);

    let lines = editing::connect_selected_points(&mut state).expect("Verbinden erwartet");

    assert_eq!(lines.len(), 1);
    assert_eq!(state.scene.line_count(), 3);
    assert_eq!(
        state.scene.point(ids[2]).map(|p| p.dependents().len()),
        Some(2)
    );
    assert_eq!(position(&state, new_point), DVec2::new(600.0, 100.0));
}
