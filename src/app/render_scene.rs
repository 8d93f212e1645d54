//! Builder für Render-Szenen aus dem EditorState.

use crate::app::EditorState;
use crate::core::{PointId, Viewport};
use crate::shared::{RenderLine, RenderPoint, RenderScene};
use glam::DVec2;

/// Mindestabstand benachbarter Rasterlinien in Pixeln; dichter wird nicht gezeichnet.
const MIN_GRID_SPACING_PX: f64 = 2.0;

/// Baut eine RenderScene aus dem aktuellen EditorState.
///
/// Während einer Verschiebung erscheinen selektierte Punkte (und die
/// Enden ihrer Linien) bereits an der Zielposition.
pub fn build(state: &EditorState) -> RenderScene {
    let viewport = &state.viewport;
    let delta = state.gesture.pending_move_delta();
    let temp_selection = state.gesture.temp_selection();
    let selected_line = state.gesture.selected_line();

    let shifted = |id: PointId, position: DVec2| {
        if state.selection.contains(&id) {
            position + delta
        } else {
            position
        }
    };

    let lines = state
        .scene
        .lines()
        .filter_map(|line| {
            let a = state.scene.point(line.point_a)?;
            let b = state.scene.point(line.point_b)?;
            Some(RenderLine {
                id: line.id,
                screen_a: viewport.world_to_screen(shifted(a.id, a.position)),
                screen_b: viewport.world_to_screen(shifted(b.id, b.position)),
                selected: selected_line == Some(line.id),
                hovered: state.hover.line == Some(line.id),
            })
        })
        .collect();

    let points = state
        .scene
        .points()
        .map(|point| RenderPoint {
            id: point.id,
            screen: viewport.world_to_screen(shifted(point.id, point.position)),
            label: point.label.clone(),
            selected: state.selection.contains(&point.id),
            temp_selected: temp_selection.is_some_and(|s| s.contains(&point.id)),
            hovered: state.hover.point == Some(point.id),
        })
        .collect();

    let drag_rect = state.gesture.drag_rect().map(|(start, end)| {
        let a = viewport.world_to_screen(start);
        let b = viewport.world_to_screen(end);
        (a.min(b), a.max(b))
    });

    let (grid_x, grid_y) = match state.grid.step() {
        Some(step) if step * viewport.zoom_coefficient() >= MIN_GRID_SPACING_PX => {
            grid_lines(viewport, step)
        }
        _ => (Vec::new(), Vec::new()),
    };

    RenderScene {
        viewport_size: viewport.viewport_size(),
        scale: viewport.zoom_coefficient(),
        points,
        lines,
        drag_rect,
        grid_x,
        grid_y,
    }
}

/// Screen-Koordinaten aller sichtbaren Rasterlinien (vertikal, horizontal).
fn grid_lines(viewport: &Viewport, step: f64) -> (Vec<f64>, Vec<f64>) {
    let visible = viewport.visible_world_rect();
    let first = (visible.min / step).ceil() * step;
    let last = (visible.max / step).floor() * step;

    let mut grid_x = Vec::new();
    let mut x = first.x;
    while x <= last.x {
        grid_x.push(viewport.world_to_screen(DVec2::new(x, 0.0)).x);
        x += step;
    }

    let mut grid_y = Vec::new();
    let mut y = first.y;
    while y <= last.y {
        grid_y.push(viewport.world_to_screen(DVec2::new(0.0, y)).y);
        y += step;
    }

    (grid_x, grid_y)
}
