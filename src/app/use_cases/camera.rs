//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::EditorState;
use crate::core::Viewport;
use glam::DVec2;

/// Setzt die Kamera auf Start-Zoomstufe und Szenenmitte zurück.
pub fn reset_camera(state: &mut EditorState) {
    let focus = state.scene.bounds().map_or(DVec2::ZERO, |b| b.center());
    let mut viewport = Viewport::new(
        focus,
        state.options.initial_zoom_level,
        state.viewport.viewport_size(),
    );
    viewport.set_scene_bounds(state.scene.bounds());
    state.viewport = viewport;
}

/// Zoomt eine Stufe hinein (Viewport-Mitte bleibt stehen).
pub fn zoom_in(state: &mut EditorState) {
    state.viewport.zoom(1, None);
}

/// Zoomt eine Stufe heraus (Viewport-Mitte bleibt stehen).
pub fn zoom_out(state: &mut EditorState) {
    state.viewport.zoom(-1, None);
}

/// Zoomt um `change` Stufen auf einen optionalen Screen-Punkt (Mausposition) hin.
///
/// Der Welt-Punkt unter der Maus bleibt an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut EditorState, change: i32, screen: Option<DVec2>) {
    state.viewport.zoom(change, screen);
}

/// Verschiebt die Kamera um ein Delta in Screen-Pixeln.
pub fn pan(state: &mut EditorState, screen_delta: DVec2) {
    state.viewport.pan(screen_delta);
}

/// Übernimmt eine neue Viewport-Größe in Pixeln.
pub fn resize(state: &mut EditorState, viewport_size: DVec2) {
    state.viewport.resize(viewport_size);
}

/// Setzt die Szenengrenzen auf die Punkt-Ausdehnung und zentriert die Kamera.
///
/// Keine Operation wenn die Szene leer ist.
pub fn center_on_scene(state: &mut EditorState) {
    let Some(bounds) = state
        .scene
        .fit_bounds_to_points(state.options.scene_bounds_margin)
    else {
        return;
    };
    state.sync_scene_bounds();
    state.viewport.look_at(bounds.center());

    log::info!(
        "Szenengrenzen: ({:.1}, {:.1}) bis ({:.1}, {:.1}), Maßstab: {:.3}",
        bounds.min.x,
        bounds.min.y,
        bounds.max.x,
        bounds.max.y,
        state.viewport.zoom_coefficient()
    );
}
