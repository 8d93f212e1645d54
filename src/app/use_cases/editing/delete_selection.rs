//! Use-Case: Selektierte Linie oder selektierte Punkte löschen.

use crate::app::{EditorState, Gesture};

/// Löscht die selektierte Linie, sonst alle selektierten Punkte samt Linien.
///
/// Gibt die Anzahl gelöschter Elemente zurück.
pub fn delete_selection(state: &mut EditorState) -> usize {
    let removed = if let Some(line_id) = state.selected_line() {
        state.gesture = Gesture::Idle;
        usize::from(state.scene.remove_line(line_id).is_some())
    } else if state.selection.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        0
    } else {
        let removed = state.scene.remove_points(&state.selection);
        state.selection.clear();
        removed
    };

    state.prune_stale_handles();
    if removed > 0 {
        log::info!("{} Elemente gelöscht", removed);
    }
    removed
}
