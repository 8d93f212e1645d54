//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::app::{EditorState, Gesture};

/// Löscht Punkt- und Linien-Selektion explizit.
pub fn clear_selection(state: &mut EditorState) {
    state.selection.clear();
    if state.gesture.selected_line().is_some() {
        state.gesture = Gesture::Idle;
    }
}
