//! Use-Case: Selektierte Punkte in Auswahlreihenfolge verbinden.

use crate::app::EditorState;
use crate::core::{LineId, PointId};
use anyhow::Result;

/// Verbindet die selektierten Punkte als Kette in Auswahlreihenfolge.
///
/// Mit weniger als zwei selektierten Punkten passiert nichts.
pub fn connect_selected_points(state: &mut EditorState) -> Result<Vec<LineId>> {
    if state.selection.len() < 2 {
        log::debug!("Zum Verbinden sind mindestens zwei Punkte nötig");
        return Ok(Vec::new());
    }

    let chain: Vec<PointId> = state.selection.iter().copied().collect();
    let lines = state.scene.connect_chain(&chain)?;
    log::info!("{} Linien erstellt", lines.len());
    Ok(lines)
}
