//! Gesten-Zustand eines Maustasten-Zyklus (Drücken → Ziehen → Loslassen) und Raster.

use crate::core::{LineId, PointId};
use crate::shared::options::{GRID_DENSITY_MAX, GRID_DENSITY_OFF};
use crate::shared::EditorOptions;
use glam::DVec2;
use indexmap::IndexSet;

/// Laufende Verschiebung der selektierten Punkte.
///
/// `start` ist die Position des gegriffenen Punkts, `offset` der feste
/// Abstand zwischen Mauszeiger und diesem Punkt beim Drücken.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMove {
    /// Gegriffener Punkt
    pub anchor: PointId,
    /// Position des gegriffenen Punkts beim Drücken
    pub start: DVec2,
    /// Aktuelle (ggf. eingerastete) Zielposition, `None` bis zum ersten Ziehen
    pub end: Option<DVec2>,
    /// Mauszeiger minus Punktposition beim Drücken
    pub offset: DVec2,
}

impl PointMove {
    /// Startet eine Verschiebung am gegriffenen Punkt.
    pub fn new(anchor: PointId, point_position: DVec2, cursor: DVec2) -> Self {
        Self {
            anchor,
            start: point_position,
            end: None,
            offset: cursor - point_position,
        }
    }

    /// Aktualisiert die Zielposition aus der Mausposition.
    ///
    /// Gerastet wird die Position des gegriffenen Punkts, der Abstand zum
    /// Mauszeiger bleibt erhalten.
    pub fn update(&mut self, cursor: DVec2, grid: &GridSettings) {
        self.end = Some(grid.snap(cursor - self.offset));
    }

    /// Bisher aufgelaufene Verschiebung
    pub fn delta(&self) -> DVec2 {
        self.end.map_or(DVec2::ZERO, |end| end - self.start)
    }
}

/// Laufende Rechteck-Selektion in Weltkoordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct RectSelect {
    /// Shift beim Drücken gehalten
    pub additive: bool,
    pub start: DVec2,
    /// Gegenecke, `None` bis zum ersten Ziehen
    pub end: Option<DVec2>,
    /// Punkte im aktuellen Rechteck, erst beim Loslassen übernommen
    pub temp_selection: IndexSet<PointId>,
}

impl RectSelect {
    /// Startet eine Rechteck-Selektion an der Mausposition.
    pub fn new(start: DVec2, additive: bool) -> Self {
        Self {
            additive,
            start,
            end: None,
            temp_selection: IndexSet::new(),
        }
    }
}

/// Modus der aktuellen Geste. Die Modi schließen sich gegenseitig aus.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Selektierte Punkte werden verschoben
    PointMove(PointMove),
    /// Auswahlrechteck wird aufgezogen
    RectSelect(RectSelect),
    /// Eine Linie ist selektiert (bleibt nach dem Loslassen bestehen)
    LineSelected(LineId),
}

impl Gesture {
    /// Gibt zurück, ob keine Geste aktiv ist.
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// Verschiebung, die beim Loslassen angewendet würde
    pub fn pending_move_delta(&self) -> DVec2 {
        match self {
            Gesture::PointMove(movement) => movement.delta(),
            _ => DVec2::ZERO,
        }
    }

    /// Selektierte Linie, falls vorhanden
    pub fn selected_line(&self) -> Option<LineId> {
        match self {
            Gesture::LineSelected(line_id) => Some(*line_id),
            _ => None,
        }
    }

    /// Ecken des Auswahlrechtecks in Weltkoordinaten (erst nach dem ersten Ziehen)
    pub fn drag_rect(&self) -> Option<(DVec2, DVec2)> {
        match self {
            Gesture::RectSelect(rect) => rect.end.map(|end| (rect.start, end)),
            _ => None,
        }
    }

    /// Vorläufige Selektion des Auswahlrechtecks
    pub fn temp_selection(&self) -> Option<&IndexSet<PointId>> {
        match self {
            Gesture::RectSelect(rect) => Some(&rect.temp_selection),
            _ => None,
        }
    }
}

/// Rundet eine Position auf das nächste Vielfache der Rasterweite.
pub fn round_to_grid(position: DVec2, step: f64) -> DVec2 {
    (position / step).round() * step
}

/// Raster-Einstellungen: Dichte (Rasterweite = 2^Dichte) und Einrasten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSettings {
    /// Rasterdichte, `GRID_DENSITY_OFF` = Raster aus
    pub density: i32,
    pub snap_to_grid: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

impl GridSettings {
    /// Übernimmt die Start-Einstellungen aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            density: options.grid_density.clamp(GRID_DENSITY_OFF, GRID_DENSITY_MAX),
            snap_to_grid: options.snap_to_grid,
        }
    }

    /// Rasterweite in Welteinheiten, `None` wenn das Raster aus ist
    pub fn step(&self) -> Option<f64> {
        (self.density > GRID_DENSITY_OFF).then(|| 2f64.powi(self.density))
    }

    /// Gibt zurück, ob beim Verschieben eingerastet wird.
    pub fn snap_active(&self) -> bool {
        self.snap_to_grid && self.step().is_some()
    }

    /// Rastet eine Position ein, sofern Einrasten aktiv ist.
    pub fn snap(&self, position: DVec2) -> DVec2 {
        match self.step() {
            Some(step) if self.snap_to_grid => round_to_grid(position, step),
            _ => position,
        }
    }

    /// Schaltet auf die nächstfeinere Dichte; nach "aus" folgt die gröbste.
    pub fn next_density(&mut self) {
        self.density -= 1;
        if self.density < GRID_DENSITY_OFF {
            self.density = GRID_DENSITY_MAX;
        }
        match self.step() {
            Some(step) => log::debug!("Rasterweite {} Welteinheiten", step),
            None => log::debug!("Raster aus"),
        }
    }

    pub fn toggle_snap(&mut self) {
        self.snap_to_grid = !self.snap_to_grid;
    }
}
