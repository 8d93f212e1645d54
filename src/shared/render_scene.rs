//! Render-Szene als expliziter Übergabevertrag zwischen App und Zeichenschicht.
//!
//! Lebt im shared-Modul, da `app` sie baut und die Zeichenschicht sie konsumiert.
//! Alle Koordinaten sind bereits in Screen-Pixeln.

use crate::core::{LineId, PointId};
use glam::DVec2;

/// Ein Punkt im aktuellen Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPoint {
    /// Handle des Punkts in der Szene
    pub id: PointId,
    /// Screen-Position (inkl. laufender Verschiebung)
    pub screen: DVec2,
    /// Beschriftung
    pub label: String,
    /// Teil der Selektion
    pub selected: bool,
    /// Im laufenden Auswahlrechteck
    pub temp_selected: bool,
    /// Unter dem Mauszeiger
    pub hovered: bool,
}

impl RenderPoint {
    /// Gibt zurück, ob der Punkt hervorgehoben gezeichnet wird.
    pub fn is_highlighted(&self) -> bool {
        self.selected || self.temp_selected
    }
}

/// Eine Linie im aktuellen Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderLine {
    /// Handle der Linie in der Szene
    pub id: LineId,
    /// Screen-Position von Endpunkt A
    pub screen_a: DVec2,
    /// Screen-Position von Endpunkt B
    pub screen_b: DVec2,
    pub selected: bool,
    pub hovered: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Viewport-Größe in Pixeln
    pub viewport_size: DVec2,
    /// Skalierungsfaktor (Pixel pro Welteinheit)
    pub scale: f64,
    /// Punkte in Einfügereihenfolge
    pub points: Vec<RenderPoint>,
    /// Linien in Einfügereihenfolge
    pub lines: Vec<RenderLine>,
    /// Auswahlrechteck als (min, max) in Screen-Pixeln
    pub drag_rect: Option<(DVec2, DVec2)>,
    /// Screen-X der vertikalen Rasterlinien
    pub grid_x: Vec<f64>,
    /// Screen-Y der horizontalen Rasterlinien
    pub grid_y: Vec<f64>,
}

impl RenderScene {
    /// Sucht den Render-Eintrag eines Punkts.
    pub fn point(&self, id: PointId) -> Option<&RenderPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Sucht den Render-Eintrag einer Linie.
    pub fn line(&self, id: LineId) -> Option<&RenderLine> {
        self.lines.iter().find(|l| l.id == id)
    }
}
