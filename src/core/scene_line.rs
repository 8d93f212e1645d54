//! Repräsentiert eine Linie der Szene zwischen zwei Punkten.

use super::{Line, PointId};
use glam::DVec2;
use std::fmt;

/// Stabiler Handle auf eine Linie der Szene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Eine Linie zwischen zwei Punkten der Szene
///
/// Hält nur die Handles der Endpunkte, die Geometrie wird über `refresh`
/// aus den aktuellen Punkt-Positionen neu abgeleitet.
#[derive(Debug, Clone)]
pub struct SceneLine {
    /// Handle der Linie
    pub id: LineId,
    /// Endpunkt A (Strahlursprung)
    pub point_a: PointId,
    /// Endpunkt B
    pub point_b: PointId,
    /// Gecachte Geometrie aus den Positionen beim letzten `refresh`
    geometry: Line,
}

impl SceneLine {
    /// Erstellt eine neue Linie aus den Handles und aktuellen Positionen
    pub fn new(
        id: LineId,
        point_a: PointId,
        point_b: PointId,
        a_position: DVec2,
        b_position: DVec2,
    ) -> Self {
        Self {
            id,
            point_a,
            point_b,
            geometry: Line::from_two_points(a_position, b_position),
        }
    }

    /// Aktualisiert die Geometrie auf Basis der Punkt-Positionen
    pub fn refresh(&mut self, a_position: DVec2, b_position: DVec2) {
        self.geometry.refresh(a_position, b_position);
    }

    /// Geometrie zum Stand des letzten `refresh`
    pub fn geometry(&self) -> &Line {
        &self.geometry
    }

    /// Prüft, ob der Punkt ein Endpunkt dieser Linie ist
    pub fn touches(&self, point: PointId) -> bool {
        self.point_a == point || self.point_b == point
    }
}
