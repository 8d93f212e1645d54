//! Repräsentiert einen Punkt (Vertex) der Szene.

use super::LineId;
use glam::DVec2;
use indexmap::IndexSet;
use std::fmt;

/// Stabiler Handle auf einen Punkt der Szene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Ein Punkt mit optionaler Beschriftung
///
/// Der Punkt besitzt die Linien nicht, die ihn als Endpunkt nutzen. Er kennt
/// nur ihre Handles (`dependents`), damit Verschieben und Löschen auf die
/// Linien durchgreifen können.
#[derive(Debug, Clone)]
pub struct Point {
    /// Handle des Punkts
    pub id: PointId,
    /// Position in Welt-Koordinaten
    pub position: DVec2,
    /// Freitext-Beschriftung ohne umgebende Leerzeichen (leer = keine)
    pub label: String,
    /// Linien, deren Endpunkt A oder B dieser Punkt ist
    dependents: IndexSet<LineId>,
}

impl Point {
    /// Erstellt einen neuen Punkt ohne abhängige Linien
    pub fn new(id: PointId, position: DVec2, label: impl Into<String>) -> Self {
        Self {
            id,
            position,
            label: label.into().trim().to_string(),
            dependents: IndexSet::new(),
        }
    }

    /// Linien, die diesen Punkt als Endpunkt nutzen
    pub fn dependents(&self) -> &IndexSet<LineId> {
        &self.dependents
    }

    /// Registriert eine Linie. Nur von der Szene beim Anlegen einer Linie aufzurufen.
    pub(crate) fn attach(&mut self, line: LineId) {
        self.dependents.insert(line);
    }

    /// Meldet eine Linie ab. Nur von der Szene beim Entfernen einer Linie aufzurufen.
    pub(crate) fn detach(&mut self, line: LineId) {
        self.dependents.shift_remove(&line);
    }

    /// Setzt die Position. Das Neuberechnen der abhängigen Linien übernimmt
    /// `Scene::move_point`.
    pub(crate) fn set_position(&mut self, position: DVec2) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_and_detach_keep_dependents_in_sync() {
        let mut point = Point::new(PointId(1), DVec2::new(1.0, 2.0), "A");
        point.attach(LineId(7));
        point.attach(LineId(9));
        point.attach(LineId(7));
        assert_eq!(point.dependents().len(), 2);

        point.detach(LineId(7));
        let ids: Vec<LineId> = point.dependents().iter().copied().collect();
        assert_eq!(ids, vec![LineId(9)]);
    }

    #[test]
    fn display_uses_handle_number() {
        assert_eq!(PointId(42).to_string(), "P42");
    }

    #[test]
    fn label_is_trimmed_on_creation() {
        let point = Point::new(PointId(1), DVec2::ZERO, "  Haus am See \t");
        assert_eq!(point.label, "Haus am See");
    }
}
