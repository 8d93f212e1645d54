//! Die zentrale Szenen-Datenstruktur mit Punkten, Linien und räumlichen Abfragen.

use super::{Line, LineId, Point, PointId, SceneLine, WorldBounds};
use anyhow::{bail, Result};
use glam::DVec2;
use indexmap::{IndexMap, IndexSet};

/// Container für den planaren Graphen aus Punkten und Linien
///
/// Punkte und Linien liegen in einer Arena und werden über Handles
/// adressiert. Die Einfügereihenfolge bleibt für Speichern und Picking
/// erhalten.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    points: IndexMap<PointId, Point>,
    lines: IndexMap<LineId, SceneLine>,
    /// Begrenzung für das Kamera-Clamping (optional)
    bounds: Option<WorldBounds>,
    next_point_id: u64,
    next_line_id: u64,
}

impl Scene {
    /// Erstellt eine neue leere Szene
    pub fn new() -> Self {
        Self::default()
    }

    /// Kleine Beispielszene: drei Punkte, verbunden 0 → 1 → 2
    pub fn sample() -> Self {
        let mut scene = Self::new();
        let ids = [
            scene.add_point(DVec2::new(200.0, 200.0), ""),
            scene.add_point(DVec2::new(200.0, 390.0), ""),
            scene.add_point(DVec2::new(407.0, 400.0), ""),
        ];
        if let Err(e) = scene.connect_chain(&ids) {
            log::warn!("Beispielszene unvollständig: {:#}", e);
        }
        scene
    }

    /// Fügt einen Punkt am Ende der Punktliste hinzu
    pub fn add_point(&mut self, position: DVec2, label: impl Into<String>) -> PointId {
        let id = PointId(self.next_point_id);
        self.next_point_id += 1;
        self.points.insert(id, Point::new(id, position, label));
        id
    }

    /// Fügt eine Linie A → B hinzu und registriert sie an beiden Endpunkten.
    ///
    /// Schlägt fehl, wenn einer der Punkte nicht (mehr) zur Szene gehört.
    pub fn add_line(&mut self, point_a: PointId, point_b: PointId) -> Result<LineId> {
        let (Some(a), Some(b)) = (self.points.get(&point_a), self.points.get(&point_b)) else {
            bail!(
                "Linie {} → {} verweist auf einen Punkt außerhalb der Szene",
                point_a,
                point_b
            );
        };

        let id = LineId(self.next_line_id);
        self.next_line_id += 1;
        let line = SceneLine::new(id, point_a, point_b, a.position, b.position);
        self.lines.insert(id, line);

        for endpoint in [point_a, point_b] {
            if let Some(point) = self.points.get_mut(&endpoint) {
                point.attach(id);
            }
        }
        Ok(id)
    }

    /// Verbindet die Punkte der Reihe nach (p0 → p1 → p2 …).
    ///
    /// Prüft alle Punkte vorab, damit bei Fehlern keine Teilkette entsteht.
    pub fn connect_chain(&mut self, points: &[PointId]) -> Result<Vec<LineId>> {
        if let Some(missing) = points.iter().find(|id| !self.points.contains_key(*id)) {
            bail!("Punkt {} gehört nicht zur Szene", missing);
        }
        points
            .windows(2)
            .map(|pair| self.add_line(pair[0], pair[1]))
            .collect()
    }

    /// Entfernt einen Punkt inklusive aller Linien, die ihn nutzen
    pub fn remove_point(&mut self, point_id: PointId) -> Option<Point> {
        let dependents: Vec<LineId> = self
            .points
            .get(&point_id)?
            .dependents()
            .iter()
            .copied()
            .collect();

        for line_id in &dependents {
            self.remove_line(*line_id);
        }

        let removed = self.points.shift_remove(&point_id);
        if !dependents.is_empty() {
            log::debug!(
                "Punkt {} entfernt, {} abhängige Linie(n) mitgelöscht",
                point_id,
                dependents.len()
            );
        }
        removed
    }

    /// Entfernt mehrere Punkte (jeweils mit ihren Linien). Gibt die Anzahl entfernter Punkte zurück.
    pub fn remove_points<'a>(&mut self, point_ids: impl IntoIterator<Item = &'a PointId>) -> usize {
        point_ids
            .into_iter()
            .filter(|id| self.remove_point(**id).is_some())
            .count()
    }

    /// Entfernt eine Linie und meldet sie an beiden Endpunkten ab
    pub fn remove_line(&mut self, line_id: LineId) -> Option<SceneLine> {
        let line = self.lines.shift_remove(&line_id)?;
        for endpoint in [line.point_a, line.point_b] {
            if let Some(point) = self.points.get_mut(&endpoint) {
                point.detach(line_id);
            }
        }
        Some(line)
    }

    /// Verschiebt einen Punkt und berechnet alle abhängigen Linien neu
    pub fn move_point(&mut self, point_id: PointId, new_position: DVec2) -> bool {
        let Some(point) = self.points.get_mut(&point_id) else {
            return false;
        };
        point.set_position(new_position);

        let dependents: Vec<LineId> = point.dependents().iter().copied().collect();
        for line_id in dependents {
            self.refresh_line(line_id);
        }
        true
    }

    /// Verschiebt alle angegebenen Punkte um denselben Offset
    pub fn shift_points<'a>(
        &mut self,
        point_ids: impl IntoIterator<Item = &'a PointId>,
        delta: DVec2,
    ) {
        for &point_id in point_ids {
            if let Some(position) = self.points.get(&point_id).map(|p| p.position) {
                self.move_point(point_id, position + delta);
            }
        }
    }

    fn refresh_line(&mut self, line_id: LineId) {
        let Some(line) = self.lines.get(&line_id) else {
            return;
        };
        let (Some(a), Some(b)) = (self.points.get(&line.point_a), self.points.get(&line.point_b))
        else {
            return;
        };
        let (a_position, b_position) = (a.position, b.position);
        if let Some(line) = self.lines.get_mut(&line_id) {
            line.refresh(a_position, b_position);
        }
    }

    /// Punkt nach Handle
    pub fn point(&self, point_id: PointId) -> Option<&Point> {
        self.points.get(&point_id)
    }

    /// Linie nach Handle
    pub fn line(&self, line_id: LineId) -> Option<&SceneLine> {
        self.lines.get(&line_id)
    }

    /// Geometrie einer Linie
    pub fn line_geometry(&self, line_id: LineId) -> Option<&Line> {
        self.lines.get(&line_id).map(SceneLine::geometry)
    }

    /// Prüft, ob der Punkt zur Szene gehört
    pub fn contains_point(&self, point_id: PointId) -> bool {
        self.points.contains_key(&point_id)
    }

    /// Position eines Punkts in der Einfügereihenfolge
    pub fn point_index(&self, point_id: PointId) -> Option<usize> {
        self.points.get_index_of(&point_id)
    }

    /// Iterator über alle Punkte in Einfügereihenfolge
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.values()
    }

    /// Iterator über alle Linien in Einfügereihenfolge
    pub fn lines(&self) -> impl Iterator<Item = &SceneLine> {
        self.lines.values()
    }

    /// Gibt die Anzahl der Punkte zurück
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Gibt die Anzahl der Linien zurück
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Erster Punkt (Einfügereihenfolge), der auf beiden Achsen höchstens
    /// `tolerance` von der Weltposition entfernt ist
    pub fn find_nearest_point(&self, query: DVec2, tolerance: f64) -> Option<PointId> {
        self.points
            .values()
            .find(|p| {
                (p.position.x - query.x).abs() <= tolerance
                    && (p.position.y - query.y).abs() <= tolerance
            })
            .map(|p| p.id)
    }

    /// Erste Linie (Einfügereihenfolge), deren Strecke höchstens `tolerance` entfernt ist
    pub fn find_nearest_line(&self, query: DVec2, tolerance: f64) -> Option<LineId> {
        self.lines
            .values()
            .find(|l| l.geometry().distance_to_point(query) <= tolerance)
            .map(|l| l.id)
    }

    /// Alle Punkte im Rechteck zwischen zwei beliebigen Ecken (inkl. Rand)
    pub fn points_within_rect(&self, corner_a: DVec2, corner_b: DVec2) -> IndexSet<PointId> {
        let rect = WorldBounds::from_corners(corner_a, corner_b);
        self.points
            .values()
            .filter(|p| rect.contains(p.position))
            .map(|p| p.id)
            .collect()
    }

    /// Alle Kreuzungspunkte der Linie mit den übrigen Linien der Szene.
    ///
    /// Gemeinsame Endpunkte (z.B. das Gelenk einer Kette) zählen nicht als Kreuzung.
    pub fn crossings(&self, line_id: LineId) -> Vec<DVec2> {
        let Some(line) = self.lines.get(&line_id) else {
            return Vec::new();
        };
        let geometry = line.geometry();
        self.lines
            .values()
            .filter(|other| other.id != line_id)
            .filter_map(|other| {
                let crossing = other.geometry().segment_intersection(geometry)?;
                let at_shared_end = [
                    (line.point_a, geometry.point_a),
                    (line.point_b, geometry.point_b),
                ]
                .into_iter()
                .any(|(id, position)| other.touches(id) && crossing.distance(position) <= 1e-9);
                (!at_shared_end).then_some(crossing)
            })
            .collect()
    }

    /// Begrenzung für das Kamera-Clamping
    pub fn bounds(&self) -> Option<WorldBounds> {
        self.bounds
    }

    /// Setzt die Begrenzung für das Kamera-Clamping
    pub fn set_bounds(&mut self, bounds: Option<WorldBounds>) {
        self.bounds = bounds;
    }

    /// Umschließendes Rechteck aller Punkte
    pub fn point_extent(&self) -> Option<WorldBounds> {
        WorldBounds::enclosing(self.points.values().map(|p| p.position))
    }

    /// Setzt die Begrenzung auf die Punkt-Ausdehnung plus Rand und gibt sie zurück
    pub fn fit_bounds_to_points(&mut self, margin: f64) -> Option<WorldBounds> {
        self.bounds = self.point_extent().map(|extent| extent.expand(margin));
        self.bounds
    }
}
