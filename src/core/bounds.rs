//! Achsen-ausgerichtetes Rechteck in Welt-Koordinaten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Weltkoordinaten-Begrenzung (z.B. Szenengrenzen für die Kamera)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    /// Minimale Ecke (links oben)
    pub min: DVec2,
    /// Maximale Ecke (rechts unten)
    pub max: DVec2,
}

impl WorldBounds {
    /// Erstellt Bounds aus zwei beliebigen, gegenüberliegenden Ecken
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Kleinstes Rechteck, das alle Positionen enthält (`None` bei leerer Eingabe)
    pub fn enclosing(positions: impl IntoIterator<Item = DVec2>) -> Option<Self> {
        positions.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Self { min: p, max: p },
                Some(bounds) => Self {
                    min: bounds.min.min(p),
                    max: bounds.max.max(p),
                },
            })
        })
    }

    /// Breite und Höhe
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Mittelpunkt
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Enthält den Punkt (inkl. Rand)
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Vergrößert das Rechteck um `margin` in alle Richtungen
    pub fn expand(&self, margin: f64) -> Self {
        Self::from_corners(self.min - DVec2::splat(margin), self.max + DVec2::splat(margin))
    }
}
