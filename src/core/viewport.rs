//! Orthogonale 2D-Kamera mit Pan, stufenweisem Zoom und Szenen-Clamping.

use super::{LineId, PointId, Scene, WorldBounds};
use crate::shared::options::ZOOM_BASE;
use glam::DVec2;

/// Viewport auf die Szene
///
/// `screen = origin + (world - focus) * scale` mit `origin` = Pixel-Mitte
/// des Viewports und `scale = zoom_coefficient()`.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Welt-Position in der Viewport-Mitte
    focus: DVec2,
    /// Diskrete Zoomstufe (Exponent zu `ZOOM_BASE`)
    zoom_level: i32,
    /// Viewport-Größe in Pixeln
    viewport_size: DVec2,
    /// Untergrenze für den Skalierungsfaktor
    zoom_floor: f64,
    /// Szenengrenzen, gegen die geclampt wird
    scene_bounds: Option<WorldBounds>,
    /// Erlaubter Bereich für `focus` beim aktuellen Zoom
    camera_bounds: Option<WorldBounds>,
}

impl Viewport {
    /// Erstellt einen Viewport ohne Szenengrenzen
    pub fn new(focus: DVec2, zoom_level: i32, viewport_size: DVec2) -> Self {
        Self {
            focus,
            zoom_level,
            viewport_size,
            zoom_floor: 0.0,
            scene_bounds: None,
            camera_bounds: None,
        }
    }

    /// Welt-Position in der Viewport-Mitte
    pub fn focus(&self) -> DVec2 {
        self.focus
    }

    /// Aktuelle Zoomstufe
    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    /// Viewport-Größe in Pixeln
    pub fn viewport_size(&self) -> DVec2 {
        self.viewport_size
    }

    /// Aktuelle Untergrenze des Skalierungsfaktors
    pub fn zoom_floor(&self) -> f64 {
        self.zoom_floor
    }

    /// Erlaubter Fokus-Bereich (nur mit Szenengrenzen)
    pub fn camera_bounds(&self) -> Option<WorldBounds> {
        self.camera_bounds
    }

    /// Pixel-Mitte des Viewports
    pub fn origin(&self) -> DVec2 {
        self.viewport_size * 0.5
    }

    /// Effektiver Skalierungsfaktor (Pixel pro Welteinheit)
    pub fn zoom_coefficient(&self) -> f64 {
        self.zoom_floor.max(ZOOM_BASE.powi(self.zoom_level))
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten
    pub fn world_to_screen(&self, world: DVec2) -> DVec2 {
        self.origin() + (world - self.focus) * self.zoom_coefficient()
    }

    /// Konvertiert Screen-Koordinaten zu Welt-Koordinaten
    pub fn screen_to_world(&self, screen: DVec2) -> DVec2 {
        (screen - self.origin()) / self.zoom_coefficient() + self.focus
    }

    /// Rechnet eine Pixel-Distanz in Welteinheiten um
    pub fn screen_distance_to_world(&self, pixels: f64) -> f64 {
        pixels / self.zoom_coefficient()
    }

    /// Sichtbarer Weltausschnitt
    pub fn visible_world_rect(&self) -> WorldBounds {
        WorldBounds::from_corners(
            self.screen_to_world(DVec2::ZERO),
            self.screen_to_world(self.viewport_size),
        )
    }

    /// Aktualisiert die Viewport-Größe und clampt neu
    pub fn resize(&mut self, viewport_size: DVec2) {
        self.viewport_size = viewport_size;
        self.clamp_to_bounds();
    }

    /// Setzt die Szenengrenzen und clampt neu
    pub fn set_scene_bounds(&mut self, bounds: Option<WorldBounds>) {
        self.scene_bounds = bounds;
        self.clamp_to_bounds();
    }

    /// Zentriert die Kamera auf einen Welt-Punkt (mit Clamping)
    pub fn look_at(&mut self, target: DVec2) {
        self.focus = target;
        self.clamp_to_bounds();
    }

    /// Ändert die Zoomstufe um `change`.
    ///
    /// Der Welt-Punkt unter `fixed_screen_point` bleibt an derselben
    /// Bildschirmposition (ohne Punkt: Viewport-Mitte). Rauszoomen unter
    /// `zoom_floor` wird ignoriert, geclampt wird trotzdem.
    pub fn zoom(&mut self, change: i32, fixed_screen_point: Option<DVec2>) {
        let fixed_world = fixed_screen_point
            .map(|p| self.screen_to_world(p))
            .unwrap_or(self.focus);

        let old_scale = self.zoom_coefficient();
        if self.zoom_floor < old_scale || change > 0 {
            self.zoom_level += change;
        }
        let scale_change = self.zoom_coefficient() / old_scale;

        self.focus = fixed_world - (fixed_world - self.focus) / scale_change;
        self.clamp_to_bounds();
    }

    /// Verschiebt die Kamera um ein Delta in Screen-Pixeln
    pub fn pan(&mut self, screen_delta: DVec2) {
        self.focus += screen_delta / self.zoom_coefficient();
        self.clamp_to_bounds();
    }

    /// Berechnet `zoom_floor` und `camera_bounds` neu und hält den Fokus darin.
    ///
    /// Die Untergrenze ist das größere der beiden Größenverhältnisse
    /// Viewport/Szene, damit der sichtbare Ausschnitt die Szene nicht überragt.
    /// Passt die Szene auf einer Achse nicht, wird sie dort zentriert.
    pub fn clamp_to_bounds(&mut self) {
        let Some(bounds) = self.scene_bounds else {
            self.zoom_floor = 0.0;
            self.camera_bounds = None;
            return;
        };

        let ratios = self.viewport_size / bounds.size();
        self.zoom_floor = [ratios.x, ratios.y]
            .into_iter()
            .filter(|r| r.is_finite())
            .fold(0.0, f64::max);

        let half_extent = self.origin() / self.zoom_coefficient();
        let low = bounds.min + half_extent;
        let high = bounds.max - half_extent;
        let center = bounds.center();

        let (min_x, max_x) = clamp_axis(&mut self.focus.x, low.x, high.x, center.x);
        let (min_y, max_y) = clamp_axis(&mut self.focus.y, low.y, high.y, center.y);
        self.camera_bounds = Some(WorldBounds {
            min: DVec2::new(min_x, min_y),
            max: DVec2::new(max_x, max_y),
        });
    }

    /// Punkt unter der Screen-Position (Pick-Größe in Pixeln)
    pub fn pick_point(&self, scene: &Scene, screen: DVec2, radius_px: f64) -> Option<PointId> {
        scene.find_nearest_point(
            self.screen_to_world(screen),
            self.screen_distance_to_world(radius_px),
        )
    }

    /// Linie unter der Screen-Position (Pick-Abstand in Pixeln)
    pub fn pick_line(&self, scene: &Scene, screen: DVec2, radius_px: f64) -> Option<LineId> {
        scene.find_nearest_line(
            self.screen_to_world(screen),
            self.screen_distance_to_world(radius_px),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DVec2::ZERO, 0, DVec2::ZERO)
    }
}

/// Hält `value` in `[low, high]`, bzw. pinnt es auf `center`, wenn der Bereich leer ist.
/// Gibt den effektiv erlaubten Bereich zurück.
fn clamp_axis(value: &mut f64, low: f64, high: f64, center: f64) -> (f64, f64) {
    if low < high {
        *value = value.clamp(low, high);
        (low, high)
    } else {
        *value = center;
        (center, center)
    }
}
