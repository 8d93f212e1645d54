//! Zentrale Konfiguration für den Szeneneditor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Basis der Zoomleiter: 2^(1/8), acht Stufen verdoppeln den Maßstab.
pub const ZOOM_BASE: f64 = 1.090_507_732_665_257_7;
/// Start-Zoomstufe.
pub const ZOOM_LEVEL_DEFAULT: i32 = 0;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Größe für Punkte in Screen-Pixeln (Chebyshev-Abstand).
pub const POINT_DISPLAY_SIZE_PX: f64 = 8.0;
/// Maximaler Pick-Abstand für Linien in Screen-Pixeln.
pub const LINE_PICK_DISTANCE_PX: f64 = 4.0;
/// Radius für Hover-Hervorhebung in Screen-Pixeln.
pub const HOVER_RADIUS_PX: f64 = 64.0;

// ── Raster ──────────────────────────────────────────────────────────

/// Start-Rasterdichte (Rasterweite = 2^Dichte Welteinheiten).
pub const GRID_DENSITY_DEFAULT: i32 = 6;
/// Größte Rasterdichte, auf die nach "Raster aus" zurückgesprungen wird.
pub const GRID_DENSITY_MAX: i32 = 8;
/// Rasterdichte für "Raster aus".
pub const GRID_DENSITY_OFF: i32 = -1;

// ── Szene ───────────────────────────────────────────────────────────

/// Rand um die Punkt-Ausdehnung beim automatischen Setzen der Szenengrenzen.
pub const SCENE_BOUNDS_MARGIN: f64 = 64.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `planar_scene_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Größe für Punkte in Screen-Pixeln
    pub point_pick_size_px: f64,
    /// Pick-Abstand für Linien in Screen-Pixeln
    pub line_pick_distance_px: f64,
    /// Radius der Hover-Hervorhebung in Screen-Pixeln
    pub hover_radius_px: f64,

    // ── Kamera ──────────────────────────────────────────────────
    /// Zoomstufe beim Start
    pub initial_zoom_level: i32,
    /// Rand um die Punkte beim automatischen Setzen der Szenengrenzen
    pub scene_bounds_margin: f64,

    // ── Raster ──────────────────────────────────────────────────
    /// Rasterdichte beim Start (-1 = aus)
    pub grid_density: i32,
    /// Einrasten am Raster beim Verschieben
    pub snap_to_grid: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_pick_size_px: POINT_DISPLAY_SIZE_PX,
            line_pick_distance_px: LINE_PICK_DISTANCE_PX,
            hover_radius_px: HOVER_RADIUS_PX,

            initial_zoom_level: ZOOM_LEVEL_DEFAULT,
            scene_bounds_margin: SCENE_BOUNDS_MARGIN,

            grid_density: GRID_DENSITY_DEFAULT,
            snap_to_grid: true,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("planar_scene_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("planar_scene_editor.toml")
    }
}
