//! Application State — zentrale Datenhaltung.

use super::gesture::{Gesture, GridSettings};
use crate::core::{LineId, PointId, Scene, Viewport};
use crate::shared::EditorOptions;
use glam::DVec2;
use indexmap::IndexSet;

/// Hervorhebung unter dem Mauszeiger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    /// Nächster Punkt im Hover-Radius
    pub point: Option<PointId>,
    /// Nächste Linie im Hover-Radius
    pub line: Option<LineId>,
}

/// Hauptzustand einer Editier-Sitzung
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Die bearbeitete Szene
    pub scene: Scene,
    /// Kamera auf die Szene
    pub viewport: Viewport,
    /// Selektierte Punkte in Auswahlreihenfolge
    pub selection: IndexSet<PointId>,
    /// Aktuelle Geste
    pub gesture: Gesture,
    pub hover: HoverState,
    /// Raster und Einrasten
    pub grid: GridSettings,
    /// Laufzeit-Optionen (Pick-Größen, Raster-Start)
    pub options: EditorOptions,
}

impl EditorState {
    /// Erstellt eine Sitzung auf der Szene.
    ///
    /// Die Kamera startet in der Mitte der Szenengrenzen (ohne Grenzen im Ursprung).
    pub fn new(scene: Scene, options: EditorOptions, viewport_size: DVec2) -> Self {
        let focus = scene.bounds().map_or(DVec2::ZERO, |b| b.center());
        let mut viewport = Viewport::new(focus, options.initial_zoom_level, viewport_size);
        viewport.set_scene_bounds(scene.bounds());

        Self {
            scene,
            viewport,
            selection: IndexSet::new(),
            gesture: Gesture::Idle,
            hover: HoverState::default(),
            grid: GridSettings::from_options(&options),
            options,
        }
    }

    /// Überträgt die aktuellen Szenengrenzen in den Viewport.
    pub fn sync_scene_bounds(&mut self) {
        self.viewport.set_scene_bounds(self.scene.bounds());
    }

    /// Aktuell selektierte Linie
    pub fn selected_line(&self) -> Option<LineId> {
        self.gesture.selected_line()
    }

    /// Entfernt Handles gelöschter Punkte und Linien aus Selektion und Hover.
    pub fn prune_stale_handles(&mut self) {
        let scene = &self.scene;
        self.selection.retain(|id| scene.contains_point(*id));
        if self.hover.point.is_some_and(|id| !scene.contains_point(id)) {
            self.hover.point = None;
        }
        if self.hover.line.is_some_and(|id| scene.line(id).is_none()) {
            self.hover.line = None;
        }
        if self.selected_line().is_some_and(|id| scene.line(id).is_none()) {
            self.gesture = Gesture::Idle;
        }
    }
}
