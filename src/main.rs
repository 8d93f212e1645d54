//! Planar Scene Editor.
//!
//! Lädt eine Welt (oder die Beispielszene), richtet Szenengrenzen und
//! Kamera ein und schreibt die Welt auf Wunsch normalisiert zurück.

use clap::Parser;
use glam::DVec2;
use planar_scene_editor::app::use_cases::camera;
use planar_scene_editor::app::build_render_scene;
use planar_scene_editor::{load_world_file, save_world_file, EditorOptions, EditorState, Scene};
use std::path::PathBuf;

/// Kommandozeilen-Argumente
///
/// Beispiele:
///   planar-scene-editor                              # Beispielszene
///   planar-scene-editor welt.txt                     # Welt laden
///   planar-scene-editor welt.txt -o sauber.txt       # Normalisiert speichern
///   planar-scene-editor welt.txt --viewport 1920x1080
#[derive(Parser, Debug)]
#[clap(name = "planar-scene-editor", version, about = "2D-Szeneneditor für Punkte und Linien")]
struct CliArgs {
    /// Zu ladende Weltdatei (ohne: Beispielszene)
    input: Option<PathBuf>,

    /// Ziel für die normalisierte Weltdatei
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,

    /// Optionen-Datei (Standard: neben der Binary)
    #[clap(long, short = 'c')]
    config: Option<PathBuf>,

    /// Viewport-Größe in Pixeln
    #[clap(long, default_value = "1280x720", value_parser = parse_viewport_size)]
    viewport: DVec2,
}

fn parse_viewport_size(text: &str) -> Result<DVec2, String> {
    let (width, height) = text
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Erwartet BREITExHÖHE, war '{}'", text))?;
    let width: f64 = width
        .trim()
        .parse()
        .map_err(|e| format!("Ungültige Breite '{}': {}", width, e))?;
    let height: f64 = height
        .trim()
        .parse()
        .map_err(|e| format!("Ungültige Höhe '{}': {}", height, e))?;
    if width <= 0.0 || height <= 0.0 {
        return Err(format!("Viewport muss positiv sein, war {}x{}", width, height));
    }
    Ok(DVec2::new(width, height))
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Planar Scene Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = CliArgs::parse();
    let config_path = args.config.unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&config_path);

    let scene = match &args.input {
        Some(path) => load_world_file(path)?,
        None => {
            log::info!("Keine Weltdatei angegeben, verwende Beispielszene");
            Scene::sample()
        }
    };

    let mut state = EditorState::new(scene, options, args.viewport);
    camera::center_on_scene(&mut state);

    // Jede Kreuzung wird von beiden beteiligten Linien gemeldet
    let crossings: usize = state
        .scene
        .lines()
        .map(|line| state.scene.crossings(line.id).len())
        .sum::<usize>()
        / 2;
    let frame = build_render_scene(&state);
    let visible = state.viewport.visible_world_rect();
    let on_screen = state
        .scene
        .points()
        .filter(|p| visible.contains(p.position))
        .count();
    log::info!(
        "{} Punkte ({} sichtbar), {} Linien, {} Kreuzungen, Maßstab {:.3}, {} Rasterlinien",
        state.scene.point_count(),
        on_screen,
        state.scene.line_count(),
        crossings,
        frame.scale,
        frame.grid_x.len() + frame.grid_y.len()
    );

    if let Some(output) = &args.output {
        save_world_file(&state.scene, output)?;
    }

    Ok(())
}
