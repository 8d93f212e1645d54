//! Parser für das Weltformat.

use crate::core::{PointId, Scene};
use anyhow::{bail, Context, Result};
use glam::DVec2;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

const POINT_PATTERN: &str =
    r"(?i)^\s*point\s*(\d+)\s*\[\s*([-+]?\d*\.?\d+)\s*;\s*([-+]?\d*\.?\d+)\s*\]\s*(.*)$";
const LINE_PATTERN: &str = r"(?i)^\s*line\s+(\d+)\s+(\d+)\s*$";

/// Zustand während des Einlesens: Datei-IDs sind nur beim Laden gültig
struct WorldReader {
    point_pattern: Regex,
    line_pattern: Regex,
    scene: Scene,
    ids: HashMap<u64, PointId>,
}

impl WorldReader {
    fn new() -> Result<Self> {
        Ok(Self {
            point_pattern: Regex::new(POINT_PATTERN).context("Ungültiges Punkt-Muster")?,
            line_pattern: Regex::new(LINE_PATTERN).context("Ungültiges Linien-Muster")?,
            scene: Scene::new(),
            ids: HashMap::new(),
        })
    }

    fn read_record(&mut self, line_number: usize, record: &str) -> Result<()> {
        if let Some(caps) = self.point_pattern.captures(record) {
            let file_id = parse_capture::<u64>(&caps, 1, line_number)?;
            let x = parse_capture::<f64>(&caps, 2, line_number)?;
            let y = parse_capture::<f64>(&caps, 3, line_number)?;
            let label = caps.get(4).map_or("", |m| m.as_str());

            let id = self.scene.add_point(DVec2::new(x, y), label);
            if self.ids.insert(file_id, id).is_some() {
                log::debug!("Zeile {}: Punkt-ID {} mehrfach vergeben", line_number, file_id);
            }
        } else if let Some(caps) = self.line_pattern.captures(record) {
            let file_a = parse_capture::<u64>(&caps, 1, line_number)?;
            let file_b = parse_capture::<u64>(&caps, 2, line_number)?;
            let (Some(&a), Some(&b)) = (self.ids.get(&file_a), self.ids.get(&file_b)) else {
                bail!(
                    "Zeile {}: Linie {} {} verweist auf unbekannten Punkt",
                    line_number,
                    file_a,
                    file_b
                );
            };
            self.scene
                .add_line(a, b)
                .with_context(|| format!("Zeile {}: Linie nicht anlegbar", line_number))?;
        } else if !record.trim().is_empty() {
            log::debug!("Zeile {} ignoriert: '{}'", line_number, record);
        }
        Ok(())
    }

    fn finish(self) -> Scene {
        log::info!(
            "Welt geladen: {} Punkte, {} Linien",
            self.scene.point_count(),
            self.scene.line_count()
        );
        self.scene
    }
}

fn parse_capture<T>(caps: &Captures<'_>, group: usize, line_number: usize) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let text = caps.get(group).map_or("", |m| m.as_str());
    text.parse::<T>()
        .with_context(|| format!("Zeile {}: ungültiger Wert '{}'", line_number, text))
}

/// Parsed eine Welt aus einem String
pub fn parse_world(content: &str) -> Result<Scene> {
    let mut reader = WorldReader::new()?;
    for (index, record) in content.lines().enumerate() {
        reader.read_record(index + 1, record)?;
    }
    Ok(reader.finish())
}

/// Liest eine Welt zeilenweise aus einem Reader.
///
/// I/O-Fehler brechen das gesamte Laden ab.
pub fn read_world(input: impl BufRead) -> Result<Scene> {
    let mut reader = WorldReader::new()?;
    for (index, record) in input.lines().enumerate() {
        let record = record.context("Laden fehlgeschlagen: IO-Fehler")?;
        reader.read_record(index + 1, &record)?;
    }
    Ok(reader.finish())
}

/// Lädt eine Welt aus einer Datei
pub fn load_world_file(path: &Path) -> Result<Scene> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Weltdatei nicht lesbar: {}", path.display()))?;
    read_world(std::io::BufReader::new(file))
        .with_context(|| format!("Fehler beim Laden von {}", path.display()))
}
