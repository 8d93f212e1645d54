//! Writer für das Weltformat.

use crate::core::Scene;
use anyhow::{bail, Context, Result};
use std::fmt::Write as _;
use std::path::Path;

/// Schreibt die Szene im Weltformat.
///
/// Punkt-IDs sind die Positionen in der Punktliste, Linien verweisen
/// über die Identität ihrer Endpunkte auf diese Indizes.
///
/// Schlägt fehl, wenn ein Punkt nicht wieder einlesbar wäre: nicht-endliche
/// Koordinaten oder Zeilenumbrüche in der Beschriftung.
pub fn write_world(scene: &Scene) -> Result<String> {
    let mut output = String::new();

    for (index, point) in scene.points().enumerate() {
        if !point.position.is_finite() {
            bail!(
                "Punkt {} ist nicht speicherbar: ungültige Position ({}, {})",
                point.id,
                point.position.x,
                point.position.y
            );
        }
        if point.label.contains(['\n', '\r']) {
            bail!(
                "Punkt {} ist nicht speicherbar: Beschriftung enthält einen Zeilenumbruch",
                point.id
            );
        }
        write!(output, "point {} [{};{}]", index, point.position.x, point.position.y)?;
        if !point.label.is_empty() {
            write!(output, " {}", point.label)?;
        }
        output.push('\n');
    }

    for line in scene.lines() {
        let index_a = scene.point_index(line.point_a).ok_or_else(|| {
            anyhow::anyhow!("Inkonsistente Szene: Endpunkt {} von {} fehlt", line.point_a, line.id)
        })?;
        let index_b = scene.point_index(line.point_b).ok_or_else(|| {
            anyhow::anyhow!("Inkonsistente Szene: Endpunkt {} von {} fehlt", line.point_b, line.id)
        })?;
        writeln!(output, "line {} {}", index_a, index_b)?;
    }

    Ok(output)
}

/// Schreibt die Szene in einen beliebigen Writer
pub fn write_world_to(scene: &Scene, mut out: impl std::io::Write) -> Result<()> {
    let content = write_world(scene)?;
    out.write_all(content.as_bytes())
        .context("Speichern fehlgeschlagen: IO-Fehler")?;
    Ok(())
}

/// Speichert die Szene als Datei
pub fn save_world_file(scene: &Scene, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Weltdatei nicht schreibbar: {}", path.display()))?;
    write_world_to(scene, std::io::BufWriter::new(file))?;
    log::info!(
        "Welt gespeichert nach {} ({} Punkte, {} Linien)",
        path.display(),
        scene.point_count(),
        scene.line_count()
    );
    Ok(())
}
