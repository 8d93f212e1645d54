use glam::DVec2;
use planar_scene_editor::{load_world_file, parse_world, save_world_file, write_world, Scene};

fn point_records(scene: &Scene) -> Vec<(DVec2, String)> {
    scene
        .points()
        .map(|p| (p.position, p.label.clone()))
        .collect()
}

/// Linien über die Koordinaten ihrer Endpunkte
fn line_records(scene: &Scene) -> Vec<(DVec2, DVec2)> {
    scene
        .lines()
        .map(|line| {
            let a = scene.point(line.point_a).expect("Punkt A vorhanden");
            let b = scene.point(line.point_b).expect("Punkt B vorhanden");
            (a.position, b.position)
        })
        .collect()
}

#[test]
fn test_fixture_parses_points_lines_and_labels() {
    let scene = parse_world(include_str!("fixtures/simple_world.txt"))
        .expect("Parsing der Fixture fehlgeschlagen");

    assert_eq!(scene.point_count(), 6);
    assert_eq!(scene.line_count(), 5);

    let records = point_records(&scene);
    assert_eq!(records[0], (DVec2::new(0.0, 0.0), "Nordwest".to_string()));
    assert_eq!(records[4], (DVec2::new(64.5, -32.25), "Turm am Hang".to_string()));
    assert_eq!(records[5], (DVec2::new(-16.0, 200.0), String::new()));

    // Diagonale Nordwest → Südost
    assert_eq!(
        line_records(&scene)[4],
        (DVec2::new(0.0, 0.0), DVec2::new(128.0, 128.0))
    );
}

#[test]
fn test_roundtrip_preserves_points_labels_and_connectivity() {
    let parsed = parse_world(include_str!("fixtures/simple_world.txt"))
        .expect("Initiales Parsing fehlgeschlagen");
    let written = write_world(&parsed).expect("Export fehlgeschlagen");
    let reparsed = parse_world(&written).expect("Re-Parsing fehlgeschlagen");

    assert_eq!(point_records(&parsed), point_records(&reparsed));
    assert_eq!(line_records(&parsed), line_records(&reparsed));
}

#[test]
fn test_written_text_is_stable_after_second_roundtrip() {
    let parsed = parse_world(include_str!("fixtures/simple_world.txt"))
        .expect("Parsing fehlgeschlagen");
    let first = write_world(&parsed).expect("Export fehlgeschlagen");
    let second = write_world(&parse_world(&first).expect("Re-Parsing fehlgeschlagen"))
        .expect("Export fehlgeschlagen");

    assert_eq!(first, second);
    assert!(first.starts_with("point 0 [0;0] Nordwest\n"));
    assert!(first.ends_with("line 0 2\n"));
}

#[test]
fn test_roundtrip_after_edits_through_files() {
    let mut scene = parse_world(include_str!("fixtures/simple_world.txt"))
        .expect("Parsing fehlgeschlagen");
    let first = scene.points().next().map(|p| p.id).expect("Punkt erwartet");
    scene.remove_point(first);
    let free = scene.points().last().map(|p| p.id).expect("Punkt erwartet");
    scene.move_point(free, DVec2::new(1.5, 2.5));

    let dir = tempfile::tempdir().expect("Temp-Verzeichnis erwartet");
    let path = dir.path().join("welt.txt");
    save_world_file(&scene, &path).expect("Speichern fehlgeschlagen");
    let loaded = load_world_file(&path).expect("Laden fehlgeschlagen");

    assert_eq!(loaded.point_count(), 5);
    // Drei Linien hingen an Nordwest
    assert_eq!(loaded.line_count(), 2);
    assert_eq!(point_records(&scene), point_records(&loaded));
    assert_eq!(line_records(&scene), line_records(&loaded));
}

#[test]
fn test_load_fails_on_unknown_point_reference() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis erwartet");
    let path = dir.path().join("kaputt.txt");
    std::fs::write(&path, "point 1 [0;0] A\nline 1 2\n").expect("Schreiben erwartet");

    let err = load_world_file(&path).expect_err("Laden sollte fehlschlagen");
    assert!(format!("{:#}", err).contains("unbekannten Punkt"));
}
