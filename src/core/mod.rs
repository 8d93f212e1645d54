//! Core-Domänentypen: Punkte, Linien, Szene, Viewport.

pub mod bounds;
pub mod line;
/// Core-Datenmodelle der Szene
///
/// - Point: Benannter Punkt mit abhängigen Linien
/// - SceneLine: Verbindung zweier Punkte mit gecachter Geometrie
/// - Scene: Container für alle Punkte und Linien
pub mod point;
pub mod scene;
pub mod scene_line;
pub mod viewport;

pub use bounds::WorldBounds;
pub use line::Line;
pub use point::{Point, PointId};
pub use scene::Scene;
pub use scene_line::{LineId, SceneLine};
pub use viewport::Viewport;
