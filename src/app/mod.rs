//! Application-Layer: Sitzungszustand, Gesten, Use-Cases und Render-Szene.

pub mod gesture;
pub mod render_scene;
/// Zustand einer Editier-Sitzung
///
/// Szene, Kamera, Selektion, Geste, Hover und Raster an einer Stelle.
pub mod state;
pub mod use_cases;

pub use gesture::{Gesture, GridSettings, PointMove, RectSelect};
pub use render_scene::build as build_render_scene;
pub use state::{EditorState, HoverState};
