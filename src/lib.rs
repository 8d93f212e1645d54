//! Planar Scene Editor Library.
//! Geometrie-Kern, Gesten und Weltformat als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod world_file;

pub use app::{EditorState, Gesture, GridSettings};
pub use core::{Line, LineId, Point, PointId, Scene, SceneLine, Viewport, WorldBounds};
pub use shared::{EditorOptions, RenderScene};
pub use world_file::{load_world_file, parse_world, save_world_file, write_world};
