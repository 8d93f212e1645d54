//! Use-Case-Funktionen für Punkt-/Linien-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `add_point` — Neuen Punkt an einer Screen-Position hinzufügen
//! - `connect` — Selektierte Punkte verbinden
//! - `delete_selection` — Selektierte Linie oder Punkte löschen
//! - `grid` — Rasterdichte und Einrasten umschalten

mod add_point;
mod connect;
mod delete_selection;
mod grid;

pub use add_point::add_point_at;
pub use connect::connect_selected_points;
pub use delete_selection::delete_selection;
pub use grid::{next_grid_density, toggle_snap_to_grid};
