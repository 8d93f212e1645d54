//! Import/Export des zeilenbasierten Weltformats.
//!
//! Ein Datensatz pro Zeile, Groß-/Kleinschreibung egal:
//! `point <id> [<x>;<y>] <label>` und `line <idA> <idB>`.

pub mod parser;
pub mod writer;

pub use parser::{load_world_file, parse_world, read_world};
pub use writer::{save_world_file, write_world, write_world_to};
