//! Use-Case-Funktionen für Selektion und Gesten der linken Maustaste.
//!
//! Aufgeteilt nach Phase:
//! - `press` — Drücken: Punkt-Verschieben, Linien-Selektion oder Auswahlrechteck
//! - `drag` — Ziehen und Loslassen
//! - `hover` — Hervorhebung unter dem Mauszeiger
//! - `helpers` — Gemeinsame Hilfsfunktionen

mod drag;
mod helpers;
mod hover;
mod press;

pub use drag::{drag, release};
pub use helpers::clear_selection;
pub use hover::pointer_moved;
pub use press::press;
