//! Use-Case-Funktionen für die Auswahl-Zustandsmaschine.
//!
//! Aufgeteilt nach Phase:
//! - `lifecycle`: Aufziehen, Abschließen, Verwerfen, Löschen
//! - `drag`: Verschieben einer fertigen Auswahl
//! - `resize`: gekacheltes Skalieren über den Resize-Griff
//!
//! Verschieben und Skalieren heben den Inhalt beim Start an (Capture +
//! Löschen aus den Layern). Übernehmen schreibt ihn am Ziel zurück,
//! Verwerfen an der Ausgangsposition.
mod drag;
mod lifecycle;
mod resize;

pub use drag::{begin_drag, commit_drag, update_drag};
pub use lifecycle::{
    begin_selection, cancel_selection, delete_selection, finalize_selection, update_selection,
};
pub use resize::{begin_resize, commit_resize, update_resize};
