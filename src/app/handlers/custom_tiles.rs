//! Handler für Composite-Kacheln.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CompositeId;
use glam::IVec2;

/// Speichert die fertige Auswahl als Composite.
pub fn promote(state: &mut AppState, name: Option<String>) {
    if let Some(id) = use_cases::custom_tiles::promote_selection(state, name) {
        state.ui.status_message = Some(format!("Composite {id} erstellt"));
    }
}

/// Platziert ein Composite.
pub fn place(state: &mut AppState, id: CompositeId, at: IVec2) {
    use_cases::custom_tiles::place_composite(state, id, at);
}

/// Löscht ein Composite.
pub fn remove(state: &mut AppState, id: CompositeId) {
    use_cases::custom_tiles::remove_composite(state, id);
}
