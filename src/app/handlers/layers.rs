//! Handler für die Layer-Verwaltung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::LayerId;

/// Legt einen neuen Layer an.
pub fn add(state: &mut AppState, above_index: Option<usize>) {
    use_cases::layers::add_layer(state, above_index);
}

/// Löscht einen Layer.
pub fn remove(state: &mut AppState, id: LayerId) {
    use_cases::layers::remove_layer(state, id);
}

/// Verschiebt einen Layer im Stapel.
pub fn reorder(state: &mut AppState, from: usize, to: usize) {
    if !use_cases::layers::reorder_layer(state, from, to) {
        log::warn!("Ungültiges Umsortieren: {} -> {}", from, to);
    }
}

/// Setzt die Deckkraft.
pub fn set_opacity(state: &mut AppState, id: LayerId, opacity: f32) {
    use_cases::layers::set_opacity(state, id, opacity);
}

/// Setzt die Sichtbarkeit.
pub fn set_visible(state: &mut AppState, id: LayerId, visible: bool) {
    use_cases::layers::set_visible(state, id, visible);
}

/// Benennt einen Layer um.
pub fn rename(state: &mut AppState, id: LayerId, name: String) {
    use_cases::layers::rename(state, id, name);
}

/// Aktiviert einen Layer.
pub fn set_active(state: &mut AppState, id: LayerId) {
    use_cases::layers::set_active(state, id);
}
