//! Handler für die Auswahl-Zustandsmaschine.

use crate::app::use_cases;
use crate::app::AppState;
use glam::IVec2;

/// Beginnt eine Auswahl an einem Gitterpunkt.
pub fn begin(state: &mut AppState, at: IVec2) {
    use_cases::selection::begin_selection(state, at);
}

/// Aktualisiert den Endpunkt der Auswahl.
pub fn update(state: &mut AppState, to: IVec2) {
    use_cases::selection::update_selection(state, to);
}

/// Schließt das Aufziehen ab.
pub fn finalize(state: &mut AppState) {
    use_cases::selection::finalize_selection(state);
}

/// Verwirft die Auswahl (nimmt laufende Transformationen zurück).
pub fn cancel(state: &mut AppState) {
    use_cases::selection::cancel_selection(state);
}

/// Löscht den Inhalt der Auswahl.
pub fn delete(state: &mut AppState) {
    use_cases::selection::delete_selection(state);
}

/// Startet das Verschieben.
pub fn begin_drag(state: &mut AppState, cell: IVec2) {
    use_cases::selection::begin_drag(state, cell);
}

/// Aktualisiert die Verschiebe-Vorschau.
pub fn update_drag(state: &mut AppState, cell: IVec2) {
    use_cases::selection::update_drag(state, cell);
}

/// Übernimmt das Verschieben.
pub fn commit_drag(state: &mut AppState) {
    use_cases::selection::commit_drag(state);
}

/// Startet das Skalieren.
pub fn begin_resize(state: &mut AppState) {
    use_cases::selection::begin_resize(state);
}

/// Aktualisiert die Skalier-Vorschau.
pub fn update_resize(state: &mut AppState, corner: IVec2) {
    use_cases::selection::update_resize(state, corner);
}

/// Übernimmt das Skalieren.
pub fn commit_resize(state: &mut AppState) {
    use_cases::selection::commit_resize(state);
}
