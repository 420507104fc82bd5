use crate::app::state::SelectionPhase;
use crate::app::AppState;
use crate::core::{capture, clear_from_layers, move_to, TileRect};
use glam::IVec2;

/// Beginnt eine neue Auswahl an einem Gitterpunkt.
pub fn begin_selection(state: &mut AppState, at: IVec2) {
    state.selection.phase = SelectionPhase::Selecting {
        start: at,
        current: at,
    };
}

/// Aktualisiert den Endpunkt der aufgezogenen Auswahl.
pub fn update_selection(state: &mut AppState, to: IVec2) {
    if let SelectionPhase::Selecting { current, .. } = &mut state.selection.phase {
        *current = to;
    }
}

/// Schließt das Aufziehen ab. Auswahlen ohne Fläche werden verworfen.
pub fn finalize_selection(state: &mut AppState) {
    let SelectionPhase::Selecting { start, current } = state.selection.phase else {
        return;
    };

    let rect = TileRect::from_corners(start, current);
    if rect.is_empty() {
        log::debug!("Auswahl ohne Fläche verworfen");
        state.selection.phase = SelectionPhase::Idle;
        return;
    }

    log::debug!("Auswahl fertig: {} ({}x{})", rect.min, rect.size.x, rect.size.y);
    state.selection.phase = SelectionPhase::Finalized { rect };
}

/// Verwirft die Auswahl.
///
/// Angehobener Inhalt (Verschieben/Skalieren) wird unverändert an seine
/// Ausgangsposition zurückgeschrieben.
pub fn cancel_selection(state: &mut AppState) {
    match std::mem::take(&mut state.selection.phase) {
        SelectionPhase::Dragging { captured, .. } | SelectionPhase::Resizing { captured, .. } => {
            move_to(
                &mut state.grid,
                &mut state.view.viewport,
                &captured,
                captured.rect.min,
                state.options.growth_margin,
            );
            log::debug!(
                "Transformation abgebrochen, {} Einträge zurückgelegt",
                captured.entries.len()
            );
        }
        _ => {}
    }
}

/// Löscht den Inhalt der Auswahl aus allen sichtbaren Layern.
///
/// Während einer Transformation ist der Inhalt bereits angehoben und wird
/// einfach verworfen.
pub fn delete_selection(state: &mut AppState) {
    match std::mem::take(&mut state.selection.phase) {
        SelectionPhase::Finalized { rect } => {
            let captured = capture(&state.grid, rect);
            let removed = clear_from_layers(&mut state.grid, &captured);
            log::info!("Auswahl gelöscht: {} Einträge", removed);
        }
        SelectionPhase::Dragging { captured, .. } | SelectionPhase::Resizing { captured, .. } => {
            log::info!("Angehobene Auswahl gelöscht: {} Einträge", captured.entries.len());
        }
        other => state.selection.phase = other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TileKind, TileRef};

    fn tile(name: &str) -> TileRef {
        TileRef::symbolic(TileKind::Shape, name, 0)
    }

    #[test]
    fn zero_area_selection_is_discarded() {
        let mut state = AppState::new();
        begin_selection(&mut state, IVec2::new(2, 2));
        update_selection(&mut state, IVec2::new(2, 5));
        finalize_selection(&mut state);
        assert!(state.selection.is_idle());
    }

    #[test]
    fn selection_is_normalized_from_any_drag_direction() {
        let mut state = AppState::new();
        begin_selection(&mut state, IVec2::new(5, 5));
        update_selection(&mut state, IVec2::new(-3, -3));
        finalize_selection(&mut state);
        assert_eq!(
            state.selection.finalized_rect(),
            Some(TileRect::new(IVec2::new(-3, -3), IVec2::new(8, 8)))
        );
    }

    #[test]
    fn delete_clears_only_the_selected_cells() {
        let mut state = AppState::new();
        state.grid.set(0, IVec2::new(0, 0), Some(tile("a")));
        state.grid.set(0, IVec2::new(4, 0), Some(tile("b")));
        state.selection.phase = SelectionPhase::Finalized {
            rect: TileRect::new(IVec2::ZERO, IVec2::new(2, 2)),
        };

        delete_selection(&mut state);

        assert!(state.selection.is_idle());
        assert!(state.grid.get(0, IVec2::ZERO).is_none());
        assert_eq!(state.grid.get(0, IVec2::new(4, 0)), Some(&tile("b")));
    }

    #[test]
    fn delete_without_selection_changes_nothing() {
        let mut state = AppState::new();
        state.grid.set(0, IVec2::ZERO, Some(tile("a")));
        delete_selection(&mut state);
        assert_eq!(state.entry_count(), 1);
    }
}
