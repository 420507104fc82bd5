//! Use-Case-Funktionen für Composite-Kacheln.

use crate::app::AppState;
use crate::core::{capture, CompositeId};
use glam::IVec2;

/// Friert die fertige Auswahl als Composite ein.
///
/// Die Auswahl und die Layer bleiben unverändert.
pub fn promote_selection(state: &mut AppState, name: Option<String>) -> Option<CompositeId> {
    let Some(rect) = state.selection.finalized_rect() else {
        log::debug!("Keine fertige Auswahl zum Speichern als Composite");
        return None;
    };

    let captured = capture(&state.grid, rect);
    let id = state
        .composites
        .promote(
            &captured,
            name,
            state.renderer.as_ref(),
            state.resolver.as_ref(),
            state.options.merged_cell_px,
        )
        .map(|tile| tile.id);
    if id.is_none() {
        log::warn!("Leere Auswahl kann kein Composite werden");
    }
    id
}

/// Platziert ein Composite mit linker oberer Ecke an `at` im aktiven Layer.
pub fn place_composite(state: &mut AppState, id: CompositeId, at: IVec2) -> usize {
    let Some(tile) = state.composites.get(id) else {
        log::warn!("Composite {} existiert nicht", id);
        return 0;
    };
    tile.place(
        &mut state.grid,
        &mut state.view.viewport,
        at,
        state.options.growth_margin,
    )
}

/// Löscht ein Composite aus der Registry.
pub fn remove_composite(state: &mut AppState, id: CompositeId) -> bool {
    let removed = state.composites.remove(id);
    if removed {
        log::info!("Composite {} gelöscht", id);
    }
    removed
}
