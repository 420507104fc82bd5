//! Use-Case-Funktionen für das Malen in den aktiven Layer.

use crate::app::AppState;
use crate::core::{CoordSpace, TileRef};
use glam::IVec2;

/// Setzt eine Kachel in den aktiven Layer; der Raum wächst bei Bedarf.
///
/// Symbolische Referenzen, die der Resolver nicht kennt, werden abgelehnt.
pub fn place_tile(state: &mut AppState, cell: IVec2, tile: TileRef) -> bool {
    if let TileRef::Symbolic(symbolic) = &tile {
        if !state.resolver.is_resolvable(symbolic) {
            log::warn!("Unbekannte Kachel '{}' nicht gesetzt", symbolic.name);
            return false;
        }
    }

    if !CoordSpace::within_limits(cell) {
        log::warn!("Zelle {} liegt außerhalb des zulässigen Bereichs", cell);
        return false;
    }

    state
        .grid
        .ensure_capacity(cell, state.options.growth_margin, &mut state.view.viewport);
    state.grid.set_active(cell, Some(tile))
}

/// Entfernt die Kachel des aktiven Layers an einer Zelle.
pub fn erase_tile(state: &mut AppState, cell: IVec2) -> bool {
    state.grid.set_active(cell, None)
}
