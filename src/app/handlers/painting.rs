//! Handler für Malen und Radieren.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::TileRef;
use glam::IVec2;

/// Setzt eine Kachel in den aktiven Layer.
pub fn place(state: &mut AppState, cell: IVec2, tile: TileRef) {
    use_cases::painting::place_tile(state, cell, tile);
}

/// Entfernt eine Kachel aus dem aktiven Layer.
pub fn erase(state: &mut AppState, cell: IVec2) {
    use_cases::painting::erase_tile(state, cell);
}
