//! Use-Case-Funktionen für die Layer-Verwaltung.

use crate::app::AppState;
use crate::core::LayerId;
use crate::render::layer_thumbnail;
use image::RgbaImage;

/// Legt einen Layer über `above_index` (Standard: über dem aktiven) an.
pub fn add_layer(state: &mut AppState, above_index: Option<usize>) -> LayerId {
    let layer = state.grid.stack_mut().add_layer(above_index);
    log::info!("Layer '{}' angelegt", layer.name);
    layer.id
}

/// Löscht einen Layer. Der letzte Layer bleibt immer erhalten.
pub fn remove_layer(state: &mut AppState, id: LayerId) -> bool {
    if state.grid.stack().len() <= 1 {
        log::warn!("Letzter Layer kann nicht gelöscht werden");
        return false;
    }
    let removed = state.grid.stack_mut().remove_layer(id);
    if removed {
        log::info!("Layer {} gelöscht", id);
    }
    removed
}

/// Verschiebt einen Layer im Stapel.
pub fn reorder_layer(state: &mut AppState, from: usize, to: usize) -> bool {
    state.grid.stack_mut().reorder(from, to)
}

/// Setzt die Deckkraft eines Layers.
pub fn set_opacity(state: &mut AppState, id: LayerId, opacity: f32) -> bool {
    state.grid.stack_mut().set_opacity(id, opacity)
}

/// Blendet einen Layer ein oder aus.
pub fn set_visible(state: &mut AppState, id: LayerId, visible: bool) -> bool {
    state.grid.stack_mut().set_visible(id, visible)
}

/// Benennt einen Layer um.
pub fn rename(state: &mut AppState, id: LayerId, name: String) -> bool {
    state.grid.stack_mut().rename(id, name)
}

/// Macht einen Layer zum Malziel.
pub fn set_active(state: &mut AppState, id: LayerId) -> bool {
    state.grid.stack_mut().set_active(id)
}

/// Vorschaubild eines Layers in Thumbnail-Größe.
pub fn thumbnail(state: &AppState, id: LayerId) -> Option<RgbaImage> {
    let index = state.grid.stack().index_of(id)?;
    layer_thumbnail(
        &state.grid,
        index,
        state.renderer.as_ref(),
        state.resolver.as_ref(),
        state.options.cell_size_px.round().max(1.0) as u32,
        state.options.thumbnail_px,
    )
}
