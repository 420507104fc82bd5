//! Builder für Render-Szenen aus dem AppState.

use crate::app::state::SelectionPhase;
use crate::app::AppState;
use crate::core::{CapturedEntry, CapturedSet, TileRect, TileRef};
use crate::shared::render_scene::{SceneCell, SelectionOverlay};
use crate::shared::RenderScene;
use glam::IVec2;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Enthält nur Zellen sichtbarer Layer innerhalb des Viewports; nicht
/// auflösbare symbolische Referenzen werden übersprungen.
pub fn build(state: &AppState) -> RenderScene {
    let viewport = &state.view.viewport;
    let space = state.grid.space();
    let (range_min, range_max) = viewport.visible_storage_range();
    let in_view = |storage: IVec2| storage.cmpge(range_min).all() && storage.cmplt(range_max).all();
    let drawable = |tile: &TileRef| match tile {
        TileRef::Symbolic(symbolic) => state.resolver.is_resolvable(symbolic),
        TileRef::Merged { .. } => true,
    };

    let mut cells = Vec::new();
    for (layer_index, layer) in state.grid.stack().layers().iter().enumerate() {
        if !layer.visible {
            continue;
        }
        for (storage, tile) in layer.sorted_entries() {
            if !in_view(storage) || !drawable(tile) {
                continue;
            }
            let logical = space.to_logical(storage);
            cells.push(SceneCell {
                logical,
                screen_min: viewport.logical_to_screen(space, logical),
                layer_index,
                opacity: layer.opacity(),
                tile: tile.clone(),
                lifted: false,
            });
        }
    }

    for (logical, entry) in lifted_cells(&state.selection.phase) {
        if !in_view(space.to_storage(logical)) || !drawable(&entry.tile) {
            continue;
        }
        cells.push(SceneCell {
            logical,
            screen_min: viewport.logical_to_screen(space, logical),
            layer_index: entry.layer_index,
            opacity: entry.opacity,
            tile: entry.tile.clone(),
            lifted: true,
        });
    }

    let selection = state.selection.display_rect().map(|rect| SelectionOverlay {
        rect,
        screen_min: viewport.logical_to_screen(space, rect.min),
        screen_max: viewport.logical_to_screen(space, rect.max_exclusive()),
        handle_radius: state.handle_hit_radius(),
        transforming: state.selection.is_transforming(),
    });

    RenderScene {
        viewport: viewport.clone(),
        cells,
        selection,
    }
}

/// Vorschau-Positionen des angehobenen Inhalts (logisch).
fn lifted_cells(phase: &SelectionPhase) -> Vec<(IVec2, &CapturedEntry)> {
    match phase {
        SelectionPhase::Dragging {
            captured,
            preview_min,
            ..
        } => captured
            .entries
            .iter()
            .map(|entry| (preview_min.saturating_add(entry.local), entry))
            .collect(),
        SelectionPhase::Resizing {
            captured,
            preview_size,
        } => tiled_preview(captured, TileRect::new(captured.rect.min, *preview_size)),
        _ => Vec::new(),
    }
}

fn tiled_preview(captured: &CapturedSet, target: TileRect) -> Vec<(IVec2, &CapturedEntry)> {
    let orig = captured.rect.size;
    if orig.x <= 0 || orig.y <= 0 {
        return Vec::new();
    }
    let repeat = (target.size + orig - IVec2::ONE) / orig;
    let mut cells = Vec::new();
    for ry in 0..repeat.y {
        for rx in 0..repeat.x {
            let offset = IVec2::new(rx * orig.x, ry * orig.y);
            for entry in &captured.entries {
                let local = offset + entry.local;
                if local.x < target.size.x && local.y < target.size.y {
                    cells.push((target.min.saturating_add(local), entry));
                }
            }
        }
    }
    cells
}
