//! Registry der Composite-Kacheln einer Sitzung.
//!
//! `promote` friert ein Capture ein: jede Zelle mit Einträgen aus mehreren
//! Layern wird sofort zu einem Raster-Schnappschuss verschmolzen (unten →
//! oben, mit Layer-Deckkraft). Spätere Änderungen an Layern oder am
//! Renderer wirken sich nicht mehr auf das Composite aus.

use crate::core::{merged_key, CapturedSet, CellRef, CompositeId, CompositeTile};
use crate::render::{flatten_entries, TileRenderer, TileResolver};
use indexmap::IndexMap;
use std::collections::BTreeMap;
use tile_raster::RasterSnapshot;

/// Alle Composite-Kacheln in Erstellungsreihenfolge.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomTileRegistry {
    tiles: IndexMap<CompositeId, CompositeTile>,
    next_id: CompositeId,
}

impl Default for CustomTileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomTileRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self {
            tiles: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Baut eine Registry aus geladenen Composites.
    pub fn from_tiles(tiles: Vec<CompositeTile>) -> Self {
        let next_id = tiles.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            tiles: tiles.into_iter().map(|t| (t.id, t)).collect(),
            next_id,
        }
    }

    /// Erstellt ein Composite aus einem Capture.
    ///
    /// `None` nur bei leerem Capture.
    pub fn promote(
        &mut self,
        captured: &CapturedSet,
        name: Option<String>,
        renderer: &dyn TileRenderer,
        resolver: &dyn TileResolver,
        cell_px: u32,
    ) -> Option<&CompositeTile> {
        if captured.is_empty() {
            return None;
        }

        let cell_refs: Vec<CellRef> = captured
            .entries
            .iter()
            .map(|entry| CellRef {
                local_x: entry.local.x,
                local_y: entry.local.y,
                tile: entry.tile.clone(),
                source_layer_index: entry.layer_index,
            })
            .collect();

        let mut merged_cells = BTreeMap::new();
        for local in captured.collision_cells() {
            let mut stack: Vec<_> = captured.entries_at(local).collect();
            stack.sort_by_key(|entry| entry.layer_index);
            let image = flatten_entries(
                stack.iter().map(|entry| (&entry.tile, entry.opacity)),
                renderer,
                resolver,
                cell_px,
            );
            merged_cells.insert(merged_key(local), RasterSnapshot::new(image));
        }

        let id = self.next_id;
        self.next_id += 1;
        let tile = CompositeTile {
            id,
            name: name.unwrap_or_else(|| format!("Composite {id}")),
            width: captured.rect.size.x,
            height: captured.rect.size.y,
            cell_refs,
            merged_cells,
        };

        log::info!(
            "Composite '{}' erstellt: {}x{}, {} Einträge, {} verschmolzene Zellen",
            tile.name,
            tile.width,
            tile.height,
            tile.cell_refs.len(),
            tile.merged_cells.len()
        );
        self.tiles.insert(id, tile);
        self.tiles.get(&id)
    }

    /// Gibt das Composite mit der angegebenen ID zurück (falls vorhanden).
    pub fn get(&self, id: CompositeId) -> Option<&CompositeTile> {
        self.tiles.get(&id)
    }

    /// Entfernt ein Composite. Bereits platzierte Kopien bleiben erhalten.
    pub fn remove(&mut self, id: CompositeId) -> bool {
        self.tiles.shift_remove(&id).is_some()
    }

    /// Alle Composites in Erstellungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &CompositeTile> {
        self.tiles.values()
    }

    /// Gibt die Anzahl der gespeicherten Composites zurück.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Gibt zurück ob die Registry leer ist.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
