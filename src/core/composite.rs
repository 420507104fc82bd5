//! Composite-Kacheln: wiederverwendbare, eingefrorene Captures.
//!
//! Ein Composite ist nach dem Erstellen unveränderlich. Platzierte Kopien
//! sind unabhängige Werte; das Löschen des Composites berührt sie nicht.

use super::transform::reserve_corners;
use super::{TileGrid, TileRect, TileRef, Viewport};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tile_raster::RasterSnapshot;

/// Stabile ID eines Composites.
pub type CompositeId = u64;

/// Ein eingesammelter Zelleintrag eines Composites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRef {
    /// Spalte relativ zur linken oberen Ecke
    pub local_x: i32,
    /// Zeile relativ zur linken oberen Ecke
    pub local_y: i32,
    /// Referenz zum Capture-Zeitpunkt
    pub tile: TileRef,
    /// Stapel-Index des Herkunfts-Layers
    pub source_layer_index: usize,
}

/// Wiederverwendbare Mehrzellen-Kachel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeTile {
    /// Stabile ID
    pub id: CompositeId,
    /// Anzeigename
    pub name: String,
    /// Breite in Zellen
    pub width: i32,
    /// Höhe in Zellen
    pub height: i32,
    /// Alle eingesammelten Einträge
    pub cell_refs: Vec<CellRef>,
    /// Vorab verschmolzene Kollisionszellen, Schlüssel `"lx,ly"`
    #[serde(default)]
    pub merged_cells: BTreeMap<String, RasterSnapshot>,
}

/// Schlüssel einer lokalen Zelle in `merged_cells`.
pub fn merged_key(local: IVec2) -> String {
    format!("{},{}", local.x, local.y)
}

impl CompositeTile {
    /// Größe als Vektor.
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// Was beim Platzieren in eine lokale Zelle geschrieben wird.
    ///
    /// Verschmolzene Zellen haben Vorrang; sonst gewinnt der oberste Eintrag
    /// (höchster `source_layer_index`).
    pub fn tile_at(&self, local: IVec2) -> Option<TileRef> {
        if let Some(snapshot) = self.merged_cells.get(&merged_key(local)) {
            return Some(TileRef::merged(snapshot.clone()));
        }
        self.cell_refs
            .iter()
            .filter(|c| c.local_x == local.x && c.local_y == local.y)
            .max_by_key(|c| c.source_layer_index)
            .map(|c| c.tile.clone())
    }

    /// Platziert das Composite mit linker oberer Ecke `target_min` in den
    /// aktiven Layer.
    ///
    /// Gibt die Anzahl geschriebener Zellen zurück.
    pub fn place(
        &self,
        grid: &mut TileGrid,
        viewport: &mut Viewport,
        target_min: IVec2,
        margin: i32,
    ) -> usize {
        let target = TileRect::new(target_min, self.size());
        if target.is_empty() {
            return 0;
        }
        if !reserve_corners(grid, viewport, &target, margin) {
            return 0;
        }

        let mut written = 0;
        for cell in target.cells() {
            if let Some(tile) = self.tile_at(cell - target_min) {
                if grid.set_active(cell, Some(tile)) {
                    written += 1;
                }
            }
        }

        log::debug!(
            "Composite '{}' bei {} platziert: {} Zellen",
            self.name,
            target_min,
            written
        );
        written
    }
}
