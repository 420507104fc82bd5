//! Capture: Inhalt eines Auswahlrechtecks über alle sichtbaren Layer.

use super::{LayerId, TileGrid, TileRect, TileRef};
use glam::IVec2;

/// Ein eingesammelter Eintrag, relativ zur linken oberen Ecke der Auswahl.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedEntry {
    /// Position relativ zu `CapturedSet::rect.min`
    pub local: IVec2,
    /// Eingesammelte Referenz
    pub tile: TileRef,
    /// Stapel-Index des Herkunfts-Layers zum Capture-Zeitpunkt
    pub layer_index: usize,
    /// ID des Herkunfts-Layers
    pub layer_id: LayerId,
    /// Deckkraft des Herkunfts-Layers zum Capture-Zeitpunkt
    pub opacity: f32,
}

/// Ergebnis eines Captures.
///
/// Einträge liegen zeilenweise nach Zelle und innerhalb einer Zelle von
/// unten nach oben.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CapturedSet {
    /// Erfasstes Rechteck (logisch)
    pub rect: TileRect,
    /// Alle Einträge
    pub entries: Vec<CapturedEntry>,
}

impl CapturedSet {
    /// `true`, wenn keine Einträge erfasst wurden.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Einträge einer lokalen Zelle (unten → oben).
    pub fn entries_at(&self, local: IVec2) -> impl Iterator<Item = &CapturedEntry> {
        self.entries.iter().filter(move |e| e.local == local)
    }

    /// Lokale Zellen mit Einträgen aus mehr als einem Layer, zeilenweise.
    pub fn collision_cells(&self) -> Vec<IVec2> {
        let mut cells = Vec::new();
        let mut current: Option<(IVec2, usize)> = None;
        for entry in &self.entries {
            match current {
                Some((cell, count)) if cell == entry.local => {
                    if count == 1 {
                        cells.push(cell);
                    }
                    current = Some((cell, count + 1));
                }
                _ => current = Some((entry.local, 1)),
            }
        }
        cells
    }
}

/// Sammelt für jede Zelle der Auswahl die Einträge aller sichtbaren Layer
/// (unten → oben) samt Layer-Index und Deckkraft ein.
///
/// Verändert das Raster nicht.
pub fn capture(grid: &TileGrid, rect: TileRect) -> CapturedSet {
    let mut entries = Vec::new();
    for cell in rect.cells() {
        for (layer_index, layer) in grid.stack().layers().iter().enumerate() {
            if !layer.visible {
                continue;
            }
            if let Some(tile) = grid.get(layer_index, cell) {
                entries.push(CapturedEntry {
                    local: cell - rect.min,
                    tile: tile.clone(),
                    layer_index,
                    layer_id: layer.id,
                    opacity: layer.opacity(),
                });
            }
        }
    }

    log::debug!(
        "Capture {}x{} bei {}: {} Einträge",
        rect.size.x,
        rect.size.y,
        rect.min,
        entries.len()
    );
    CapturedSet { rect, entries }
}
