//! Ein einzelner Layer: dünn besetzte Zellen plus Darstellungsattribute.

use super::TileRef;
use glam::IVec2;
use std::collections::HashMap;

/// Stabile Layer-ID (bleibt beim Umsortieren erhalten).
pub type LayerId = u64;

/// Achsenparallele Zellgrenzen (inklusive `max`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    /// Kleinste belegte Zelle
    pub min: IVec2,
    /// Größte belegte Zelle (inklusive)
    pub max: IVec2,
}

impl CellBounds {
    /// Grenzen einer einzelnen Zelle.
    pub fn of_cell(cell: IVec2) -> Self {
        Self {
            min: cell,
            max: cell,
        }
    }

    /// Erweitert die Grenzen um eine Zelle.
    pub fn include(&mut self, cell: IVec2) {
        self.min = self.min.min(cell);
        self.max = self.max.max(cell);
    }

    /// Vereinigung zweier Grenzen.
    pub fn union(self, other: CellBounds) -> CellBounds {
        CellBounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Verschiebt beide Ecken um `delta`.
    pub fn translated(self, delta: IVec2) -> CellBounds {
        CellBounds {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Ausdehnung in Zellen (mindestens 1×1).
    pub fn size(&self) -> IVec2 {
        self.max - self.min + IVec2::ONE
    }
}

/// Ein Layer des Tile-Testers.
///
/// Einträge sind nach Storage-Koordinate indiziert; pro Zelle existiert
/// höchstens eine Referenz. Der Layer kennt weder Ursprung noch Nachbarn.
#[derive(Debug, Clone)]
pub struct Layer {
    /// Stabile ID
    pub id: LayerId,
    /// Anzeigename
    pub name: String,
    /// Sichtbarkeit (unsichtbare Layer werden nicht gecaptured)
    pub visible: bool,
    opacity: f32,
    entries: HashMap<IVec2, TileRef>,
}

impl Layer {
    /// Erstellt einen leeren, sichtbaren, deckenden Layer.
    pub fn new(id: LayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            visible: true,
            opacity: 1.0,
            entries: HashMap::new(),
        }
    }

    /// Deckkraft in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Setzt die Deckkraft; Werte außerhalb `[0, 1]` werden begrenzt, NaN ignoriert.
    pub fn set_opacity(&mut self, value: f32) {
        if value.is_nan() {
            log::warn!("Layer {}: ungültige Deckkraft ignoriert", self.id);
            return;
        }
        self.opacity = value.clamp(0.0, 1.0);
    }

    /// Liest die Referenz an einer Storage-Koordinate.
    pub fn get(&self, pos: IVec2) -> Option<&TileRef> {
        self.entries.get(&pos)
    }

    /// Setzt (`Some`) oder entfernt (`None`) die Referenz an `pos`.
    ///
    /// Gibt die vorher gespeicherte Referenz zurück.
    pub fn set(&mut self, pos: IVec2, tile: Option<TileRef>) -> Option<TileRef> {
        match tile {
            Some(tile) => self.entries.insert(pos, tile),
            None => self.entries.remove(&pos),
        }
    }

    /// Enge Bounding-Box aller Einträge in Storage-Koordinaten.
    ///
    /// `None` bedeutet "keine Kacheln", unterscheidbar von einer einzelnen
    /// Kachel am Ursprung.
    pub fn bounds(&self) -> Option<CellBounds> {
        let mut positions = self.entries.keys();
        let first = *positions.next()?;
        let mut bounds = CellBounds::of_cell(first);
        for &pos in positions {
            bounds.include(pos);
        }
        Some(bounds)
    }

    /// Iterator über alle Einträge (ohne Reihenfolgegarantie).
    pub fn entries(&self) -> impl Iterator<Item = (IVec2, &TileRef)> {
        self.entries.iter().map(|(pos, tile)| (*pos, tile))
    }

    /// Einträge sortiert nach `(y, x)` für stabile Ausgabe.
    pub fn sorted_entries(&self) -> Vec<(IVec2, &TileRef)> {
        let mut entries: Vec<_> = self.entries().collect();
        entries.sort_unstable_by_key(|(pos, _)| (pos.y, pos.x));
        entries
    }

    /// Anzahl belegter Zellen.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// `true`, wenn der Layer keine Kacheln enthält.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Verschiebt alle Einträge um `delta` (Ursprungsverschiebung).
    pub(crate) fn shift_entries(&mut self, delta: IVec2) {
        if delta == IVec2::ZERO || self.entries.is_empty() {
            return;
        }
        self.entries = std::mem::take(&mut self.entries)
            .into_iter()
            .map(|(pos, tile)| (pos + delta, tile))
            .collect();
    }
}
