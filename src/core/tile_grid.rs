//! Virtuell unendliches Kachelraster: Koordinatenraum + Layer-Stapel.
//!
//! Alle öffentlichen Zugriffe arbeiten mit logischen Koordinaten. Schreiben
//! außerhalb des Storage-Raums ist ein Programmierfehler; Aufrufer müssen
//! vorher `ensure_capacity` aufrufen.

use super::{CellBounds, CoordSpace, Growth, LayerId, LayerStack, TileRef, Viewport};
use glam::IVec2;

/// Raster mit verschiebbarem Ursprung und mehreren Layern.
#[derive(Debug, Clone)]
pub struct TileGrid {
    space: CoordSpace,
    stack: LayerStack,
    growth_chunk: i32,
}

impl TileGrid {
    /// Leeres Raster mit zentriertem Ursprung und einem Layer.
    pub fn new(initial_size: i32, growth_chunk: i32) -> Self {
        Self {
            space: CoordSpace::centered(initial_size),
            stack: LayerStack::new(),
            growth_chunk: growth_chunk.max(1),
        }
    }

    /// Baut ein Raster aus geladenen Teilen.
    ///
    /// Einträge außerhalb des Raums sind hier noch erlaubt; der Loader
    /// ruft danach `grow_to_include` für jede Zelle auf.
    pub fn from_parts(space: CoordSpace, stack: LayerStack, growth_chunk: i32) -> Self {
        Self {
            space,
            stack,
            growth_chunk: growth_chunk.max(1),
        }
    }

    /// Koordinatenraum (read-only).
    pub fn space(&self) -> &CoordSpace {
        &self.space
    }

    /// Layer-Stapel (read-only).
    pub fn stack(&self) -> &LayerStack {
        &self.stack
    }

    /// Layer-Stapel für Verwaltungsoperationen (Reihenfolge, Deckkraft, …).
    ///
    /// Einträge werden über `set` geschrieben, nicht über den Stapel.
    pub fn stack_mut(&mut self) -> &mut LayerStack {
        &mut self.stack
    }

    /// Ersetzt den Wachstumsschritt (z.B. nach Options-Änderung).
    pub fn set_growth_chunk(&mut self, chunk: i32) {
        self.growth_chunk = chunk.max(1);
    }

    /// Logisch → Storage.
    pub fn to_storage(&self, logical: IVec2) -> IVec2 {
        self.space.to_storage(logical)
    }

    /// Storage → logisch.
    pub fn to_logical(&self, storage: IVec2) -> IVec2 {
        self.space.to_logical(storage)
    }

    /// Vergrößert den Raum, bis `logical` mindestens `margin` Zellen von
    /// jeder Kante entfernt ist, und schreibt alle Einträge um.
    ///
    /// Gibt die angewendete Vergrößerung zurück (leer = nichts passiert).
    pub fn grow_to_include(&mut self, logical: IVec2, margin: i32) -> Growth {
        let growth = self
            .space
            .plan_growth(logical, margin, self.growth_chunk);
        if growth.is_none() {
            return growth;
        }

        self.space.apply_growth(&growth);
        let shift = growth.shift();
        for layer in self.stack.layers_mut() {
            layer.shift_entries(shift);
        }

        log::info!(
            "Raster gewachsen: {}x{} (Ursprung {},{})",
            self.space.width,
            self.space.height,
            self.space.origin_x,
            self.space.origin_y
        );
        growth
    }

    /// Wie `grow_to_include`, gleicht zusätzlich den Viewport-Pan aus.
    ///
    /// Gibt `true` zurück, wenn der Raum gewachsen ist.
    pub fn ensure_capacity(&mut self, logical: IVec2, margin: i32, viewport: &mut Viewport) -> bool {
        let growth = self.grow_to_include(logical, margin);
        if growth.is_none() {
            return false;
        }
        viewport.compensate_origin_shift(growth.shift());
        true
    }

    /// Liest die Referenz eines Layers an einer logischen Zelle.
    pub fn get(&self, layer_index: usize, logical: IVec2) -> Option<&TileRef> {
        let storage = self.space.to_storage(logical);
        if !self.space.contains_storage(storage) {
            return None;
        }
        self.stack.get(layer_index)?.get(storage)
    }

    /// Schreibt (`Some`) oder löscht (`None`) eine Zelle in einem Layer.
    ///
    /// Löschen außerhalb des Raums ist ein No-op. Schreiben außerhalb wird
    /// verweigert; das Raster wird nie durch Begrenzen "repariert".
    /// Gibt `true` zurück, wenn sich etwas geändert hat.
    pub fn set(&mut self, layer_index: usize, logical: IVec2, tile: Option<TileRef>) -> bool {
        let storage = self.space.to_storage(logical);
        if !self.space.contains_storage(storage) {
            if tile.is_some() {
                debug_assert!(
                    false,
                    "Schreibzugriff außerhalb des Storage-Raums: logisch {logical}"
                );
                log::error!(
                    "Schreibzugriff außerhalb des Storage-Raums verweigert: {}",
                    logical
                );
            }
            return false;
        }

        let Some(layer) = self.stack.get_mut(layer_index) else {
            return false;
        };
        let writes = tile.is_some();
        let previous = layer.set(storage, tile);
        writes || previous.is_some()
    }

    /// Wie `set`, adressiert den Layer aber über seine ID.
    pub fn set_in_layer(&mut self, id: LayerId, logical: IVec2, tile: Option<TileRef>) -> bool {
        match self.stack.index_of(id) {
            Some(index) => self.set(index, logical, tile),
            None => false,
        }
    }

    /// Schreibt in den aktiven Layer.
    pub fn set_active(&mut self, logical: IVec2, tile: Option<TileRef>) -> bool {
        let index = self.stack.active_index();
        self.set(index, logical, tile)
    }

    /// Bounding-Box eines Layers in logischen Koordinaten.
    pub fn bounds_of(&self, layer_index: usize) -> Option<CellBounds> {
        let bounds = self.stack.get(layer_index)?.bounds()?;
        Some(bounds.translated(-self.space.origin()))
    }

    /// Vereinigte Bounding-Box aller (sichtbaren) Layer, logisch.
    pub fn content_bounds(&self, visible_only: bool) -> Option<CellBounds> {
        self.stack
            .layers()
            .iter()
            .enumerate()
            .filter(|(_, layer)| !visible_only || layer.visible)
            .filter_map(|(index, _)| self.bounds_of(index))
            .reduce(CellBounds::union)
    }

    /// Prüft alle Invarianten; nur für Tests und Debug-Builds gedacht.
    ///
    /// Gibt eine Beschreibung der ersten Verletzung zurück.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.stack.layers().is_empty() {
            return Err("Layer-Stapel ist leer".to_string());
        }
        for layer in self.stack.layers() {
            for (pos, _) in layer.entries() {
                if !self.space.contains_storage(pos) {
                    return Err(format!(
                        "Layer {}: Eintrag {} außerhalb von {}x{}",
                        layer.id, pos, self.space.width, self.space.height
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new(32, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileKind;

    fn tile(name: &str) -> TileRef {
        TileRef::symbolic(TileKind::Shape, name, 0)
    }

    #[test]
    fn logical_positions_survive_origin_shift() {
        let mut grid = TileGrid::new(8, 1);
        let mut viewport = Viewport::default();
        grid.set(0, IVec2::new(1, 2), Some(tile("a")));
        grid.set(0, IVec2::new(-3, 0), Some(tile("b")));

        assert!(grid.ensure_capacity(IVec2::new(-20, -15), 2, &mut viewport));

        assert_eq!(grid.get(0, IVec2::new(1, 2)), Some(&tile("a")));
        assert_eq!(grid.get(0, IVec2::new(-3, 0)), Some(&tile("b")));
        assert!(grid.check_invariants().is_ok());
    }

    #[test]
    fn ensure_capacity_without_growth_returns_false() {
        let mut grid = TileGrid::new(32, 1);
        let mut viewport = Viewport::default();
        let pan = viewport.pan;
        assert!(!grid.ensure_capacity(IVec2::ZERO, 2, &mut viewport));
        assert_eq!(viewport.pan, pan);
    }

    #[test]
    fn high_growth_leaves_pan_untouched() {
        let mut grid = TileGrid::new(8, 1);
        let mut viewport = Viewport::default();
        let pan = viewport.pan;
        assert!(grid.ensure_capacity(IVec2::new(30, 30), 1, &mut viewport));
        assert_eq!(viewport.pan, pan);
        assert_eq!(grid.space().origin(), IVec2::new(4, 4));
    }

    #[test]
    fn erase_outside_storage_is_noop() {
        let mut grid = TileGrid::new(4, 1);
        assert!(!grid.set(0, IVec2::new(100, 100), None));
    }

    #[test]
    fn bounds_are_logical() {
        let mut grid = TileGrid::new(16, 1);
        grid.set(0, IVec2::new(-2, -1), Some(tile("a")));
        grid.set(0, IVec2::new(3, 4), Some(tile("b")));
        let bounds = grid.bounds_of(0).expect("nicht leer");
        assert_eq!(bounds.min, IVec2::new(-2, -1));
        assert_eq!(bounds.max, IVec2::new(3, 4));
    }

    #[test]
    fn content_bounds_skips_hidden_layers() {
        let mut grid = TileGrid::new(16, 1);
        grid.set(0, IVec2::new(0, 0), Some(tile("a")));
        let top = grid.stack_mut().add_layer(None).id;
        grid.set(1, IVec2::new(5, 5), Some(tile("b")));

        assert_eq!(
            grid.content_bounds(true).map(|b| b.max),
            Some(IVec2::new(5, 5))
        );
        grid.stack_mut().set_visible(top, false);
        assert_eq!(
            grid.content_bounds(true).map(|b| b.max),
            Some(IVec2::new(0, 0))
        );
    }
}
