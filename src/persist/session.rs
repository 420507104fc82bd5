//! Sitzungsformat (Version 2): dünn besetzte Layer als JSON.

use super::migration;
use crate::core::{
    CompositeTile, CoordSpace, Layer, LayerId, LayerStack, TileGrid, TileRef,
};
use crate::render::TileResolver;
use anyhow::{bail, Context, Result};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Aktuelle Formatversion.
pub const SESSION_VERSION: u32 = 2;

/// Serialisierte Sitzung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFile {
    /// Formatversion
    pub version: u32,
    /// Koordinatenraum zum Speicherzeitpunkt
    pub space: CoordSpace,
    /// Layer von unten nach oben
    pub layers: Vec<LayerRecord>,
    /// Index des aktiven Layers
    #[serde(default)]
    pub active_layer: usize,
    /// Registry der Composite-Kacheln
    #[serde(default)]
    pub composites: Vec<CompositeTile>,
}

/// Ein gespeicherter Layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerRecord {
    /// Layer-ID
    pub id: LayerId,
    /// Anzeigename
    pub name: String,
    /// Sichtbarkeit
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Deckkraft
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    /// Belegte Zellen, sortiert nach `(y, x)`
    #[serde(default)]
    pub entries: Vec<EntryRecord>,
}

/// Eine belegte Zelle in Storage-Koordinaten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Spalte (Storage)
    pub x: i32,
    /// Zeile (Storage)
    pub y: i32,
    /// Gespeicherte Referenz
    pub tile: TileRef,
}

fn default_visible() -> bool {
    true
}

fn default_opacity() -> f32 {
    1.0
}

/// Ergebnis eines Ladevorgangs.
#[derive(Debug, Clone)]
pub struct LoadedSession {
    /// Wiederhergestelltes Raster (alle Invarianten erfüllt)
    pub grid: TileGrid,
    /// Geladene Composite-Kacheln
    pub composites: Vec<CompositeTile>,
    /// Ursprüngliche Version, falls migriert wurde
    pub migrated_from: Option<u32>,
}

impl SessionFile {
    /// Erfasst den aktuellen Zustand für das Speichern.
    pub fn capture<'a>(
        grid: &TileGrid,
        composites: impl IntoIterator<Item = &'a CompositeTile>,
    ) -> Self {
        let layers = grid
            .stack()
            .layers()
            .iter()
            .map(|layer| LayerRecord {
                id: layer.id,
                name: layer.name.clone(),
                visible: layer.visible,
                opacity: layer.opacity(),
                entries: layer
                    .sorted_entries()
                    .into_iter()
                    .map(|(pos, tile)| EntryRecord {
                        x: pos.x,
                        y: pos.y,
                        tile: tile.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            version: SESSION_VERSION,
            space: *grid.space(),
            layers,
            active_layer: grid.stack().active_index(),
            composites: composites.into_iter().cloned().collect(),
        }
    }

    /// Baut das Raster auf. Einträge außerhalb des gespeicherten Raums
    /// lassen den Raum wachsen; nichts wird abgeschnitten.
    pub fn into_grid(self, growth_chunk: i32) -> (TileGrid, Vec<CompositeTile>) {
        let space = CoordSpace {
            width: self.space.width.max(1),
            height: self.space.height.max(1),
            ..self.space
        };

        let mut seen_ids = HashSet::new();
        let mut next_free = self.layers.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        let mut layers = Vec::with_capacity(self.layers.len());
        let mut pending: Vec<(usize, IVec2, TileRef)> = Vec::new();

        for (index, record) in self.layers.into_iter().enumerate() {
            let id = if seen_ids.insert(record.id) {
                record.id
            } else {
                log::warn!("Doppelte Layer-ID {} neu vergeben als {}", record.id, next_free);
                next_free += 1;
                next_free - 1
            };

            let mut layer = Layer::new(id, record.name);
            layer.visible = record.visible;
            layer.set_opacity(record.opacity);
            layers.push(layer);

            for entry in record.entries {
                let logical = space.to_logical(IVec2::new(entry.x, entry.y));
                pending.push((index, logical, entry.tile));
            }
        }

        let stack = LayerStack::from_layers(layers, self.active_layer).unwrap_or_else(|| {
            log::warn!("Sitzung ohne Layer, lege einen leeren Layer an");
            LayerStack::new()
        });
        let mut grid = TileGrid::from_parts(space, stack, growth_chunk);

        for (index, logical, tile) in pending {
            if !grid.space().contains_logical(logical) {
                log::warn!("Eintrag {} außerhalb des gespeicherten Raums, Raum wächst", logical);
                grid.grow_to_include(logical, 0);
            }
            grid.set(index, logical, Some(tile));
        }

        (grid, self.composites)
    }
}

/// Serialisiert den Zustand als JSON (Version 2).
pub fn session_to_json<'a>(
    grid: &TileGrid,
    composites: impl IntoIterator<Item = &'a CompositeTile>,
) -> Result<String> {
    let file = SessionFile::capture(grid, composites);
    serde_json::to_string_pretty(&file).context("Sitzung konnte nicht serialisiert werden")
}

/// Lädt eine Sitzung aus JSON; ältere Versionen werden migriert.
pub fn session_from_json(
    json: &str,
    resolver: &dyn TileResolver,
    growth_chunk: i32,
) -> Result<LoadedSession> {
    let value: serde_json::Value =
        serde_json::from_str(json).context("Fehler beim Parsen des JSON")?;
    let version = value
        .get("version")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(1);

    let (file, migrated_from) = match version {
        1 => (migration::migrate_v1(value, resolver)?, Some(1)),
        2 => (
            serde_json::from_value::<SessionFile>(value)
                .context("Sitzung (Version 2) ist fehlerhaft")?,
            None,
        ),
        other => bail!("Unbekannte Sitzungsversion {}", other),
    };

    let (grid, composites) = file.into_grid(growth_chunk);
    if let Err(violation) = grid.check_invariants() {
        bail!("Geladene Sitzung verletzt Invarianten: {}", violation);
    }

    log::info!(
        "Sitzung geladen: {} Layer, {} Composites{}",
        grid.stack().len(),
        composites.len(),
        if migrated_from.is_some() {
            " (migriert von Version 1)"
        } else {
            ""
        }
    );

    Ok(LoadedSession {
        grid,
        composites,
        migrated_from,
    })
}

/// Speichert eine Sitzung als JSON-Datei.
pub fn save_to_file<'a>(
    path: &std::path::Path,
    grid: &TileGrid,
    composites: impl IntoIterator<Item = &'a CompositeTile>,
) -> Result<()> {
    let json = session_to_json(grid, composites)?;
    std::fs::write(path, json)
        .with_context(|| format!("Sitzung konnte nicht nach {} geschrieben werden", path.display()))?;
    log::info!("Sitzung gespeichert nach: {}", path.display());
    Ok(())
}

/// Lädt eine Sitzung aus einer JSON-Datei.
pub fn load_from_file(
    path: &std::path::Path,
    resolver: &dyn TileResolver,
    growth_chunk: i32,
) -> Result<LoadedSession> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Sitzung {} konnte nicht gelesen werden", path.display()))?;
    session_from_json(&json, resolver, growth_chunk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileKind;
    use crate::render::SwatchRenderer;

    fn tile(name: &str) -> TileRef {
        TileRef::symbolic(TileKind::Shape, name, 0)
    }

    #[test]
    fn entries_are_written_sorted_by_row_then_column() {
        let mut grid = TileGrid::new(16, 1);
        grid.set(0, IVec2::new(3, 1), Some(tile("c")));
        grid.set(0, IVec2::new(-1, 1), Some(tile("b")));
        grid.set(0, IVec2::new(5, -2), Some(tile("a")));

        let file = SessionFile::capture(&grid, std::iter::empty());
        let order: Vec<_> = file.layers[0]
            .entries
            .iter()
            .map(|e| (e.y, e.x))
            .collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }

    #[test]
    fn out_of_bounds_entries_grow_the_space_on_load() {
        let json = r#"{
            "version": 2,
            "space": { "originX": 2, "originY": 2, "width": 4, "height": 4 },
            "layers": [{
                "id": 7, "name": "Boden",
                "entries": [
                    { "x": -3, "y": 0, "tile": { "type": "symbolic", "kind": "shape", "name": "square", "colorIndex": 0 } },
                    { "x": 9, "y": 1, "tile": { "type": "symbolic", "kind": "shape", "name": "circle", "colorIndex": 1 } }
                ]
            }]
        }"#;
        let resolver = SwatchRenderer::default();
        let loaded = session_from_json(json, &resolver, 1).expect("Laden sollte klappen");

        assert!(loaded.grid.check_invariants().is_ok());
        // Storage -3 bei Ursprung 2 → logisch -5
        assert!(loaded.grid.get(0, IVec2::new(-5, -2)).is_some());
        assert!(loaded.grid.get(0, IVec2::new(7, -1)).is_some());
        assert_eq!(loaded.grid.stack().layers()[0].id, 7);
        assert_eq!(loaded.migrated_from, None);
    }

    #[test]
    fn unknown_version_is_an_error() {
        let resolver = SwatchRenderer::default();
        let err = session_from_json(r#"{"version": 9}"#, &resolver, 1)
            .expect_err("Version 9 gibt es nicht");
        assert!(err.to_string().contains("9"));
    }

    #[test]
    fn duplicate_layer_ids_are_reassigned() {
        let json = r#"{
            "version": 2,
            "space": { "originX": 0, "originY": 0, "width": 4, "height": 4 },
            "layers": [
                { "id": 1, "name": "A" },
                { "id": 1, "name": "B" }
            ]
        }"#;
        let resolver = SwatchRenderer::default();
        let loaded = session_from_json(json, &resolver, 1).expect("Laden sollte klappen");
        let ids: Vec<_> = loaded.grid.stack().layers().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
