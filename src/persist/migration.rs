//! Migration des Legacy-Formats (Version 1) auf Version 2.
//!
//! Version 1 speichert jeden Layer als dichtes 2D-Array `cells[row][col]`.
//! Zellen sind entweder symbolisch, eingefrorene Pixel oder positionale
//! Verweise `{ row, col }` in die Palette. Positionale Verweise werden über
//! den Resolver in symbolische Referenzen übersetzt.

use super::session::{EntryRecord, LayerRecord, SessionFile, SESSION_VERSION};
use crate::core::{CoordSpace, SymbolicTile, TileRef};
use crate::render::TileResolver;
use anyhow::{Context, Result};
use serde::Deserialize;
use tile_raster::RasterSnapshot;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacySession {
    width: i32,
    height: i32,
    #[serde(default)]
    origin_x: i32,
    #[serde(default)]
    origin_y: i32,
    #[serde(default)]
    active_layer: Option<usize>,
    #[serde(default)]
    layers: Vec<LegacyLayer>,
}

#[derive(Debug, Deserialize)]
struct LegacyLayer {
    #[serde(default)]
    name: Option<String>,
    #[serde(default = "default_visible")]
    visible: bool,
    #[serde(default = "default_opacity")]
    opacity: f32,
    #[serde(default)]
    cells: Vec<Vec<Option<LegacyCell>>>,
}

fn default_visible() -> bool {
    true
}

fn default_opacity() -> f32 {
    1.0
}

/// Reihenfolge der Varianten entscheidet beim untagged-Parsing.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LegacyCell {
    Symbolic(SymbolicTile),
    #[serde(rename_all = "camelCase")]
    Merged {
        image_data: RasterSnapshot,
    },
    Positional {
        row: u32,
        col: u32,
    },
}

/// Wandelt ein Version-1-Dokument in eine Version-2-Sitzung um.
pub fn migrate_v1(value: serde_json::Value, resolver: &dyn TileResolver) -> Result<SessionFile> {
    let legacy: LegacySession =
        serde_json::from_value(value).context("Sitzung (Version 1) ist fehlerhaft")?;

    let mut dropped = 0usize;
    let layers: Vec<LayerRecord> = legacy
        .layers
        .into_iter()
        .enumerate()
        .map(|(index, layer)| {
            let mut entries = Vec::new();
            for (row, cells) in layer.cells.into_iter().enumerate() {
                for (col, cell) in cells.into_iter().enumerate() {
                    let Some(cell) = cell else {
                        continue;
                    };
                    match resolve_cell(cell, resolver) {
                        Some(tile) => entries.push(EntryRecord {
                            x: col as i32,
                            y: row as i32,
                            tile,
                        }),
                        None => {
                            log::warn!(
                                "Migration: Zelle ({}, {}) in Layer {} nicht auflösbar, verworfen",
                                col,
                                row,
                                index
                            );
                            dropped += 1;
                        }
                    }
                }
            }

            let id = index as u64 + 1;
            LayerRecord {
                id,
                name: layer.name.unwrap_or_else(|| format!("Layer {id}")),
                visible: layer.visible,
                opacity: layer.opacity,
                entries,
            }
        })
        .collect();

    log::info!(
        "Sitzung von Version 1 migriert: {} Layer, {} Zellen verworfen",
        layers.len(),
        dropped
    );

    Ok(SessionFile {
        version: SESSION_VERSION,
        space: CoordSpace {
            origin_x: legacy.origin_x,
            origin_y: legacy.origin_y,
            width: legacy.width,
            height: legacy.height,
        },
        layers,
        active_layer: legacy.active_layer.unwrap_or(0),
        composites: Vec::new(),
    })
}

fn resolve_cell(cell: LegacyCell, resolver: &dyn TileResolver) -> Option<TileRef> {
    match cell {
        LegacyCell::Symbolic(symbolic) => {
            resolver.is_resolvable(&symbolic).then_some(TileRef::Symbolic(symbolic))
        }
        LegacyCell::Merged { image_data } => Some(TileRef::merged(image_data)),
        LegacyCell::Positional { row, col } => {
            resolver.symbol_at(row, col).map(TileRef::Symbolic)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::SwatchRenderer;
    use serde_json::json;

    #[test]
    fn dense_cells_become_sparse_entries() {
        let resolver = SwatchRenderer::default();
        let value = json!({
            "width": 3,
            "height": 2,
            "layers": [{
                "name": "Boden",
                "cells": [
                    [null, { "kind": "shape", "name": "square", "colorIndex": 2 }, null],
                    [{ "row": 0, "col": 1 }, null, null]
                ]
            }]
        });

        let file = migrate_v1(value, &resolver).expect("Migration sollte klappen");
        assert_eq!(file.version, SESSION_VERSION);
        let entries = &file.layers[0].entries;
        assert_eq!(entries.len(), 2);
        assert_eq!((entries[0].x, entries[0].y), (1, 0));
        assert_eq!((entries[1].x, entries[1].y), (0, 1));
        // Zeile 0 = Formen, Spalte 1 = zweite registrierte Form
        let expected = resolver.symbol_at(0, 1).expect("Katalog hat Formen");
        assert_eq!(entries[1].tile, TileRef::Symbolic(expected));
        assert_eq!(file.layers[0].name, "Boden");
    }

    #[test]
    fn unresolvable_positional_cells_are_dropped() {
        let resolver = SwatchRenderer::default();
        let value = json!({
            "width": 2,
            "height": 1,
            "layers": [{ "cells": [[{ "row": 99, "col": 99 }, null]] }]
        });

        let file = migrate_v1(value, &resolver).expect("Migration sollte klappen");
        assert!(file.layers[0].entries.is_empty());
        assert_eq!(file.layers[0].name, "Layer 1");
    }

    #[test]
    fn unknown_symbolic_names_are_dropped() {
        let resolver = SwatchRenderer::default();
        let value = json!({
            "width": 1,
            "height": 1,
            "layers": [{ "cells": [[{ "kind": "pattern", "name": "gibt-es-nicht", "colorIndex": 0 }]] }]
        });

        let file = migrate_v1(value, &resolver).expect("Migration sollte klappen");
        assert!(file.layers[0].entries.is_empty());
    }

    #[test]
    fn legacy_origin_is_kept() {
        let resolver = SwatchRenderer::default();
        let value = json!({
            "width": 4, "height": 4, "originX": 2, "originY": 1, "activeLayer": 0,
            "layers": [{ "cells": [] }]
        });

        let file = migrate_v1(value, &resolver).expect("Migration sollte klappen");
        assert_eq!(file.space.origin_x, 2);
        assert_eq!(file.space.origin_y, 1);
        assert!(file.composites.is_empty());
    }
}
