//! Rastern von Zellen, Regionen und Layer-Vorschauen.

use super::{TileRenderer, TileResolver};
use crate::core::{CellBounds, SymbolicTile, TileGrid, TileRef};
use image::imageops::FilterType;
use image::RgbaImage;
use std::collections::HashMap;
use tile_raster::{blend_over_at, fit_thumbnail, flatten_stack};

/// Welche Layer eine Region zeigt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionLayers {
    /// Alle sichtbaren Layer (unten → oben)
    Visible,
    /// Genau ein Layer, unabhängig von seiner Sichtbarkeit
    Single(usize),
}

/// Rastert eine einzelne Referenz auf `size × size`.
///
/// Nicht auflösbare symbolische Referenzen liefern `None`.
pub fn render_tile(
    tile: &TileRef,
    renderer: &dyn TileRenderer,
    resolver: &dyn TileResolver,
    size: u32,
) -> Option<RgbaImage> {
    match tile {
        TileRef::Symbolic(symbolic) => {
            if !resolver.is_resolvable(symbolic) {
                return None;
            }
            renderer.render(symbolic, size)
        }
        TileRef::Merged { image_data } => {
            let image = image_data.image();
            if image.width() == size && image.height() == size {
                Some(image.clone())
            } else {
                Some(image::imageops::resize(image, size, size, FilterType::Nearest))
            }
        }
    }
}

/// Verschmilzt einen Zellstapel `(Referenz, Deckkraft)` von unten nach oben.
pub fn flatten_entries<'a, I>(
    entries: I,
    renderer: &dyn TileRenderer,
    resolver: &dyn TileResolver,
    size: u32,
) -> RgbaImage
where
    I: IntoIterator<Item = (&'a TileRef, f32)>,
{
    let rendered: Vec<(RgbaImage, f32)> = entries
        .into_iter()
        .filter_map(|(tile, opacity)| {
            render_tile(tile, renderer, resolver, size).map(|image| (image, opacity))
        })
        .collect();
    flatten_stack(size, rendered.iter().map(|(image, opacity)| (image, *opacity)))
}

/// Rastert einen logischen Zellbereich mit `cell_px` Pixeln pro Zelle.
///
/// Deckkraft der Layer wird angewendet; gleiche symbolische Referenzen
/// werden nur einmal gerendert.
pub fn render_region(
    grid: &TileGrid,
    bounds: CellBounds,
    layers: RegionLayers,
    renderer: &dyn TileRenderer,
    resolver: &dyn TileResolver,
    cell_px: u32,
) -> RgbaImage {
    let cells = bounds.size();
    let width = (cells.x.max(0) as u32).saturating_mul(cell_px);
    let height = (cells.y.max(0) as u32).saturating_mul(cell_px);
    let mut canvas = RgbaImage::new(width, height);
    let mut cache: HashMap<SymbolicTile, Option<RgbaImage>> = HashMap::new();

    for (layer_index, layer) in grid.stack().layers().iter().enumerate() {
        let included = match layers {
            RegionLayers::Visible => layer.visible,
            RegionLayers::Single(index) => index == layer_index,
        };
        if !included {
            continue;
        }

        for (storage, tile) in layer.entries() {
            let logical = grid.to_logical(storage);
            if logical.cmplt(bounds.min).any() || logical.cmpgt(bounds.max).any() {
                continue;
            }
            let offset = (logical - bounds.min).as_i64vec2() * i64::from(cell_px);

            let image = match tile {
                TileRef::Symbolic(symbolic) => cache
                    .entry(symbolic.clone())
                    .or_insert_with(|| render_tile(tile, renderer, resolver, cell_px))
                    .clone(),
                TileRef::Merged { .. } => render_tile(tile, renderer, resolver, cell_px),
            };
            if let Some(image) = image {
                blend_over_at(&mut canvas, &image, offset.x, offset.y, layer.opacity());
            }
        }
    }
    canvas
}

/// Vorschau eines einzelnen Layers, eingepasst in `max_edge` Pixel.
///
/// `None` für leere Layer oder unbekannten Index.
pub fn layer_thumbnail(
    grid: &TileGrid,
    layer_index: usize,
    renderer: &dyn TileRenderer,
    resolver: &dyn TileResolver,
    cell_px: u32,
    max_edge: u32,
) -> Option<RgbaImage> {
    let bounds = grid.bounds_of(layer_index)?;
    let region = render_region(
        grid,
        bounds,
        RegionLayers::Single(layer_index),
        renderer,
        resolver,
        cell_px,
    );
    Some(fit_thumbnail(&region, max_edge))
}
