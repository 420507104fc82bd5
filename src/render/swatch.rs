//! Eingebauter Farbfeld-Renderer mit kleinem Katalog.

use super::{TileRenderer, TileResolver};
use crate::core::{SymbolicTile, TileKind};
use image::{Rgba, RgbaImage};
use indexmap::IndexMap;

/// Katalogreihenfolge für Positionsreferenzen: Zeile = Art.
const KIND_ROWS: [TileKind; 3] = [TileKind::Shape, TileKind::Pattern, TileKind::Combination];

const FALLBACK_COLOR: [u8; 4] = [128, 128, 128, 255];

/// Deterministischer Renderer: flache Palettenfarbe plus Markierung je Art.
#[derive(Debug, Clone)]
pub struct SwatchRenderer {
    palette: Vec<[u8; 4]>,
    catalog: IndexMap<String, TileKind>,
}

impl SwatchRenderer {
    /// Renderer mit eigener Palette und leerem Katalog.
    pub fn new(palette: Vec<[u8; 4]>) -> Self {
        Self {
            palette,
            catalog: IndexMap::new(),
        }
    }

    /// Registriert einen Namen im Katalog.
    pub fn register(&mut self, name: impl Into<String>, kind: TileKind) {
        self.catalog.insert(name.into(), kind);
    }

    /// Füllt den Katalog mit den Standard-Zeichenobjekten.
    pub fn with_default_catalog(mut self) -> Self {
        for name in ["square", "circle", "triangle", "diamond"] {
            self.register(name, TileKind::Shape);
        }
        for name in ["stripes", "checker", "dots"] {
            self.register(name, TileKind::Pattern);
        }
        for name in ["bridge", "house"] {
            self.register(name, TileKind::Combination);
        }
        self
    }

    /// Anzahl registrierter Namen.
    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    fn color(&self, index: u32) -> [u8; 4] {
        if self.palette.is_empty() {
            return FALLBACK_COLOR;
        }
        self.palette[index as usize % self.palette.len()]
    }
}

impl Default for SwatchRenderer {
    fn default() -> Self {
        Self::new(crate::shared::options::SWATCH_PALETTE.to_vec()).with_default_catalog()
    }
}

impl TileRenderer for SwatchRenderer {
    fn render(&self, tile: &SymbolicTile, size: u32) -> Option<RgbaImage> {
        if size == 0 {
            return None;
        }
        let base = self.color(tile.color_index);
        let dark = shade(base, 0.6);

        let image = match tile.kind {
            TileKind::Shape => {
                // Gefülltes Quadrat mit transparentem Rand
                let inset = size / 8;
                RgbaImage::from_fn(size, size, |x, y| {
                    let inside = x >= inset && y >= inset && x < size - inset && y < size - inset;
                    if inside {
                        Rgba(base)
                    } else {
                        Rgba([0, 0, 0, 0])
                    }
                })
            }
            TileKind::Pattern => {
                let block = (size / 4).max(1);
                RgbaImage::from_fn(size, size, |x, y| {
                    if (x / block + y / block) % 2 == 0 {
                        Rgba(base)
                    } else {
                        Rgba(dark)
                    }
                })
            }
            TileKind::Combination => {
                let sub = tile.sub_row.unwrap_or(0) + tile.sub_col.unwrap_or(0);
                let fill = if sub % 2 == 0 { base } else { shade(base, 0.8) };
                RgbaImage::from_fn(size, size, |x, y| {
                    let border = x == 0 || y == 0 || x == size - 1 || y == size - 1;
                    if border {
                        Rgba(dark)
                    } else {
                        Rgba(fill)
                    }
                })
            }
        };
        Some(image)
    }
}

impl TileResolver for SwatchRenderer {
    fn is_resolvable(&self, tile: &SymbolicTile) -> bool {
        self.catalog.get(&tile.name) == Some(&tile.kind)
    }

    fn symbol_at(&self, row: u32, col: u32) -> Option<SymbolicTile> {
        let kind = *KIND_ROWS.get(row as usize)?;
        let name = self
            .catalog
            .iter()
            .filter(|(_, k)| **k == kind)
            .nth(col as usize)
            .map(|(name, _)| name.clone())?;
        Some(SymbolicTile::new(kind, name, 0))
    }
}

fn shade(color: [u8; 4], factor: f32) -> [u8; 4] {
    let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
    [scale(color[0]), scale(color[1]), scale(color[2]), color[3]]
}
