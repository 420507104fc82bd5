//! CPU-Rendering von Kacheln, Regionen und Vorschauen.
//!
//! Die eigentliche Darstellung symbolischer Kacheln liefert der Host über
//! [`TileRenderer`]; welche Namen gültig sind, entscheidet der
//! [`TileResolver`]. Der eingebaute [`SwatchRenderer`] erfüllt beides für
//! Tests und die Kommandozeile.

pub mod raster;
mod swatch;

pub use raster::{flatten_entries, layer_thumbnail, render_region, render_tile, RegionLayers};
pub use swatch::SwatchRenderer;

use crate::core::SymbolicTile;
use image::RgbaImage;

/// Zeichnet symbolische Kacheln in quadratische RGBA-Bilder.
pub trait TileRenderer: Send + Sync {
    /// Rendert `tile` in ein `size × size` Bild. `None`, wenn nichts zu
    /// zeichnen ist.
    fn render(&self, tile: &SymbolicTile, size: u32) -> Option<RgbaImage>;
}

/// Löst symbolische Referenzen gegen den Katalog auf.
pub trait TileResolver: Send + Sync {
    /// `true`, wenn der Name im Katalog existiert.
    ///
    /// Nicht auflösbare Referenzen werden still übersprungen.
    fn is_resolvable(&self, tile: &SymbolicTile) -> bool;

    /// Symbol an einer Katalogposition (Legacy-Positionsreferenzen).
    fn symbol_at(&self, row: u32, col: u32) -> Option<SymbolicTile>;
}
