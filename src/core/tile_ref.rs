//! Kachel-Referenzen: was in einer Zelle gezeichnet wird.

use serde::{Deserialize, Serialize};
use tile_raster::RasterSnapshot;

/// Art des Zeichenobjekts hinter einer symbolischen Referenz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    /// Einzelne Form
    Shape,
    /// Muster aus mehreren Formen
    Pattern,
    /// Mehrzellige Kombination (nutzt `sub_row`/`sub_col`)
    Combination,
}

/// Referenz auf ein Zeichenobjekt über seinen logischen Namen.
///
/// Bleibt gültig, solange `name` im Katalog auflösbar ist, unabhängig
/// davon, an welcher Stelle der Palette das Objekt gerade steht.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolicTile {
    /// Art des Zeichenobjekts
    pub kind: TileKind,
    /// Logischer Name im Katalog
    pub name: String,
    /// Gewählte Farbvariante
    pub color_index: u32,
    /// Zeile der Teilzelle bei mehrzelligen Kombinationen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_row: Option<u32>,
    /// Spalte der Teilzelle bei mehrzelligen Kombinationen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_col: Option<u32>,
}

impl SymbolicTile {
    /// Erstellt eine einzellige Referenz.
    pub fn new(kind: TileKind, name: impl Into<String>, color_index: u32) -> Self {
        Self {
            kind,
            name: name.into(),
            color_index,
            sub_row: None,
            sub_col: None,
        }
    }

    /// Referenz auf eine Teilzelle einer Kombination.
    pub fn with_sub_cell(mut self, sub_row: u32, sub_col: u32) -> Self {
        self.sub_row = Some(sub_row);
        self.sub_col = Some(sub_col);
        self
    }
}

/// Inhalt einer Zelle in genau einem Layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TileRef {
    /// Symbolische Referenz in den Katalog
    Symbolic(SymbolicTile),
    /// Eingefrorene Pixel einer ehemals mehrlagigen Zelle
    #[serde(rename_all = "camelCase")]
    Merged {
        /// Unveränderlicher Pixel-Schnappschuss
        image_data: RasterSnapshot,
    },
}

impl TileRef {
    /// Kurzform für eine einzellige symbolische Referenz.
    pub fn symbolic(kind: TileKind, name: impl Into<String>, color_index: u32) -> Self {
        TileRef::Symbolic(SymbolicTile::new(kind, name, color_index))
    }

    /// Verpackt einen Schnappschuss als Merged-Referenz.
    pub fn merged(image_data: RasterSnapshot) -> Self {
        TileRef::Merged { image_data }
    }

    /// Gibt die symbolische Referenz zurück (falls vorhanden).
    pub fn as_symbolic(&self) -> Option<&SymbolicTile> {
        match self {
            TileRef::Symbolic(symbolic) => Some(symbolic),
            TileRef::Merged { .. } => None,
        }
    }

    /// `true` für eingefrorene Pixel-Referenzen.
    pub fn is_merged(&self) -> bool {
        matches!(self, TileRef::Merged { .. })
    }
}
