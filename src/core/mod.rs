//! Core-Domänentypen: Koordinatenraum, Layer, Raster, Auswahl-Transformationen.

pub mod capture;
pub mod composite;
pub mod coord_space;
pub mod layer;
pub mod layer_stack;
/// Virtuell unendliches Kachelraster
///
/// Verbindet den Koordinatenraum mit dem Layer-Stapel:
/// - Wachstum an allen Kanten inklusive Umschreiben der Einträge
/// - Lesen/Schreiben über logische Koordinaten
pub mod tile_grid;
pub mod tile_rect;
pub mod tile_ref;
pub mod transform;
pub mod viewport;

pub use capture::{capture, CapturedEntry, CapturedSet};
pub use composite::{merged_key, CellRef, CompositeId, CompositeTile};
pub use coord_space::{CoordSpace, Growth, COORD_LIMIT};
pub use layer::{CellBounds, Layer, LayerId};
pub use layer_stack::{ComposedEntry, LayerStack};
pub use tile_grid::TileGrid;
pub use tile_rect::TileRect;
pub use tile_ref::{SymbolicTile, TileKind, TileRef};
pub use transform::{clear_from_layers, move_to, resize_tiled};
pub use viewport::Viewport;
