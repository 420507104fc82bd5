//! Tile-Tester Library.
//! Virtuell unendliches Multi-Layer-Kachelraster als Library exportiert für
//! Tests, den Headless-Binary und Host-Oberflächen.

pub mod app;
pub mod core;
pub mod persist;
pub mod render;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{
    CapturedSet, CellBounds, CompositeTile, CoordSpace, Layer, LayerId, LayerStack, SymbolicTile,
    TileGrid, TileKind, TileRect, TileRef, Viewport,
};
pub use persist::{load_from_file, save_to_file, LoadedSession};
pub use render::{SwatchRenderer, TileRenderer, TileResolver};
pub use shared::{RenderScene, TileTesterOptions};
