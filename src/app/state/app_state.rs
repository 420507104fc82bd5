use crate::app::custom_tile_registry::CustomTileRegistry;
use crate::app::CommandLog;
use crate::core::TileGrid;
use crate::render::{SwatchRenderer, TileRenderer, TileResolver};
use crate::shared::TileTesterOptions;
use std::sync::Arc;

use super::{SelectionState, UiState, ViewState};

/// Hauptzustand einer Tile-Tester-Sitzung
pub struct AppState {
    /// Raster mit Koordinatenraum und Layern
    pub grid: TileGrid,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Registry der Composite-Kacheln
    pub composites: CustomTileRegistry,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: TileTesterOptions,
    /// Zeichnet symbolische Kacheln (Snapshots, Vorschauen)
    pub renderer: Arc<dyn TileRenderer>,
    /// Entscheidet, welche symbolischen Kacheln gültig sind
    pub resolver: Arc<dyn TileResolver>,
}

impl AppState {
    /// Erstellt eine leere Sitzung mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(TileTesterOptions::default())
    }

    /// Erstellt eine leere Sitzung mit dem eingebauten Farbfeld-Renderer.
    pub fn with_options(options: TileTesterOptions) -> Self {
        let swatch =
            Arc::new(SwatchRenderer::new(options.swatch_palette.clone()).with_default_catalog());
        Self::with_collaborators(options, swatch.clone(), swatch)
    }

    /// Erstellt eine leere Sitzung mit vom Host gelieferten Kollaborateuren.
    pub fn with_collaborators(
        options: TileTesterOptions,
        renderer: Arc<dyn TileRenderer>,
        resolver: Arc<dyn TileResolver>,
    ) -> Self {
        let options = options.sanitized();
        let grid = TileGrid::new(options.initial_grid_size, options.growth_chunk);
        let mut view = ViewState::new(options.cell_size_px);
        view.viewport.center_on_storage(grid.space().origin().as_vec2());

        Self {
            grid,
            view,
            ui: UiState::new(),
            selection: SelectionState::new(),
            composites: CustomTileRegistry::new(),
            command_log: CommandLog::with_capacity(options.command_log_capacity),
            options,
            renderer,
            resolver,
        }
    }

    /// Anzahl der Layer (für UI-Anzeige)
    pub fn layer_count(&self) -> usize {
        self.grid.stack().len()
    }

    /// Anzahl aller belegten Zellen über alle Layer
    pub fn entry_count(&self) -> usize {
        self.grid
            .stack()
            .layers()
            .iter()
            .map(|layer| layer.entry_count())
            .sum()
    }

    /// Halbe Kantenlänge der Trefferzone des Resize-Griffs in Pixeln.
    ///
    /// Höchstens ein Viertel der Zellgröße, damit die Zellmitte auch bei
    /// 1×1-Auswahlen frei zum Verschieben bleibt.
    pub fn handle_hit_radius(&self) -> f32 {
        self.options
            .resize_handle_px
            .min(self.view.viewport.cell_px() * 0.25)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
