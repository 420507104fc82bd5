//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::custom_tile_registry::CustomTileRegistry;
use crate::app::state::SelectionPhase;
use crate::app::AppState;
use crate::persist;
use crate::shared::TileTesterOptions;
use std::path::Path;

/// Speichert die Sitzung unter `path` oder dem zuletzt verwendeten Pfad.
///
/// Ohne bekannten Pfad passiert nichts.
pub fn save_session(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let Some(path) = path.or_else(|| state.ui.current_file_path.clone()) else {
        log::warn!("Kein Speicherpfad bekannt, Sitzung nicht gespeichert");
        return Ok(());
    };

    persist::save_to_file(Path::new(&path), &state.grid, state.composites.iter())?;
    state.ui.status_message = Some(format!("Gespeichert: {path}"));
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Lädt eine Sitzung und ersetzt Raster und Composite-Registry.
///
/// Bei Fehlern bleibt der bisherige Zustand unverändert.
pub fn load_session(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let loaded = persist::load_from_file(
        Path::new(&path),
        state.resolver.as_ref(),
        state.options.growth_chunk,
    )?;

    state.grid = loaded.grid;
    state.composites = CustomTileRegistry::from_tiles(loaded.composites);
    state.selection.phase = SelectionPhase::Idle;
    state.ui.status_message = Some(match loaded.migrated_from {
        Some(version) => format!("Geladen (migriert von Version {version}): {path}"),
        None => format!("Geladen: {path}"),
    });
    state.ui.current_file_path = Some(path);

    let origin = state.grid.space().origin().as_vec2();
    state.view.viewport.center_on_storage(origin);
    super::viewport::fit_to_content(state);
    Ok(())
}

/// Übernimmt neue Laufzeit-Optionen (nur im Speicher).
///
/// Die Bildschirmmitte bleibt beim Ändern der Zellgröße auf demselben
/// Storage-Punkt.
pub fn apply_options(state: &mut AppState, options: TileTesterOptions) {
    let options = options.sanitized();
    state.grid.set_growth_chunk(options.growth_chunk);

    let viewport = &mut state.view.viewport;
    let center = viewport.screen_to_storage(viewport.size * 0.5);
    viewport.cell_size = options.cell_size_px;
    viewport.center_on_storage(center);

    state.command_log.set_capacity(options.command_log_capacity);
    state.options = options;
}
