//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Auswahl ===
            AppCommand::BeginSelection { at } => handlers::selection::begin(state, at),
            AppCommand::UpdateSelection { to } => handlers::selection::update(state, to),
            AppCommand::FinalizeSelection => handlers::selection::finalize(state),
            AppCommand::CancelSelection => handlers::selection::cancel(state),
            AppCommand::BeginDrag { cell } => handlers::selection::begin_drag(state, cell),
            AppCommand::UpdateDrag { cell } => handlers::selection::update_drag(state, cell),
            AppCommand::CommitDrag => handlers::selection::commit_drag(state),
            AppCommand::BeginResize => handlers::selection::begin_resize(state),
            AppCommand::UpdateResize { corner } => {
                handlers::selection::update_resize(state, corner)
            }
            AppCommand::CommitResize => handlers::selection::commit_resize(state),
            AppCommand::DeleteSelection => handlers::selection::delete(state),

            // === Malen ===
            AppCommand::PlaceTile { cell, tile } => handlers::painting::place(state, cell, tile),
            AppCommand::EraseTile { cell } => handlers::painting::erase(state, cell),

            // === Layer ===
            AppCommand::AddLayer { above_index } => handlers::layers::add(state, above_index),
            AppCommand::RemoveLayer { id } => handlers::layers::remove(state, id),
            AppCommand::ReorderLayer { from, to } => handlers::layers::reorder(state, from, to),
            AppCommand::SetLayerOpacity { id, opacity } => {
                handlers::layers::set_opacity(state, id, opacity)
            }
            AppCommand::SetLayerVisible { id, visible } => {
                handlers::layers::set_visible(state, id, visible)
            }
            AppCommand::RenameLayer { id, name } => handlers::layers::rename(state, id, name),
            AppCommand::SetActiveLayer { id } => handlers::layers::set_active(state, id),

            // === Composite-Kacheln ===
            AppCommand::PromoteSelection { name } => handlers::custom_tiles::promote(state, name),
            AppCommand::PlaceComposite { id, at } => handlers::custom_tiles::place(state, id, at),
            AppCommand::RemoveComposite { id } => handlers::custom_tiles::remove(state, id),

            // === Viewport ===
            AppCommand::PanViewport { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomViewport {
                factor,
                focus_screen,
            } => handlers::view::zoom_towards(state, factor, focus_screen),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::FitToContent => handlers::view::fit_to_content(state),

            // === Datei & Optionen ===
            AppCommand::SaveSession { path } => handlers::file_io::save(state, path)?,
            AppCommand::LoadSession { path } => handlers::file_io::load(state, path)?,
            AppCommand::ApplyOptions { options } => {
                handlers::file_io::apply_options(state, *options)
            }
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
