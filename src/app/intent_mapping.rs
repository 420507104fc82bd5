//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier werden Bildschirmpositionen in logische Zellen übersetzt und der
//! Zeiger anhand der aktuellen Auswahl-Phase gedeutet.

use super::state::SelectionPhase;
use super::{AppCommand, AppIntent, AppState};
use crate::core::CoordSpace;
use glam::{IVec2, Vec2};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            screen_pos,
            select_modifier,
        } => map_pointer_pressed(state, screen_pos, select_modifier),
        AppIntent::PointerDragged { screen_pos } => match &state.selection.phase {
            SelectionPhase::Selecting { .. } => vec![AppCommand::UpdateSelection {
                to: lattice(state, screen_pos),
            }],
            SelectionPhase::Dragging { .. } => vec![AppCommand::UpdateDrag {
                cell: cell(state, screen_pos),
            }],
            SelectionPhase::Resizing { .. } => vec![AppCommand::UpdateResize {
                corner: lattice(state, screen_pos),
            }],
            _ => vec![],
        },
        AppIntent::PointerReleased { screen_pos } => match &state.selection.phase {
            SelectionPhase::Selecting { .. } => vec![
                AppCommand::UpdateSelection {
                    to: lattice(state, screen_pos),
                },
                AppCommand::FinalizeSelection,
            ],
            SelectionPhase::Dragging { .. } => vec![
                AppCommand::UpdateDrag {
                    cell: cell(state, screen_pos),
                },
                AppCommand::CommitDrag,
            ],
            SelectionPhase::Resizing { .. } => vec![
                AppCommand::UpdateResize {
                    corner: lattice(state, screen_pos),
                },
                AppCommand::CommitResize,
            ],
            _ => vec![],
        },

        AppIntent::SelectionDismissed => vec![AppCommand::CancelSelection],
        AppIntent::DeleteSelectionRequested => vec![AppCommand::DeleteSelection],

        AppIntent::PaintRequested { screen_pos, tile } => vec![AppCommand::PlaceTile {
            cell: cell(state, screen_pos),
            tile,
        }],
        AppIntent::EraseRequested { screen_pos } => vec![AppCommand::EraseTile {
            cell: cell(state, screen_pos),
        }],

        AppIntent::AddLayerRequested { above_index } => vec![AppCommand::AddLayer { above_index }],
        AppIntent::RemoveLayerRequested { id } => {
            with_cancel(state, AppCommand::RemoveLayer { id })
        }
        AppIntent::ReorderLayerRequested { from, to } => {
            with_cancel(state, AppCommand::ReorderLayer { from, to })
        }
        AppIntent::LayerOpacityChanged { id, opacity } => {
            vec![AppCommand::SetLayerOpacity { id, opacity }]
        }
        AppIntent::LayerVisibilityChanged { id, visible } => {
            vec![AppCommand::SetLayerVisible { id, visible }]
        }
        AppIntent::RenameLayerRequested { id, name } => vec![AppCommand::RenameLayer { id, name }],
        AppIntent::ActiveLayerSelected { id } => vec![AppCommand::SetActiveLayer { id }],

        AppIntent::PromoteSelectionRequested { name } => {
            vec![AppCommand::PromoteSelection { name }]
        }
        AppIntent::PlaceCompositeRequested { id, screen_pos } => vec![AppCommand::PlaceComposite {
            id,
            at: cell(state, screen_pos),
        }],
        AppIntent::RemoveCompositeRequested { id } => vec![AppCommand::RemoveComposite { id }],

        AppIntent::CameraPan { delta } => vec![AppCommand::PanViewport { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_screen,
        } => vec![AppCommand::ZoomViewport {
            factor,
            focus_screen,
        }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomViewport {
            factor: state.options.zoom_step,
            focus_screen: None,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomViewport {
            factor: 1.0 / state.options.zoom_step,
            focus_screen: None,
        }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::FitToContentRequested => vec![AppCommand::FitToContent],

        AppIntent::SaveRequested { path } => with_cancel(state, AppCommand::SaveSession { path }),
        AppIntent::LoadRequested { path } => with_cancel(state, AppCommand::LoadSession { path }),
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

fn map_pointer_pressed(state: &AppState, screen_pos: Vec2, select_modifier: bool) -> Vec<AppCommand> {
    if select_modifier {
        let begin = AppCommand::BeginSelection {
            at: lattice(state, screen_pos),
        };
        return if state.selection.is_idle() {
            vec![begin]
        } else {
            vec![AppCommand::CancelSelection, begin]
        };
    }

    let Some(rect) = state.selection.finalized_rect() else {
        return vec![];
    };
    let corner = state
        .view
        .viewport
        .logical_to_screen(state.grid.space(), rect.max_exclusive());
    let cell = cell(state, screen_pos);
    if (screen_pos - corner).abs().max_element() <= state.handle_hit_radius() {
        vec![AppCommand::BeginResize]
    } else if rect.contains(cell) {
        vec![AppCommand::BeginDrag { cell }]
    } else {
        // Klick neben die Auswahl verwirft sie
        vec![AppCommand::CancelSelection]
    }
}

/// Strukturelle Änderungen brechen eine laufende Transformation zuerst ab.
fn with_cancel(state: &AppState, command: AppCommand) -> Vec<AppCommand> {
    if state.selection.is_transforming() {
        vec![AppCommand::CancelSelection, command]
    } else {
        vec![command]
    }
}

fn cell(state: &AppState, screen_pos: Vec2) -> IVec2 {
    let cell = state
        .view
        .viewport
        .screen_to_cell(state.grid.space(), screen_pos);
    CoordSpace::clamp_to_limits(cell)
}

fn lattice(state: &AppState, screen_pos: Vec2) -> IVec2 {
    let point = state
        .view
        .viewport
        .screen_to_lattice(state.grid.space(), screen_pos);
    CoordSpace::clamp_to_limits(point)
}
