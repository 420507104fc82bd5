use crate::app::state::SelectionPhase;
use crate::app::AppState;
use crate::core::{capture, clear_from_layers, move_to};
use glam::IVec2;

/// Hebt den Inhalt der fertigen Auswahl an; `cell` ist die gegriffene Zelle.
pub fn begin_drag(state: &mut AppState, cell: IVec2) {
    let Some(rect) = state.selection.finalized_rect() else {
        return;
    };

    let captured = capture(&state.grid, rect);
    clear_from_layers(&mut state.grid, &captured);
    log::debug!("Verschieben gestartet: {} Einträge angehoben", captured.entries.len());

    state.selection.phase = SelectionPhase::Dragging {
        captured,
        grab_offset: cell.saturating_sub(rect.min),
        preview_min: rect.min,
    };
}

/// Lässt die Vorschau dem Zeiger folgen.
pub fn update_drag(state: &mut AppState, cell: IVec2) {
    if let SelectionPhase::Dragging {
        grab_offset,
        preview_min,
        ..
    } = &mut state.selection.phase
    {
        *preview_min = cell.saturating_sub(*grab_offset);
    }
}

/// Schreibt den angehobenen Inhalt an der Vorschau-Position zurück.
pub fn commit_drag(state: &mut AppState) {
    let phase = std::mem::take(&mut state.selection.phase);
    let SelectionPhase::Dragging {
        captured,
        preview_min,
        ..
    } = phase
    else {
        state.selection.phase = phase;
        return;
    };

    let rect = move_to(
        &mut state.grid,
        &mut state.view.viewport,
        &captured,
        preview_min,
        state.options.growth_margin,
    );
    state.selection.phase = SelectionPhase::Finalized { rect };
}
