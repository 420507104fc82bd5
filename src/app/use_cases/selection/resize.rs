use crate::app::state::SelectionPhase;
use crate::app::AppState;
use crate::core::{capture, clear_from_layers, move_to, resize_tiled, TileRect};
use glam::IVec2;

/// Hebt den Inhalt der fertigen Auswahl für das Skalieren an.
pub fn begin_resize(state: &mut AppState) {
    let Some(rect) = state.selection.finalized_rect() else {
        return;
    };

    let captured = capture(&state.grid, rect);
    clear_from_layers(&mut state.grid, &captured);
    log::debug!("Skalieren gestartet: {} Einträge angehoben", captured.entries.len());

    state.selection.phase = SelectionPhase::Resizing {
        captured,
        preview_size: rect.size,
    };
}

/// Vorschaugröße aus dem Gitterpunkt unter dem Griff (mindestens 1×1).
pub fn update_resize(state: &mut AppState, corner: IVec2) {
    if let SelectionPhase::Resizing {
        captured,
        preview_size,
    } = &mut state.selection.phase
    {
        *preview_size = corner.saturating_sub(captured.rect.min).max(IVec2::ONE);
    }
}

/// Füllt die neue Größe gekachelt mit dem angehobenen Inhalt.
pub fn commit_resize(state: &mut AppState) {
    let phase = std::mem::take(&mut state.selection.phase);
    let SelectionPhase::Resizing {
        captured,
        preview_size,
    } = phase
    else {
        state.selection.phase = phase;
        return;
    };

    let margin = state.options.growth_margin;
    let rect = if preview_size == captured.rect.size {
        move_to(
            &mut state.grid,
            &mut state.view.viewport,
            &captured,
            captured.rect.min,
            margin,
        )
    } else {
        resize_tiled(
            &mut state.grid,
            &mut state.view.viewport,
            &captured,
            TileRect::new(captured.rect.min, preview_size),
            margin,
        )
    };
    state.selection.phase = SelectionPhase::Finalized { rect };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TileKind, TileRef};

    fn tile(name: &str) -> TileRef {
        TileRef::symbolic(TileKind::Shape, name, 0)
    }

    fn finalized_state() -> AppState {
        let mut state = AppState::new();
        state.grid.set(0, IVec2::new(0, 0), Some(tile("a")));
        state.grid.set(0, IVec2::new(1, 0), Some(tile("b")));
        state.selection.phase = SelectionPhase::Finalized {
            rect: TileRect::new(IVec2::ZERO, IVec2::new(2, 1)),
        };
        state
    }

    #[test]
    fn resize_repeats_content() {
        let mut state = finalized_state();
        begin_resize(&mut state);
        update_resize(&mut state, IVec2::new(5, 2));
        commit_resize(&mut state);

        assert_eq!(
            state.selection.finalized_rect(),
            Some(TileRect::new(IVec2::ZERO, IVec2::new(5, 2)))
        );
        // 5x2 aus 2x1: a b a b a pro Zeile
        assert_eq!(state.entry_count(), 10);
        assert_eq!(state.grid.get(0, IVec2::new(4, 1)), Some(&tile("a")));
        assert_eq!(state.grid.get(0, IVec2::new(3, 0)), Some(&tile("b")));
        assert!(state.grid.get(0, IVec2::new(5, 0)).is_none());
    }

    #[test]
    fn preview_never_collapses_below_one_cell() {
        let mut state = finalized_state();
        begin_resize(&mut state);
        update_resize(&mut state, IVec2::new(-4, -4));
        match &state.selection.phase {
            SelectionPhase::Resizing { preview_size, .. } => {
                assert_eq!(*preview_size, IVec2::ONE)
            }
            other => panic!("Unerwartete Phase: {other:?}"),
        }
    }

    #[test]
    fn resize_to_same_size_restores_content() {
        let mut state = finalized_state();
        begin_resize(&mut state);
        commit_resize(&mut state);

        assert_eq!(state.entry_count(), 2);
        assert_eq!(state.grid.get(0, IVec2::new(1, 0)), Some(&tile("b")));
    }

    #[test]
    fn shrinking_clips_content() {
        let mut state = finalized_state();
        begin_resize(&mut state);
        update_resize(&mut state, IVec2::new(1, 1));
        commit_resize(&mut state);

        assert_eq!(state.entry_count(), 1);
        assert_eq!(state.grid.get(0, IVec2::ZERO), Some(&tile("a")));
    }
}
