//! Use-Case-Funktionen für Pan, Zoom und Einpassen.

use crate::app::AppState;
use glam::Vec2;

/// Verschiebt den Viewport um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    state.view.viewport.pan_by(delta);
}

/// Zoomt innerhalb der konfigurierten Grenzen, optional um einen Fokuspunkt.
pub fn zoom(state: &mut AppState, factor: f32, focus_screen: Option<Vec2>) {
    state.view.viewport.zoom_by_clamped(
        factor,
        state.options.zoom_min,
        state.options.zoom_max,
        focus_screen,
    );
}

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport.size = Vec2::from(size);
}

/// Zentriert auf den Inhalt aller sichtbaren Layer. Ohne Inhalt ein No-op.
pub fn fit_to_content(state: &mut AppState) {
    let Some(bounds) = state.grid.content_bounds(true) else {
        return;
    };
    let storage = bounds.translated(state.grid.space().origin());
    state.view.viewport.fit_to(
        storage,
        state.options.fit_padding_px,
        state.options.zoom_min,
        state.options.zoom_max,
    );
}
