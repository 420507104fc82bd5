//! Handler für Viewport-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt den Viewport um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    use_cases::viewport::pan(state, delta);
}

/// Zoomt mit optionalem Fokuspunkt in Bildschirmkoordinaten.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_screen: Option<glam::Vec2>) {
    use_cases::viewport::zoom(state, factor, focus_screen);
}

/// Passt den Viewport an den Inhalt an.
pub fn fit_to_content(state: &mut AppState) {
    use_cases::viewport::fit_to_content(state);
}
