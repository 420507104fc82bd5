//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einem Host-Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
pub mod render_scene;

pub use options::TileTesterOptions;
pub use render_scene::{RenderScene, SceneCell, SelectionOverlay};
