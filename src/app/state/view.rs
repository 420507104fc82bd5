use crate::core::Viewport;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Pan/Zoom über dem Raster
    pub viewport: Viewport,
}

impl ViewState {
    /// Erstellt den View-Zustand für eine Zellgröße.
    pub fn new(cell_size: f32) -> Self {
        Self {
            viewport: Viewport::new(cell_size),
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Pfad der zuletzt geladenen/gespeicherten Sitzung
    pub current_file_path: Option<String>,
    /// Statusmeldung für die Statusleiste
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
