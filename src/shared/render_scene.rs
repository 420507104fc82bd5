//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein Host-Renderer sie konsumiert.

use crate::core::{TileRect, TileRef, Viewport};
use glam::{IVec2, Vec2};

/// Eine zu zeichnende Zelle.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCell {
    /// Logische Zelle
    pub logical: IVec2,
    /// Linke obere Ecke auf dem Bildschirm (Pixel)
    pub screen_min: Vec2,
    /// Stapel-Index des Herkunfts-Layers
    pub layer_index: usize,
    /// Deckkraft des Herkunfts-Layers
    pub opacity: f32,
    /// Zu zeichnende Referenz
    pub tile: TileRef,
    /// `true` für angehobenen Inhalt einer laufenden Transformation
    pub lifted: bool,
}

/// Auswahlrechteck inklusive Live-Vorschau.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionOverlay {
    /// Angezeigter Bereich (logisch)
    pub rect: TileRect,
    /// Linke obere Ecke auf dem Bildschirm
    pub screen_min: Vec2,
    /// Rechte untere Ecke auf dem Bildschirm
    pub screen_max: Vec2,
    /// Halbe Kantenlänge der Griff-Trefferzone um `screen_max`
    pub handle_radius: f32,
    /// `true` während Verschieben/Skalieren
    pub transforming: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Viewport-Zustand für diesen Frame
    pub viewport: Viewport,
    /// Sichtbare Zellen, unten → oben
    pub cells: Vec<SceneCell>,
    /// Auswahl (falls vorhanden)
    pub selection: Option<SelectionOverlay>,
}

impl RenderScene {
    /// Kantenlänge einer Zelle auf dem Bildschirm.
    pub fn cell_px(&self) -> f32 {
        self.viewport.cell_px()
    }

    /// Gibt zurück, ob es etwas zu zeichnen gibt.
    pub fn has_content(&self) -> bool {
        !self.cells.is_empty()
    }
}
