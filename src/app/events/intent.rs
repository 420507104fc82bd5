use crate::core::{CompositeId, LayerId, TileRef};
use crate::shared::TileTesterOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Positionen sind Bildschirmkoordinaten in Pixeln.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // === Zeiger ===
    /// Maustaste gedrückt (`select_modifier` = Auswahl-Modifier gehalten)
    PointerPressed {
        screen_pos: glam::Vec2,
        select_modifier: bool,
    },
    /// Zeiger mit gedrückter Taste bewegt
    PointerDragged { screen_pos: glam::Vec2 },
    /// Maustaste losgelassen
    PointerReleased { screen_pos: glam::Vec2 },

    // === Auswahl ===
    /// Auswahl verwerfen (Escape); bricht eine laufende Transformation ab
    SelectionDismissed,
    /// Inhalt der Auswahl löschen
    DeleteSelectionRequested,

    // === Malen ===
    /// Kachel an Zeigerposition in den aktiven Layer setzen
    PaintRequested { screen_pos: glam::Vec2, tile: TileRef },
    /// Kachel an Zeigerposition aus dem aktiven Layer entfernen
    EraseRequested { screen_pos: glam::Vec2 },

    // === Layer ===
    /// Neuen Layer anlegen (Default: über dem aktiven)
    AddLayerRequested { above_index: Option<usize> },
    /// Layer löschen
    RemoveLayerRequested { id: LayerId },
    /// Layer im Stapel verschieben
    ReorderLayerRequested { from: usize, to: usize },
    /// Deckkraft eines Layers ändern
    LayerOpacityChanged { id: LayerId, opacity: f32 },
    /// Sichtbarkeit eines Layers ändern
    LayerVisibilityChanged { id: LayerId, visible: bool },
    /// Layer umbenennen
    RenameLayerRequested { id: LayerId, name: String },
    /// Layer aktivieren
    ActiveLayerSelected { id: LayerId },

    // === Composite-Kacheln ===
    /// Fertige Auswahl als Composite-Kachel speichern
    PromoteSelectionRequested { name: Option<String> },
    /// Composite an Zeigerposition platzieren
    PlaceCompositeRequested {
        id: CompositeId,
        screen_pos: glam::Vec2,
    },
    /// Composite aus der Registry löschen
    RemoveCompositeRequested { id: CompositeId },

    // === Viewport ===
    /// Viewport um Pixel-Delta verschieben
    CameraPan { delta: glam::Vec2 },
    /// Zoomen (optional auf einen Bildschirm-Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_screen: Option<glam::Vec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Ansicht auf den sichtbaren Inhalt einpassen
    FitToContentRequested,

    // === Datei & Optionen ===
    /// Sitzung speichern (ohne Pfad: aktueller Pfad)
    SaveRequested { path: Option<String> },
    /// Sitzung laden
    LoadRequested { path: String },
    /// Optionen übernehmen
    OptionsChanged { options: Box<TileTesterOptions> },
}
