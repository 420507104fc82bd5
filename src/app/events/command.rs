use crate::core::{CompositeId, LayerId, TileRef};
use crate::shared::TileTesterOptions;
use glam::IVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
/// Positionen sind logische Zellen bzw. Gitterpunkte.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Auswahl-Lebenszyklus ===
    /// Auswahl an einem Gitterpunkt beginnen
    BeginSelection { at: IVec2 },
    /// Endpunkt der aufgezogenen Auswahl setzen
    UpdateSelection { to: IVec2 },
    /// Aufziehen abschließen (leere Auswahl wird verworfen)
    FinalizeSelection,
    /// Laufende Transformation zurücknehmen und Auswahl verwerfen
    CancelSelection,
    /// Verschieben an einer gegriffenen Zelle beginnen
    BeginDrag { cell: IVec2 },
    /// Zeiger-Zelle während des Verschiebens
    UpdateDrag { cell: IVec2 },
    /// Verschieben übernehmen
    CommitDrag,
    /// Skalieren über den Resize-Griff beginnen
    BeginResize,
    /// Gitterpunkt unter dem Griff während des Skalierens
    UpdateResize { corner: IVec2 },
    /// Skalieren übernehmen (gekachelt)
    CommitResize,
    /// Inhalt der Auswahl löschen
    DeleteSelection,

    // === Malen ===
    /// Kachel in den aktiven Layer setzen
    PlaceTile { cell: IVec2, tile: TileRef },
    /// Kachel aus dem aktiven Layer entfernen
    EraseTile { cell: IVec2 },

    // === Layer ===
    /// Layer anlegen
    AddLayer { above_index: Option<usize> },
    /// Layer löschen
    RemoveLayer { id: LayerId },
    /// Layer verschieben
    ReorderLayer { from: usize, to: usize },
    /// Deckkraft setzen
    SetLayerOpacity { id: LayerId, opacity: f32 },
    /// Sichtbarkeit setzen
    SetLayerVisible { id: LayerId, visible: bool },
    /// Layer umbenennen
    RenameLayer { id: LayerId, name: String },
    /// Layer aktivieren
    SetActiveLayer { id: LayerId },

    // === Composite-Kacheln ===
    /// Fertige Auswahl als Composite speichern
    PromoteSelection { name: Option<String> },
    /// Composite an logischer Zelle platzieren
    PlaceComposite { id: CompositeId, at: IVec2 },
    /// Composite löschen
    RemoveComposite { id: CompositeId },

    // === Viewport ===
    /// Pan um Pixel-Delta
    PanViewport { delta: glam::Vec2 },
    /// Zoom mit optionalem Fokus (Bildschirm)
    ZoomViewport {
        factor: f32,
        focus_screen: Option<glam::Vec2>,
    },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Auf Inhalt einpassen
    FitToContent,

    // === Datei & Optionen ===
    /// Sitzung speichern
    SaveSession { path: Option<String> },
    /// Sitzung laden
    LoadSession { path: String },
    /// Optionen übernehmen
    ApplyOptions { options: Box<TileTesterOptions> },
}
