use crate::core::{CapturedSet, TileRect};
use glam::IVec2;

/// Phase der Auswahl-Zustandsmaschine.
///
/// `Idle → Selecting → Finalized → {Dragging | Resizing} → Finalized`,
/// `Finalized → Idle` beim Verwerfen.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionPhase {
    /// Keine Auswahl
    #[default]
    Idle,
    /// Auswahlrechteck wird aufgezogen (Gitterpunkte)
    Selecting {
        /// Startpunkt des Aufziehens
        start: IVec2,
        /// Aktueller Endpunkt (exklusiv)
        current: IVec2,
    },
    /// Fertige Auswahl, bereit für Verschieben/Skalieren
    Finalized {
        /// Ausgewählter Bereich
        rect: TileRect,
    },
    /// Inhalt ist angehoben und folgt dem Zeiger
    Dragging {
        /// Angehobener Inhalt samt Ausgangsrechteck
        captured: CapturedSet,
        /// Gegriffene Zelle relativ zur linken oberen Ecke
        grab_offset: IVec2,
        /// Vorschau-Position der linken oberen Ecke
        preview_min: IVec2,
    },
    /// Inhalt ist angehoben, Größe folgt dem Resize-Griff
    Resizing {
        /// Angehobener Inhalt samt Ausgangsrechteck
        captured: CapturedSet,
        /// Vorschau-Größe (mindestens 1×1)
        preview_size: IVec2,
    },
}

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Aktuelle Phase
    pub phase: SelectionPhase,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            phase: SelectionPhase::Idle,
        }
    }

    /// Aktuell angezeigtes Auswahlrechteck inklusive Live-Vorschau.
    pub fn display_rect(&self) -> Option<TileRect> {
        match &self.phase {
            SelectionPhase::Idle => None,
            SelectionPhase::Selecting { start, current } => {
                Some(TileRect::from_corners(*start, *current))
            }
            SelectionPhase::Finalized { rect } => Some(*rect),
            SelectionPhase::Dragging {
                captured,
                preview_min,
                ..
            } => Some(captured.rect.moved_to(*preview_min)),
            SelectionPhase::Resizing {
                captured,
                preview_size,
            } => Some(TileRect::new(captured.rect.min, *preview_size)),
        }
    }

    /// Fertige Auswahl (nur in `Finalized`).
    pub fn finalized_rect(&self) -> Option<TileRect> {
        match &self.phase {
            SelectionPhase::Finalized { rect } => Some(*rect),
            _ => None,
        }
    }

    /// `true` während Verschieben oder Skalieren (Inhalt angehoben).
    pub fn is_transforming(&self) -> bool {
        matches!(
            self.phase,
            SelectionPhase::Dragging { .. } | SelectionPhase::Resizing { .. }
        )
    }

    /// `true`, wenn keine Auswahl existiert.
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, SelectionPhase::Idle)
    }
}
