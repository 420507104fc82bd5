//! Handler für Datei-Operationen und Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::TileTesterOptions;

/// Lädt eine Sitzung aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_session(state, path)
}

/// Speichert die Sitzung.
///
/// `None` speichert unter dem aktuell bekannten Pfad.
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    use_cases::file_io::save_session(state, path)
}

/// Übernimmt neue Optionen.
pub fn apply_options(state: &mut AppState, options: TileTesterOptions) {
    use_cases::file_io::apply_options(state, options);
}
