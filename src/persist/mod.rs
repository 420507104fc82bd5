//! Laden und Speichern von Sitzungen (JSON) inklusive Migration.

mod migration;
mod session;

pub use migration::migrate_v1;
pub use session::{
    load_from_file, save_to_file, session_from_json, session_to_json, EntryRecord, LayerRecord,
    LoadedSession, SessionFile, SESSION_VERSION,
};
