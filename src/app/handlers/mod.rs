//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod custom_tiles;
pub mod file_io;
pub mod layers;
pub mod painting;
pub mod selection;
pub mod view;
