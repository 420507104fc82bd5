//! Use-Case-Funktionen der Application-Layer-Orchestrierung.

pub mod custom_tiles;
pub mod file_io;
pub mod layers;
pub mod painting;
pub mod selection;
pub mod viewport;
