//! Application State: zentrale Datenhaltung einer Sitzung.
//!
//! Der State wird explizit erzeugt und an Controller, Handler und Use-Cases
//! durchgereicht; es gibt keinen globalen Zustand.

mod app_state;
mod selection;
mod view;

pub use app_state::AppState;
pub use selection::{SelectionPhase, SelectionState};
pub use view::{UiState, ViewState};
