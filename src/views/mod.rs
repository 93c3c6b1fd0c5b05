// ============================================================================
// VIEWS - Funciones que renderizan DOM a partir del estado (sin lógica)
// ============================================================================

pub mod feedback;
pub mod banner;
pub mod camera;
pub mod cue;
pub mod controls;

pub use feedback::apply_feedback;
pub use banner::show_readiness_banner;
pub use camera::{hide_preview, preview_element, show_preview};
pub use cue::{animate_fold, play_paper_sound};
pub use controls::bind_controls;
