// ============================================================================
// STATE MODULE - Celdas Rc<RefCell> con notificación de cambios
// ============================================================================

pub mod reactivity;
pub mod events;
pub mod app_state;

pub use reactivity::*;
pub use events::*;
pub use app_state::*;
