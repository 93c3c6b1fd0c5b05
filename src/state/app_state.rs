// ============================================================================
// APP STATE - Estado observable compartido entre componentes y vistas
// ============================================================================

use crate::models::{ReadinessStatus, SubmissionState};
use crate::state::ReactiveState;

/// Handles de todo el estado observable.
///
/// Clonar es barato y comparte las celdas. Cada celda tiene un solo
/// escritor: `submission` es del workflow de subida, `readiness` del
/// readiness notifier.
#[derive(Clone, Default)]
pub struct AppState {
    pub submission: ReactiveState<SubmissionState>,
    pub readiness: ReactiveState<ReadinessStatus>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
