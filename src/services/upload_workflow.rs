// ============================================================================
// UPLOAD WORKFLOW - Validación, máquina de estados del feedback y envío
// ============================================================================
// Idle → (validate) → Processing → (network result) → Succeeded | Failed → Idle
//
// El indicador se pinta a partir de `SubmissionState::Processing`: es
// visible exactamente mientras hay un envío en curso.
// ============================================================================

use std::rc::Rc;

use crate::errors::{ClientError, Result};
use crate::models::{ConversionArtifact, ImagePayload, SubmissionState};
use crate::services::api_client::ApiClient;
use crate::services::traits::{FeedbackPresenter, HttpTransport};
use crate::state::ReactiveState;
use crate::utils::constants::SUCCESS_MESSAGE;

/// Payload validado cuyo envío ya entró en Processing
#[derive(Debug)]
pub struct PendingSubmission {
    payload: ImagePayload,
}

pub struct UploadWorkflow<T: HttpTransport, P: FeedbackPresenter> {
    api: ApiClient<T>,
    presenter: Rc<P>,
    state: ReactiveState<SubmissionState>,
}

impl<T: HttpTransport, P: FeedbackPresenter> UploadWorkflow<T, P> {
    pub fn new(api: ApiClient<T>, presenter: Rc<P>, state: ReactiveState<SubmissionState>) -> Self {
        Self { api, presenter, state }
    }

    /// Handle compartido del estado (las vistas se suscriben a él)
    pub fn state(&self) -> ReactiveState<SubmissionState> {
        self.state.clone()
    }

    pub fn current(&self) -> SubmissionState {
        self.state.get()
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.with(SubmissionState::is_processing)
    }

    /// Valida el payload y entra en Processing.
    ///
    /// Los rechazos (`InvalidFormat`, `SubmissionInFlight`) no tocan el
    /// estado ni hacen ninguna petición.
    pub fn begin(&self, payload: ImagePayload) -> Result<PendingSubmission> {
        let media_type = payload.media_type().map_err(|e| {
            log::warn!("🚫 [UPLOAD] Rejected {:?}: {}", payload, e);
            e
        })?;

        if self.is_in_flight() {
            log::warn!("⏳ [UPLOAD] Submission already in flight, rejecting {}", payload.filename());
            return Err(ClientError::SubmissionInFlight);
        }

        if self.state.with(SubmissionState::is_terminal) {
            self.state.set(SubmissionState::Idle);
        }

        self.presenter.play_cue();
        self.state.set(SubmissionState::Processing);
        log::info!("🎵 [UPLOAD] Processing {} as {}", payload.filename(), media_type);

        Ok(PendingSubmission { payload })
    }

    /// El único intento de red de un envío pendiente
    pub async fn send(&self, pending: &PendingSubmission) -> Result<ConversionArtifact> {
        self.api.convert(&pending.payload).await
    }

    /// Sale de Processing con el resultado de `send`.
    ///
    /// Si no hay nada en curso el resultado se ignora.
    pub fn resolve(&self, result: Result<ConversionArtifact>) -> SubmissionState {
        if !self.is_in_flight() {
            log::warn!("⚠️ [UPLOAD] Resolution without a submission in flight, ignoring");
            return self.current();
        }

        match result {
            Ok(artifact) => {
                // El indicador desaparece antes de ofrecer la descarga
                self.state.set(SubmissionState::Succeeded {
                    message: SUCCESS_MESSAGE.to_string(),
                });

                if let Err(e) = self.presenter.offer_download(&artifact) {
                    log::error!("❌ [UPLOAD] Could not offer download: {}", e);
                    let reason = match e {
                        ClientError::Download(reason) => reason,
                        other => other.to_string(),
                    };
                    self.state.set(SubmissionState::Failed(ClientError::Download(reason)));
                } else {
                    log::info!("💾 [UPLOAD] Download offered: {}", artifact.filename);
                }
            }
            Err(e) => {
                log::warn!("❌ [UPLOAD] Submission failed: {}", e);
                self.state.set(SubmissionState::Failed(e));
            }
        }

        self.current()
    }

    /// Cierra el panel de éxito/error y vuelve a Idle
    pub fn dismiss(&self) {
        if self.state.with(SubmissionState::is_terminal) {
            self.state.set(SubmissionState::Idle);
        }
    }
}
