// ============================================================================
// APP - Dispatcher de eventos: cámara, workflow de subida y health check
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::{
    ApiClient, FacingMode, FeedbackPresenter, HttpTransport, MediaCaptureController, MediaDevices,
    ReadinessNotifier, UploadWorkflow,
};
use crate::state::{AppEvent, AppState};

pub struct App<D, T, P>
where
    D: MediaDevices,
    T: HttpTransport,
    P: FeedbackPresenter,
{
    state: AppState,
    camera: MediaCaptureController<D>,
    workflow: UploadWorkflow<T, P>,
    readiness: ReadinessNotifier<T, P>,
    presenter: Rc<P>,
    facing: FacingMode,
}

impl<D, T, P> App<D, T, P>
where
    D: MediaDevices,
    T: HttpTransport + Clone,
    P: FeedbackPresenter,
{
    /// Solo falla si la URL del servicio no sirve
    pub fn new(
        config: &AppConfig,
        devices: D,
        transport: T,
        presenter: Rc<P>,
        user_agent: &str,
    ) -> Result<Self> {
        let endpoints = config.endpoints()?;
        let timeout = config.request_timeout_seconds;
        let state = AppState::new();
        let facing = FacingMode::for_user_agent(user_agent);

        log::info!(
            "🔧 [APP] Service: {} (timeout {}s, camera {})",
            endpoints.base(),
            timeout,
            facing.as_constraint()
        );

        let workflow = UploadWorkflow::new(
            ApiClient::new(endpoints.clone(), transport.clone(), timeout),
            presenter.clone(),
            state.submission.clone(),
        );
        let readiness = ReadinessNotifier::new(
            ApiClient::new(endpoints, transport, timeout),
            presenter.clone(),
            state.readiness.clone(),
        );

        Ok(Self {
            state,
            camera: MediaCaptureController::new(devices),
            workflow,
            readiness,
            presenter,
            facing,
        })
    }
}

impl<D, T, P> App<D, T, P>
where
    D: MediaDevices,
    T: HttpTransport,
    P: FeedbackPresenter,
{
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn camera(&self) -> &MediaCaptureController<D> {
        &self.camera
    }

    pub fn workflow(&self) -> &UploadWorkflow<T, P> {
        &self.workflow
    }

    pub fn readiness(&self) -> &ReadinessNotifier<T, P> {
        &self.readiness
    }

    pub fn facing_mode(&self) -> FacingMode {
        self.facing
    }

    /// Aplica un evento y devuelve el siguiente, si lo hay
    pub async fn handle(&self, event: AppEvent) -> Option<AppEvent> {
        log::debug!("📨 [APP] {}", event.name());

        match event {
            AppEvent::PageLoaded => {
                self.readiness.check_health().await;
                None
            }
            AppEvent::FileSelected(payload) => match self.workflow.begin(payload) {
                Ok(pending) => {
                    let result = self.workflow.send(&pending).await;
                    Some(AppEvent::SubmissionResolved(result))
                }
                Err(e) => {
                    self.presenter.show_notice(&e.user_message());
                    None
                }
            },
            AppEvent::CameraRequested => {
                if let Err(e) = self.camera.open(self.facing).await {
                    self.presenter.show_notice(&e.user_message());
                }
                None
            }
            AppEvent::ShutterPressed => {
                let captured = self.camera.capture_frame().await;
                // Tras capturar (o fallar) la cámara se apaga siempre
                self.camera.close();
                match captured {
                    Ok(frame) => Some(AppEvent::FileSelected(frame)),
                    Err(e) => {
                        self.presenter.show_notice(&e.user_message());
                        None
                    }
                }
            }
            AppEvent::CameraDismissed => {
                self.camera.close();
                None
            }
            AppEvent::SubmissionResolved(result) => {
                self.workflow.resolve(result);
                None
            }
            AppEvent::FeedbackDismissed => {
                self.workflow.dismiss();
                None
            }
        }
    }

    /// Despacha `event` y todos los eventos que encadena
    pub async fn run(&self, event: AppEvent) {
        let mut next = Some(event);
        while let Some(event) = next {
            next = self.handle(event).await;
        }
    }
}
