// ============================================================================
// READINESS NOTIFIER - Health check informativo del servicio
// ============================================================================
// Se ejecuta una vez al cargar. Nunca bloquea la UI: si el servicio está
// sano se muestra un banner amable, si no solo queda en la consola.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::models::ReadinessStatus;
use crate::services::api_client::ApiClient;
use crate::services::traits::{FeedbackPresenter, HttpTransport};
use crate::state::ReactiveState;

pub struct ReadinessNotifier<T: HttpTransport, P: FeedbackPresenter> {
    api: ApiClient<T>,
    presenter: Rc<P>,
    status: ReactiveState<ReadinessStatus>,
    checked: Cell<bool>,
}

impl<T: HttpTransport, P: FeedbackPresenter> ReadinessNotifier<T, P> {
    pub fn new(api: ApiClient<T>, presenter: Rc<P>, status: ReactiveState<ReadinessStatus>) -> Self {
        Self {
            api,
            presenter,
            status,
            checked: Cell::new(false),
        }
    }

    pub fn status(&self) -> ReadinessStatus {
        self.status.get()
    }

    /// Un GET a `/health`; las llamadas siguientes devuelven el estado guardado
    pub async fn check_health(&self) -> ReadinessStatus {
        if self.checked.replace(true) {
            return self.status();
        }

        let status = match self.api.health().await {
            Ok(report) if report.is_ready() => {
                log::info!("✅ [HEALTH] Backend is healthy and ready");
                log::info!(
                    "🔎 [HEALTH] java_available={:?} audiveris_available={:?} audiveris_path={:?}",
                    report.java_available,
                    report.audiveris_available,
                    report.audiveris_path
                );
                self.presenter.show_readiness_banner();
                ReadinessStatus::Ready
            }
            Ok(report) => {
                log::info!("ℹ️ [HEALTH] Backend responded but status is {:?}", report.status);
                ReadinessStatus::Unreachable
            }
            Err(e) => {
                log::warn!("⚠️ [HEALTH] Backend health check failed: {}", e);
                log::info!("ℹ️ [HEALTH] Backend might still be starting up...");
                ReadinessStatus::Unreachable
            }
        };

        self.status.set(status);
        status
    }
}
