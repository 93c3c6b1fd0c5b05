// ============================================================================
// MEDIA CAPTURE CONTROLLER - Ciclo de vida del stream de cámara
// ============================================================================
// Dueño de la única CaptureSession; nadie más toca el stream.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::errors::{ClientError, Result};
use crate::models::ImagePayload;
use crate::services::traits::{CaptureStream, MediaDevices};
use crate::utils::constants::MOBILE_UA_SIGNATURES;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FacingMode {
    /// Cámara frontal
    User,
    /// Cámara trasera
    Environment,
}

impl FacingMode {
    /// Trasera en móviles (la partitura se fotografía con la lente exterior),
    /// frontal en el resto.
    pub fn for_user_agent(user_agent: &str) -> Self {
        if is_mobile_user_agent(user_agent) {
            FacingMode::Environment
        } else {
            FacingMode::User
        }
    }

    /// Valor de la constraint `facingMode`
    pub fn as_constraint(&self) -> &'static str {
        match self {
            FacingMode::User => "user",
            FacingMode::Environment => "environment",
        }
    }
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_SIGNATURES.iter().any(|sig| ua.contains(sig))
}

/// El stream en vivo, como mucho uno por controlador
#[derive(Debug)]
pub struct CaptureSession<S> {
    stream: S,
    facing: FacingMode,
    active: bool,
}

impl<S: CaptureStream> CaptureSession<S> {
    fn release(mut self) {
        if self.active {
            self.stream.stop();
            self.active = false;
        }
    }
}

pub struct MediaCaptureController<D: MediaDevices> {
    devices: D,
    session: Rc<RefCell<Option<CaptureSession<D::Stream>>>>,
    /// Incrementado por cada `close()`
    generation: Cell<u64>,
}

impl<D: MediaDevices> MediaCaptureController<D> {
    pub fn new(devices: D) -> Self {
        Self {
            devices,
            session: Rc::new(RefCell::new(None)),
            generation: Cell::new(0),
        }
    }

    /// Abre un stream para `facing`, cerrando antes la sesión activa
    pub async fn open(&self, facing: FacingMode) -> Result<()> {
        if self.is_active() {
            log::info!("📷 [CAMERA] Closing previous session before reopening");
            self.close();
        }
        let generation = self.generation.get();

        log::info!("📷 [CAMERA] Requesting stream (facingMode={})", facing.as_constraint());
        let stream = match self.devices.open_stream(facing).await {
            Ok(stream) => stream,
            Err(e) => {
                log::warn!("❌ [CAMERA] Could not open camera: {}", e);
                return Err(match e {
                    ClientError::CameraUnavailable(_) => e,
                    other => ClientError::CameraUnavailable(other.to_string()),
                });
            }
        };

        // Cerrada mientras getUserMedia estaba pendiente
        if self.generation.get() != generation {
            log::info!("📷 [CAMERA] Cámara cerrada antes de abrirse, liberando stream");
            stream.stop();
            return Ok(());
        }

        // Otro open pudo terminar mientras este estaba suspendido
        let stale = self.session.borrow_mut().take();
        if let Some(previous) = stale {
            log::warn!("⚠️ [CAMERA] Concurrent open detected, releasing older session");
            previous.release();
        }

        if let Err(e) = stream.start_preview() {
            stream.stop();
            log::error!("❌ [CAMERA] Preview failed: {}", e);
            return Err(ClientError::CameraUnavailable(e.to_string()));
        }

        *self.session.borrow_mut() = Some(CaptureSession {
            stream,
            facing,
            active: true,
        });
        log::info!("✅ [CAMERA] Session active");
        Ok(())
    }

    /// Para todos los tracks de la sesión activa; sin sesión no hace nada
    pub fn close(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        let session = self.session.borrow_mut().take();
        if let Some(session) = session {
            session.release();
            log::info!("🔌 [CAMERA] Session closed");
        }
    }

    /// Captura el frame actual; la sesión sigue abierta
    pub async fn capture_frame(&self) -> Result<ImagePayload> {
        let stream = self
            .session
            .borrow()
            .as_ref()
            .filter(|s| s.active)
            .map(|s| s.stream.clone())
            .ok_or(ClientError::NoActiveSession)?;

        let payload = stream.render_frame().await?;
        log::info!(
            "📸 [CAMERA] Frame captured: {} ({} bytes)",
            payload.filename(),
            payload.len()
        );
        Ok(payload)
    }

    pub fn is_active(&self) -> bool {
        self.session.borrow().as_ref().map(|s| s.active).unwrap_or(false)
    }

    pub fn facing_mode(&self) -> Option<FacingMode> {
        self.session.borrow().as_ref().map(|s| s.facing)
    }
}

impl<D: MediaDevices> Drop for MediaCaptureController<D> {
    fn drop(&mut self) {
        self.close();
    }
}
