// ============================================================================
// EVENTS - Eventos tipados de usuario y de ciclo de vida
// ============================================================================
// Cada callback del DOM se convierte en uno de estos y va a `App::run`;
// cada uno corresponde a una única transición.
// ============================================================================

use crate::errors::Result;
use crate::models::{ConversionArtifact, ImagePayload};

#[derive(Debug)]
pub enum AppEvent {
    /// Página cargada: lanzar el health check
    PageLoaded,
    /// Fichero elegido (o frame capturado de la cámara)
    FileSelected(ImagePayload),
    /// Botón de cámara pulsado
    CameraRequested,
    /// Captura pulsada con la vista previa abierta
    ShutterPressed,
    /// Vista previa cerrada sin capturar
    CameraDismissed,
    /// Terminó el intento de red del envío en curso
    SubmissionResolved(Result<ConversionArtifact>),
    /// El usuario cerró el panel de éxito/error
    FeedbackDismissed,
}

impl AppEvent {
    /// Nombre corto para los logs
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::PageLoaded => "PageLoaded",
            AppEvent::FileSelected(_) => "FileSelected",
            AppEvent::CameraRequested => "CameraRequested",
            AppEvent::ShutterPressed => "ShutterPressed",
            AppEvent::CameraDismissed => "CameraDismissed",
            AppEvent::SubmissionResolved(_) => "SubmissionResolved",
            AppEvent::FeedbackDismissed => "FeedbackDismissed",
        }
    }
}
