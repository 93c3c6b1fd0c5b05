// ============================================================================
// PLATFORM SEAMS - Traits de los adaptadores del navegador y de los dobles de test
// ============================================================================

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{ConversionArtifact, HttpResponse, ImagePayload};
use crate::services::media_capture::FacingMode;

/// Origen de streams de cámara (`navigator.mediaDevices` en la web)
#[async_trait(?Send)]
pub trait MediaDevices {
    type Stream: CaptureStream;

    /// Falla con `CameraUnavailable` si se deniega el permiso o no hay dispositivo
    async fn open_stream(&self, facing: FacingMode) -> Result<Self::Stream>;
}

/// Handle de un stream de cámara abierto
#[async_trait(?Send)]
pub trait CaptureStream: Clone {
    /// Conectar el stream a la vista previa
    fn start_preview(&self) -> Result<()>;

    /// Parar todos los tracks y soltar la vista previa
    fn stop(&self);

    /// Codificar el frame actual como imagen
    async fn render_frame(&self) -> Result<ImagePayload>;
}

/// Acceso HTTP al servicio de conversión.
///
/// Devuelve `TransportFailure` si no llegó respuesta y `Timeout` si pasó
/// `timeout_seconds` antes; cualquier status HTTP, incluso de error, es
/// un `Ok(HttpResponse)`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        payload: &ImagePayload,
        timeout_seconds: u32,
    ) -> Result<HttpResponse>;

    async fn get(&self, url: &str, timeout_seconds: u32) -> Result<HttpResponse>;
}

/// Efectos del workflow que no son proyección de su estado
pub trait FeedbackPresenter {
    /// Sonido y animación al empezar un envío
    fn play_cue(&self);

    /// Entregar el MIDI al navegador como descarga
    fn offer_download(&self, artifact: &ConversionArtifact) -> Result<()>;

    /// Aviso bloqueante (problemas de cámara, entrada rechazada)
    fn show_notice(&self, message: &str);

    /// Banner no bloqueante de "servicio listo"
    fn show_readiness_banner(&self);
}
