// ============================================================================
// API CLIENT - Solo HTTP, sin estado de UI
// ============================================================================
// Conoce los dos endpoints del servicio de conversión y la forma de sus
// respuestas. Lo que mueve los bytes está detrás de `HttpTransport`.
// ============================================================================

use crate::config::ServiceEndpoints;
use crate::errors::{ClientError, Result};
use crate::models::{ConversionArtifact, ConversionErrorBody, HealthReport, ImagePayload};
use crate::services::traits::HttpTransport;
use crate::utils::constants::UPLOAD_FIELD_NAME;

pub struct ApiClient<T: HttpTransport> {
    endpoints: ServiceEndpoints,
    transport: T,
    timeout_seconds: u32,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(endpoints: ServiceEndpoints, transport: T, timeout_seconds: u32) -> Self {
        Self {
            endpoints,
            transport,
            timeout_seconds: timeout_seconds.max(1),
        }
    }

    /// Un único POST de la imagen a `/convert`, sin reintentos
    pub async fn convert(&self, payload: &ImagePayload) -> Result<ConversionArtifact> {
        let url = self.endpoints.convert_url();
        log::info!(
            "📤 [UPLOAD] POST {} ({}, {} bytes)",
            url,
            payload.declared_type(),
            payload.len()
        );

        let response = self
            .transport
            .post_multipart(url, UPLOAD_FIELD_NAME, payload, self.timeout_seconds)
            .await?;

        if response.ok() {
            log::info!("✅ [UPLOAD] Artifact received ({} bytes)", response.body.len());
            return Ok(ConversionArtifact::midi(response.body));
        }

        let message = ConversionErrorBody::message_from(&response.body);
        log::warn!("❌ [UPLOAD] HTTP {}: {}", response.status, message);
        Err(ClientError::ConversionRejected { message })
    }

    /// GET `/health`
    pub async fn health(&self) -> Result<HealthReport> {
        let url = self.endpoints.health_url();
        let response = self.transport.get(url, self.timeout_seconds).await?;

        if !response.ok() {
            return Err(ClientError::UnexpectedResponse(format!(
                "HTTP {} from {}",
                response.status, url
            )));
        }

        serde_json::from_slice::<HealthReport>(&response.body)
            .map_err(|e| ClientError::UnexpectedResponse(format!("Parse error: {}", e)))
    }
}
