// ============================================================================
// GLOO TRANSPORT - fetch() con gloo-net y timeout abortable
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Uint8Array};
use web_sys::{AbortController, Blob, BlobPropertyBag, FormData};

use crate::errors::{ClientError, Result};
use crate::models::{HttpResponse, ImagePayload};
use crate::services::{with_deadline, HttpTransport};

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl GlooTransport {
    pub fn new() -> Self {
        Self
    }
}

fn transport_error(e: gloo_net::Error) -> ClientError {
    ClientError::TransportFailure(e.to_string())
}

/// Envía `request` y lee el cuerpo; pasados `timeout_seconds` se aborta
/// el fetch con `controller`.
async fn send_with_timeout(
    request: Request,
    controller: &AbortController,
    timeout_seconds: u32,
) -> Result<HttpResponse> {
    let exchange = async move {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.binary().await.map_err(transport_error)?;
        Ok::<_, ClientError>(HttpResponse::new(status, body))
    };
    let deadline = TimeoutFuture::new(timeout_seconds.saturating_mul(1_000));

    with_deadline(exchange, deadline, timeout_seconds, || controller.abort()).await
}

fn payload_blob(payload: &ImagePayload) -> Result<Blob> {
    let parts = Array::of1(&Uint8Array::from(payload.bytes()));
    let options = BlobPropertyBag::new();
    options.set_type(payload.declared_type());
    Ok(Blob::new_with_u8_array_sequence_and_options(&parts, &options)?)
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        payload: &ImagePayload,
        timeout_seconds: u32,
    ) -> Result<HttpResponse> {
        let form = FormData::new()?;
        form.append_with_blob_and_filename(field, &payload_blob(payload)?, payload.filename())?;

        // Sin Content-Type explícito: el navegador pone el boundary del multipart
        let controller = AbortController::new()?;
        let signal = controller.signal();
        let request = Request::post(url)
            .abort_signal(Some(&signal))
            .body(form)
            .map_err(transport_error)?;

        send_with_timeout(request, &controller, timeout_seconds).await
    }

    async fn get(&self, url: &str, timeout_seconds: u32) -> Result<HttpResponse> {
        let controller = AbortController::new()?;
        let signal = controller.signal();
        let request = Request::get(url)
            .abort_signal(Some(&signal))
            .build()
            .map_err(transport_error)?;

        send_with_timeout(request, &controller, timeout_seconds).await
    }
}
