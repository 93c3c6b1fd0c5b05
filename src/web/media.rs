// ============================================================================
// BROWSER MEDIA - Streams de getUserMedia y captura con canvas
// ============================================================================

use async_trait::async_trait;
use js_sys::{Object, Promise, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, CanvasRenderingContext2d, HtmlCanvasElement, MediaStream, MediaStreamConstraints,
    MediaStreamTrack,
};

use crate::dom::{create_element, window};
use crate::errors::{ClientError, Result};
use crate::models::ImagePayload;
use crate::services::{CaptureStream, FacingMode, MediaDevices};
use crate::utils::constants::{CAMERA_CAPTURE_FILENAME, CAMERA_CAPTURE_MIME};
use crate::utils::js_error_text;
use crate::views;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserMediaDevices;

#[async_trait(?Send)]
impl MediaDevices for BrowserMediaDevices {
    type Stream = BrowserStream;

    async fn open_stream(&self, facing: FacingMode) -> Result<BrowserStream> {
        let unavailable = |e: JsValue| ClientError::CameraUnavailable(js_error_text(&e));

        let devices = window()
            .ok_or_else(|| ClientError::CameraUnavailable("no window".into()))?
            .navigator()
            .media_devices()
            .map_err(unavailable)?;

        let video = Object::new();
        Reflect::set(&video, &"facingMode".into(), &facing.as_constraint().into())
            .map_err(unavailable)?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&video);
        constraints.set_audio(&JsValue::FALSE);

        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(unavailable)?;
        let stream = JsFuture::from(promise)
            .await
            .map_err(unavailable)?
            .dyn_into::<MediaStream>()
            .map_err(|_| ClientError::CameraUnavailable("getUserMedia returned no stream".into()))?;

        Ok(BrowserStream { stream })
    }
}

#[derive(Clone, Debug)]
pub struct BrowserStream {
    stream: MediaStream,
}

#[async_trait(?Send)]
impl CaptureStream for BrowserStream {
    fn start_preview(&self) -> Result<()> {
        views::show_preview(&self.stream).map_err(ClientError::from)
    }

    fn stop(&self) {
        for track in self.stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
        views::hide_preview();
    }

    async fn render_frame(&self) -> Result<ImagePayload> {
        let video = views::preview_element()?;
        let (width, height) = (video.video_width(), video.video_height());
        if width == 0 || height == 0 {
            return Err(ClientError::Dom("camera preview has no frame yet".into()));
        }

        let canvas = create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ClientError::Dom("canvas element unavailable".into()))?;
        canvas.set_width(width);
        canvas.set_height(height);

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| ClientError::Dom("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ClientError::Dom("2d context unavailable".into()))?;
        context.draw_image_with_html_video_element(&video, 0.0, 0.0)?;

        // toBlob usa callback; resolve recibe el Blob (o null)
        let encode = Promise::new(&mut |resolve, reject| {
            if let Err(e) = canvas.to_blob_with_type(&resolve, CAMERA_CAPTURE_MIME) {
                let _ = reject.call1(&JsValue::NULL, &e);
            }
        });
        let blob = JsFuture::from(encode)
            .await?
            .dyn_into::<Blob>()
            .map_err(|_| ClientError::Dom("frame could not be encoded".into()))?;

        let buffer = JsFuture::from(blob.array_buffer()).await?;
        let bytes = Uint8Array::new(&buffer).to_vec();

        Ok(ImagePayload::new(bytes, CAMERA_CAPTURE_MIME, CAMERA_CAPTURE_FILENAME))
    }
}
