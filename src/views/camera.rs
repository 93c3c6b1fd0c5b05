// ============================================================================
// CAMERA VIEW - Vista previa y visibilidad del botón de captura
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{HtmlVideoElement, MediaStream};

use crate::dom::{get_typed_by_id, ignore_rejection, set_display_by_id};

pub const PREVIEW_ID: &str = "camera-preview";
pub const SHUTTER_ID: &str = "close-camera";
pub const CANCEL_ID: &str = "cancel-camera";

pub fn preview_element() -> Result<HtmlVideoElement, JsValue> {
    get_typed_by_id::<HtmlVideoElement>(PREVIEW_ID)
        .ok_or_else(|| JsValue::from_str("No <video id=\"camera-preview\"> on the page"))
}

pub fn show_preview(stream: &MediaStream) -> Result<(), JsValue> {
    let video = preview_element()?;
    video.set_src_object(Some(stream));
    // La política de autoplay puede negarse; el usuario puede darle a play
    match video.play() {
        Ok(promise) => ignore_rejection(promise, "camera-preview"),
        Err(e) => log::warn!("⚠️ [CAMERA] Autoplay de la vista previa rechazado: {:?}", e),
    }

    set_display_by_id(PREVIEW_ID, "block");
    set_display_by_id(SHUTTER_ID, "inline-block");
    set_display_by_id(CANCEL_ID, "inline-block");
    Ok(())
}

pub fn hide_preview() {
    if let Ok(video) = preview_element() {
        video.set_src_object(None);
    }
    set_display_by_id(PREVIEW_ID, "none");
    set_display_by_id(SHUTTER_ID, "none");
    set_display_by_id(CANCEL_ID, "none");
}
