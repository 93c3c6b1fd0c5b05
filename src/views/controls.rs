// ============================================================================
// CONTROLS - Conecta botones e input de la página con AppEvents
// ============================================================================

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{File, HtmlInputElement};

use crate::dom::{get_element_by_id, on_change, on_click};
use crate::models::{ImagePayload, MediaType};
use crate::state::AppEvent;

const FILE_INPUT_ID: &str = "file-input";
const CAMERA_BUTTON_ID: &str = "camera-btn";
const SHUTTER_ID: &str = "close-camera";
const CANCEL_ID: &str = "cancel-camera";

/// Registra los listeners de la página. Llamar una sola vez.
pub fn bind_controls() -> Result<(), JsValue> {
    let file_input = get_element_by_id(FILE_INPUT_ID)
        .ok_or_else(|| JsValue::from_str("No #file-input on the page"))?;
    on_change(&file_input, |event| {
        let Some(input) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Permite volver a elegir el mismo fichero
        input.set_value("");

        // Tipo fuera de la lista: se rechaza sin leer el fichero
        if MediaType::from_mime(&file.type_()).is_none() {
            crate::dispatch(AppEvent::FileSelected(ImagePayload::unread(file.type_(), file.name())));
            return;
        }

        spawn_local(async move {
            match read_file(&file).await {
                Ok(payload) => crate::dispatch(AppEvent::FileSelected(payload)),
                Err(e) => log::error!("❌ [UPLOAD] Could not read {}: {:?}", file.name(), e),
            }
        });
    })?;

    let camera_button = get_element_by_id(CAMERA_BUTTON_ID)
        .ok_or_else(|| JsValue::from_str("No #camera-btn on the page"))?;
    on_click(&camera_button, |_e| crate::dispatch(AppEvent::CameraRequested))?;

    if let Some(shutter) = get_element_by_id(SHUTTER_ID) {
        on_click(&shutter, |_e| crate::dispatch(AppEvent::ShutterPressed))?;
    } else {
        log::warn!("⚠️ [CAMERA] No #{} button, capture disabled", SHUTTER_ID);
    }

    if let Some(cancel) = get_element_by_id(CANCEL_ID) {
        on_click(&cancel, |_e| crate::dispatch(AppEvent::CameraDismissed))?;
    }

    log::debug!("🔗 [CONTROLS] Page controls bound");
    Ok(())
}

async fn read_file(file: &File) -> Result<ImagePayload, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(ImagePayload::new(bytes, file.type_(), file.name()))
}
