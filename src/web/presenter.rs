// ============================================================================
// DOM PRESENTER - Cue, descarga, avisos y banner en la página real
// ============================================================================

use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::dom::{append_child, create_element, document, window};
use crate::errors::{ClientError, Result};
use crate::models::ConversionArtifact;
use crate::services::FeedbackPresenter;
use crate::views;

#[derive(Debug, Clone)]
pub struct DomPresenter {
    banner_fade_ms: u32,
}

impl DomPresenter {
    pub fn new(banner_fade_ms: u32) -> Self {
        Self { banner_fade_ms }
    }

    fn save(&self, artifact: &ConversionArtifact) -> std::result::Result<(), wasm_bindgen::JsValue> {
        let parts = Array::of1(&Uint8Array::from(artifact.bytes.as_slice()));
        let options = BlobPropertyBag::new();
        options.set_type(&artifact.mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
        let href = Url::create_object_url_with_blob(&blob)?;

        let anchor = create_element("a")?.dyn_into::<HtmlAnchorElement>()?;
        anchor.set_href(&href);
        anchor.set_download(&artifact.filename);

        let body = document()
            .and_then(|d| d.body())
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("No body element"))?;
        append_child(&body, &anchor)?;
        anchor.click();
        anchor.remove();

        Url::revoke_object_url(&href)
    }
}

impl FeedbackPresenter for DomPresenter {
    fn play_cue(&self) {
        views::play_paper_sound();
        if let Err(e) = views::animate_fold() {
            log::debug!("🎞️ [CUE] Fold animation skipped: {:?}", e);
        }
    }

    fn offer_download(&self, artifact: &ConversionArtifact) -> Result<()> {
        self.save(artifact)
            .map_err(|e| ClientError::Download(crate::utils::js_error_text(&e)))
    }

    fn show_notice(&self, message: &str) {
        match window() {
            Some(w) => {
                if let Err(e) = w.alert_with_message(message) {
                    log::error!("❌ [NOTICE] alert() failed: {:?}", e);
                }
            }
            None => log::error!("❌ [NOTICE] {}", message),
        }
    }

    fn show_readiness_banner(&self) {
        if let Err(e) = views::show_readiness_banner(self.banner_fade_ms) {
            log::warn!("⚠️ [HEALTH] Could not show banner: {:?}", e);
        }
    }
}
