// ============================================================================
// READINESS BANNER - Aviso amable de "servicio listo", nunca un warning
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;

use crate::dom::{feedback_container, get_element_by_id, remove_element_by_id, set_style, ElementBuilder};

pub const BANNER_ID: &str = "demo-mode-info";

/// Inserta el banner arriba del contenedor y lo atenúa (sin quitarlo)
/// tras `fade_ms`.
pub fn show_readiness_banner(fade_ms: u32) -> Result<(), JsValue> {
    remove_element_by_id(BANNER_ID);

    let headline = ElementBuilder::new("strong")?
        .text("🎼 Ready to convert your sheet music!")
        .build();
    let details = ElementBuilder::new("div")?
        .class("readiness-details")
        .text("✅ Backend Connected • 🎵 Converter Ready • 📱 Upload Any Sheet Music")
        .build();
    let banner = ElementBuilder::new("div")?
        .id(BANNER_ID)?
        .class("readiness-banner")
        .child(headline)?
        .child(details)?
        .build();

    let container = feedback_container()?;
    container.insert_before(&banner, container.first_child().as_ref())?;

    Timeout::new(fade_ms, || {
        if let Some(banner) = get_element_by_id(BANNER_ID) {
            let _ = set_style(&banner, "transition", "opacity 0.8s ease-out");
            let _ = set_style(&banner, "opacity", "0.8");
        }
    })
    .forget();

    Ok(())
}
