// ============================================================================
// SUBMIT CUE - Sonido de papel y animación de plegado (solo presentación)
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

use crate::dom::{
    add_class, append_child, feedback_container, get_element_by_id, get_typed_by_id,
    ignore_rejection, on_animation_end_once, remove_class, ElementBuilder,
};

const SOUND_ID: &str = "paper-sound";
const MAIL_SLOT_ID: &str = "mail-slot";
const GLOW_MS: u32 = 2_200;
/// Sin animación `.fold-pdf` en el CSS nunca llega `animationend`
const FOLD_FALLBACK_MS: u32 = 3_000;

pub fn play_paper_sound() {
    let Some(sound) = get_typed_by_id::<HtmlAudioElement>(SOUND_ID) else {
        return;
    };
    let _ = sound.pause();
    sound.set_current_time(0.0);
    match sound.play() {
        Ok(promise) => ignore_rejection(promise, "paper-sound"),
        Err(e) => log::debug!("🔇 [CUE] play() falló: {:?}", e),
    }
}

/// Hoja plegada que entra en el buzón; el buzón brilla un momento
pub fn animate_fold() -> Result<(), JsValue> {
    let fold = ElementBuilder::new("div")?.class("fold-pdf").build();
    append_child(&feedback_container()?, &fold)?;

    let fold_handle = fold.clone();
    on_animation_end_once(&fold, move |_e| {
        fold_handle.remove();
        if let Some(slot) = get_element_by_id(MAIL_SLOT_ID) {
            let _ = add_class(&slot, "glow");
            Timeout::new(GLOW_MS, move || {
                let _ = remove_class(&slot, "glow");
            })
            .forget();
        }
    })?;

    // remove() sobre un elemento ya quitado no hace nada
    Timeout::new(FOLD_FALLBACK_MS, move || fold.remove()).forget();
    Ok(())
}
