// ============================================================================
// FEEDBACK VIEW - Indicador de procesamiento y paneles de éxito/error
// ============================================================================
// Proyección pura de SubmissionState: se repinta en cada cambio.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, feedback_container, remove_element_by_id, ElementBuilder};
use crate::models::SubmissionState;
use crate::state::AppEvent;

pub const INDICATOR_ID: &str = "processing-indicator";
pub const PANEL_ID: &str = "feedback-panel";

/// Renderizar feedback: indicador en Processing, panel en estados finales
pub fn render_feedback(state: &SubmissionState) -> Result<Option<Element>, JsValue> {
    match state {
        SubmissionState::Idle => Ok(None),
        SubmissionState::Processing => render_indicator().map(Some),
        SubmissionState::Succeeded { .. } | SubmissionState::Failed(_) => {
            let is_error = matches!(state, SubmissionState::Failed(_));
            let message = state.panel_message().unwrap_or_default();
            render_panel(&message, is_error).map(Some)
        }
    }
}

/// Sustituir el feedback de la página por el que toca según `state`
pub fn apply_feedback(state: &SubmissionState) -> Result<(), JsValue> {
    remove_element_by_id(INDICATOR_ID);
    remove_element_by_id(PANEL_ID);

    if let Some(element) = render_feedback(state)? {
        append_child(&feedback_container()?, &element)?;
    }
    Ok(())
}

fn render_indicator() -> Result<Element, JsValue> {
    let title = ElementBuilder::new("div")?
        .class("processing-title")
        .text("🎵 Converting sheet music...")
        .build();
    let subtitle = ElementBuilder::new("div")?
        .class("processing-subtitle")
        .text("This may take a moment")
        .build();
    let spinner = ElementBuilder::new("div")?.class("processing-spinner").build();

    Ok(ElementBuilder::new("div")?
        .id(INDICATOR_ID)?
        .class("processing-indicator")
        .attr("role", "status")?
        .children([title, subtitle, spinner])?
        .build())
}

fn render_panel(message: &str, is_error: bool) -> Result<Element, JsValue> {
    let class = if is_error {
        "feedback-panel feedback-panel--error"
    } else {
        "feedback-panel feedback-panel--success"
    };

    // white-space: pre-line en el CSS conserva la línea en blanco del tip
    let text = ElementBuilder::new("p")?
        .class("feedback-message")
        .text(message)
        .build();

    let dismiss = ElementBuilder::new("button")?
        .class("feedback-dismiss")
        .attr("type", "button")?
        .text("OK")
        .on_click_once(|_e| crate::dispatch(AppEvent::FeedbackDismissed))?
        .build();

    Ok(ElementBuilder::new("div")?
        .id(PANEL_ID)?
        .class(class)
        .attr("role", if is_error { "alert" } else { "status" })?
        .child(text)?
        .child(dismiss)?
        .build())
}
