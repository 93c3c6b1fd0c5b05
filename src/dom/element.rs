// ============================================================================
// ELEMENT HELPERS - Envoltorios finos sobre búsquedas y cambios de web_sys
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Búsqueda tipada, `None` si no existe o es de otro tipo
pub fn get_typed_by_id<T: JsCast>(id: &str) -> Option<T> {
    get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Eliminar el elemento con `id` si existe
pub fn remove_element_by_id(id: &str) {
    if let Some(element) = get_element_by_id(id) {
        element.remove();
    }
}

/// `style.<property>` en línea sobre un elemento
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .set_property(property, value)
}

/// `display` del elemento con `id`; si no existe no hace nada
pub fn set_display_by_id(id: &str, display: &str) {
    if let Some(element) = get_element_by_id(id) {
        if let Err(e) = set_style(&element, "display", display) {
            log::warn!("⚠️ [DOM] Could not set display on #{}: {:?}", id, e);
        }
    }
}

pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

pub fn query_selector(selector: &str) -> Result<Option<Element>, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector(selector)
}

/// Contenedor de los elementos de feedback (`.container`, si no `<body>`)
pub fn feedback_container() -> Result<Element, JsValue> {
    if let Some(container) = query_selector(".container")? {
        return Ok(container);
    }
    document()
        .and_then(|doc| doc.body())
        .map(Element::from)
        .ok_or_else(|| JsValue::from_str("No container or body element"))
}

/// Consume una promesa cuyo rechazo no importa (p. ej. `play()` bloqueado
/// por la política de autoplay), para que no quede como rechazo sin manejar
pub fn ignore_rejection(promise: js_sys::Promise, what: &'static str) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
            log::debug!("🔇 [DOM] {} rechazado: {:?}", what, e);
        }
    });
}
