// ============================================================================
// EVENT HANDLING - Helpers para listeners
// ============================================================================
// Los listeners de los controles de la página viven lo mismo que la página:
// se registran una vez desde `bind_controls` y su closure se filtra con
// `forget()`. Los de elementos efímeros (panel, animación) son de un solo
// uso: `once_into_js` libera la closure al dispararse y `once: true` quita
// el listener.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Event, MouseEvent};

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", handler)
}

pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "change", handler)
}

/// Un solo click; la closure se libera al dispararse
pub fn on_click_once<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnOnce(MouseEvent) + 'static,
{
    listen_once(element, "click", Closure::once_into_js(move |e: MouseEvent| handler(e)))
}

pub fn on_animation_end_once<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnOnce(Event) + 'static,
{
    listen_once(element, "animationend", Closure::once_into_js(move |e: Event| handler(e)))
}

fn listen<E, F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn listen_once(element: &Element, event_type: &str, callback: JsValue) -> Result<(), JsValue> {
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    element.add_event_listener_with_callback_and_add_event_listener_options(
        event_type,
        callback.unchecked_ref(),
        &options,
    )
}
