// ============================================================================
// EVENT HANDLING
// ============================================================================
// Listeners on rendered elements are `forget()`-ed: the whole tree is thrown
// away on the next render and the browser drops them with it. Listeners on
// `window` must be registered once at startup.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};

fn listen<E, F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    E: JsCast + wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Current value of the input, select or textarea that fired `event`
pub fn event_value(event: &Event) -> String {
    let target = match event.target() {
        Some(target) => target,
        None => return String::new(),
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", handler)
}

/// Fires on every keystroke with the field's value
pub fn on_input<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    listen(element, "input", move |event: Event| handler(event_value(&event)))
}

/// Fires when a select or date input commits a new value
pub fn on_change<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    listen(element, "change", move |event: Event| handler(event_value(&event)))
}

/// Form submit with the browser's navigation suppressed
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(form, "submit", move |event: Event| {
        event.prevent_default();
        handler();
    })
}

/// First file picked in an `<input type="file">`
pub fn on_file_change<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(Option<File>) + 'static,
{
    listen(element, "change", move |event: Event| {
        let file = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        handler(file);
    })
}
