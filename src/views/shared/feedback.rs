// Toasts, placeholders, pagination and status badges

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::Page;
use crate::state::AppState;
use crate::viewmodels::RemoteData;

pub fn render_toasts(state: &AppState) -> Result<Element, JsValue> {
    let stack = ElementBuilder::new("div")?.class("toast-stack").build();
    for toast in state.toasts.list() {
        let item = ElementBuilder::new("div")?
            .class(&format!("toast {}", toast.kind.css_class()))
            .attr("role", "status")?
            .text(&toast.message)
            .build();
        let toasts = state.toasts.clone();
        let id = toast.id;
        on_click(&item, move |_| toasts.dismiss(id))?;
        append_child(&stack, &item)?;
    }
    Ok(stack)
}

pub fn render_notice(class: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?.class(class).text(text).build())
}

/// Loading / error / empty block for a list, `None` when items should render
pub fn render_list_status<T>(data: &RemoteData<T>, is_empty: impl Fn(&T) -> bool, empty_text: &str) -> Result<Option<Element>, JsValue> {
    let block = match data {
        RemoteData::NotAsked | RemoteData::Loading => render_notice("list-loading", "Loading...")?,
        RemoteData::Failed(message) => render_notice("list-error", message)?,
        RemoteData::Loaded(value) if is_empty(value) => render_notice("list-empty", empty_text)?,
        RemoteData::Loaded(_) => return Ok(None),
    };
    Ok(Some(block))
}

pub fn render_pagination<T>(page: &Page<T>, on_page: Rc<dyn Fn(u32)>) -> Result<Element, JsValue> {
    let bar = ElementBuilder::new("div")?.class("pagination").build();

    let prev = ElementBuilder::new("button")?
        .class("btn btn-page")
        .flag("disabled", !page.has_previous())?
        .text("‹ Previous")
        .build();
    let target = page.page.saturating_sub(1);
    let go = on_page.clone();
    on_click(&prev, move |_| go(target))?;

    let info = ElementBuilder::new("span")?
        .class("page-info")
        .text(&format!("Page {} of {} · {} total", page.page, page.total_pages.max(1), page.total_items))
        .build();

    let next = ElementBuilder::new("button")?
        .class("btn btn-page")
        .flag("disabled", !page.has_next())?
        .text("Next ›")
        .build();
    let target = page.page + 1;
    on_click(&next, move |_| on_page(target))?;

    append_child(&bar, &prev)?;
    append_child(&bar, &info)?;
    append_child(&bar, &next)?;
    Ok(bar)
}

pub fn render_badge(class: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("span")?.class(&format!("badge {}", class)).text(text).build())
}

pub fn render_button(class: &str, text: &str, disabled: bool, on_press: impl Fn() + 'static) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class(class)
        .attr("type", "button")?
        .flag("disabled", disabled)?
        .text(text)
        .build();
    on_click(&button, move |_| on_press())?;
    Ok(button)
}
