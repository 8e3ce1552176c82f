use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;
use crate::views::layout::render_link;

fn render_error_page(state: &AppState, code: &str, title: &str, text: &str) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?
        .class("error-page")
        .child(ElementBuilder::new("p")?.class("error-code").text(code).build())?
        .child(ElementBuilder::new("h1")?.text(title).build())?
        .child(ElementBuilder::new("p")?.text(text).build())?
        .build();
    let home = match state.session.role() {
        Some(role) if state.session.is_authenticated() => Route::home_for(role),
        _ => Route::Home,
    };
    append_child(&page, &render_link(state, "btn btn-primary", "Go back", &home)?)?;
    Ok(page)
}

pub fn render_unauthorized(state: &AppState) -> Result<Element, JsValue> {
    render_error_page(state, "403", "Access denied", "Your account does not have access to this page.")
}

pub fn render_not_found(state: &AppState, path: &str) -> Result<Element, JsValue> {
    render_error_page(state, "404", "Page not found", &format!("Nothing lives at {}.", path))
}
