use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};

pub fn render_modal(title: &str, body: Element, on_close: Rc<dyn Fn()>) -> Result<Element, JsValue> {
    let backdrop = ElementBuilder::new("div")?.class("modal-backdrop").build();
    let dialog = ElementBuilder::new("div")?
        .class("modal")
        .attr("role", "dialog")?
        .build();

    let header = ElementBuilder::new("div")?.class("modal-header").build();
    let heading = ElementBuilder::new("h3")?.text(title).build();
    let close_btn = ElementBuilder::new("button")?
        .class("btn-close")
        .attr("type", "button")?
        .attr("aria-label", "Close")?
        .text("✕")
        .build();
    on_click(&close_btn, move |_| on_close())?;

    append_child(&header, &heading)?;
    append_child(&header, &close_btn)?;
    append_child(&dialog, &header)?;

    let content = ElementBuilder::new("div")?.class("modal-body").child(body)?.build();
    append_child(&dialog, &content)?;
    append_child(&backdrop, &dialog)?;
    Ok(backdrop)
}
