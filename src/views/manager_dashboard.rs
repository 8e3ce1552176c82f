// Status totals and content shortcuts

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::ManagerDashboardViewModel;
use crate::views::introduction_modal::render_introduction_modal;
use crate::views::shared::render_button;

pub fn render_manager_dashboard(state: &AppState, vm: &ManagerDashboardViewModel) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("manager-page").build();

    let cards = ElementBuilder::new("div")?.class("stat-grid").build();
    for total in vm.totals() {
        let value = total.total.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string());
        let card = ElementBuilder::new("div")?
            .class(&format!("stat-card {}", total.status.css_class()))
            .child(ElementBuilder::new("span")?.class("stat-label").text(total.status.label()).build())?
            .child(ElementBuilder::new("strong")?.class("stat-value").text(&value).build())?
            .build();
        append_child(&cards, &card)?;
    }
    append_child(&page, &cards)?;

    let created = vm.introduction.created();
    let section = ElementBuilder::new("section")?.class("introductions").build();
    append_child(&section, &ElementBuilder::new("h2")?.text("Clinic introductions").build())?;
    let form = vm.introduction.form.clone();
    append_child(&section, &render_button("btn btn-primary", "+ New introduction", false, move || form.open())?)?;
    let list = ElementBuilder::new("ul")?.class("introduction-list").build();
    for intro in &created {
        let text = format!("{} · {}", intro.title, intro.status.label());
        append_child(&list, &ElementBuilder::new("li")?.text(&text).build())?;
    }
    append_child(&section, &list)?;
    append_child(&page, &section)?;

    if let Some(modal) = render_introduction_modal(state, &vm.introduction)? {
        append_child(&page, &modal)?;
    }
    Ok(page)
}
