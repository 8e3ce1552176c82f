use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::PatientRequestViewModel;
use crate::views::shared::{render_list_status, render_pagination};

pub fn render_patient_requests(state: &AppState, vm: &PatientRequestViewModel) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("patient-requests-page").build();
    let data = vm.requests.get();
    if let Some(status) = render_list_status(&data, |p| p.items.is_empty(), "No consultation requests yet.")? {
        append_child(&page, &status)?;
        return Ok(page);
    }
    let requests = match data.value() {
        Some(requests) => requests.clone(),
        None => return Ok(page),
    };

    let table = ElementBuilder::new("table")?.class("data-table").build();
    let head = ElementBuilder::new("tr")?.build();
    for title in ["Name", "Phone", "Email", "Received"] {
        append_child(&head, &ElementBuilder::new("th")?.text(title).build())?;
    }
    append_child(&table, &ElementBuilder::new("thead")?.child(head)?.build())?;
    let body = ElementBuilder::new("tbody")?.build();
    for request in &requests.items {
        let row = ElementBuilder::new("tr")?
            .child(ElementBuilder::new("td")?.text(&request.name).build())?
            .child(ElementBuilder::new("td")?.text(&request.phone).build())?
            .child(ElementBuilder::new("td")?.text(request.email.as_deref().unwrap_or("-")).build())?
            .child(ElementBuilder::new("td")?.text(request.created_at.as_deref().unwrap_or("-")).build())?
            .build();
        append_child(&body, &row)?;
    }
    append_child(&table, &body)?;
    append_child(&page, &table)?;

    let (state, vm) = (state.clone(), vm.clone());
    let on_page: Rc<dyn Fn(u32)> = Rc::new(move |target| {
        let vm = vm.clone();
        state.spawn_page(async move {
            vm.go_to_page(target).await;
        });
    });
    append_child(&page, &render_pagination(&requests, on_page)?)?;
    Ok(page)
}
