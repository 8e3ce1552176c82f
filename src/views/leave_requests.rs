use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, class_if, on_click, ElementBuilder};
use crate::models::LeaveStatus;
use crate::state::AppState;
use crate::viewmodels::leave_request_viewmodel::{filter_label, LEAVE_FILTERS};
use crate::viewmodels::LeaveRequestViewModel;
use crate::views::shared::{render_badge, render_list_status};

fn status_class(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "status-pending",
        LeaveStatus::Approved => "status-confirmed",
        LeaveStatus::Rejected => "status-cancelled",
    }
}

pub fn render_leave_requests(state: &AppState, vm: &LeaveRequestViewModel) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("leave-page").build();

    let chips = ElementBuilder::new("div")?.class("status-tabs").build();
    for filter in LEAVE_FILTERS {
        let chip = ElementBuilder::new("button")?
            .class(&class_if("tab", "active", filter == vm.filter()))
            .attr("type", "button")?
            .text(filter_label(filter))
            .build();
        let (state, vm) = (state.clone(), vm.clone());
        on_click(&chip, move |_| {
            let vm = vm.clone();
            state.spawn_page(async move {
                vm.set_filter(filter).await;
            });
        })?;
        append_child(&chips, &chip)?;
    }
    append_child(&page, &chips)?;

    let data = vm.requests.get();
    if let Some(status) = render_list_status(&data, |list| list.is_empty(), "No leave requests.")? {
        append_child(&page, &status)?;
        return Ok(page);
    }

    let table = ElementBuilder::new("table")?.class("data-table").build();
    let head = ElementBuilder::new("tr")?.build();
    for title in ["Doctor", "Period", "Reason", "Status"] {
        append_child(&head, &ElementBuilder::new("th")?.text(title).build())?;
    }
    append_child(&table, &ElementBuilder::new("thead")?.child(head)?.build())?;
    let body = ElementBuilder::new("tbody")?.build();
    for leave in data.value().map(Vec::as_slice).unwrap_or_default() {
        let row = ElementBuilder::new("tr")?
            .child(ElementBuilder::new("td")?.text(&leave.doctor_name).build())?
            .child(ElementBuilder::new("td")?.text(&leave.period()).build())?
            .child(ElementBuilder::new("td")?.text(leave.reason.as_deref().unwrap_or("-")).build())?
            .child(ElementBuilder::new("td")?.child(render_badge(status_class(leave.status), leave.status.label())?)?.build())?
            .build();
        append_child(&body, &row)?;
    }
    append_child(&table, &body)?;
    append_child(&page, &table)?;
    Ok(page)
}
