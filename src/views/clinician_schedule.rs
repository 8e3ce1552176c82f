// ============================================================================
// CLINICIAN SCHEDULE VIEW - Day agenda for doctors and nurses
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_change, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::scheduling_viewmodel::parse_date_input;
use crate::viewmodels::ClinicianScheduleViewModel;
use crate::views::shared::{render_badge, render_button, render_list_status};

pub fn render_clinician_schedule(state: &AppState, vm: &ClinicianScheduleViewModel) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("schedule-page").build();

    let nav = ElementBuilder::new("div")?.class("day-nav").build();
    for (label, days) in [("‹", -1), ("›", 1)] {
        let (state, vm) = (state.clone(), vm.clone());
        let button = render_button("btn btn-outline", label, false, move || {
            let vm = vm.clone();
            state.spawn_page(async move {
                vm.shift(days).await;
            });
        })?;
        append_child(&nav, &button)?;
    }
    let picker = ElementBuilder::new("input")?
        .class("form-input date-input")
        .attr("type", "date")?
        .attr("value", &vm.date().format("%Y-%m-%d").to_string())?
        .build();
    {
        let (state, vm) = (state.clone(), vm.clone());
        on_change(&picker, move |raw| {
            if let Some(date) = parse_date_input(&raw) {
                let vm = vm.clone();
                state.spawn_page(async move {
                    vm.set_date(date).await;
                });
            }
        })?;
    }
    append_child(&nav, &picker)?;
    append_child(&page, &nav)?;

    let data = vm.day.get();
    if let Some(status) = render_list_status(&data, |p| p.items.is_empty(), "No appointments on this day.")? {
        append_child(&page, &status)?;
        return Ok(page);
    }

    let agenda = ElementBuilder::new("ol")?.class("agenda").build();
    let mut items = data.value().map(|p| p.items.clone()).unwrap_or_default();
    items.sort_by_key(|a| a.start_time);
    for appointment in &items {
        let entry = ElementBuilder::new("li")?
            .class("agenda-item")
            .child(ElementBuilder::new("span")?.class("agenda-time").text(&appointment.time_range()).build())?
            .child(ElementBuilder::new("span")?.class("agenda-patient").text(&appointment.patient.full_name).build())?
            .child(ElementBuilder::new("span")?.class("agenda-service").text(&appointment.service.name).build())?
            .child(ElementBuilder::new("span")?.class("agenda-doctor").text(&appointment.doctor.full_name).build())?
            .child(render_badge(appointment.status.css_class(), appointment.status.label())?)?
            .build();
        append_child(&agenda, &entry)?;
    }
    append_child(&page, &agenda)?;
    Ok(page)
}
