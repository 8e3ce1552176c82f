use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::viewmodels::scheduling_viewmodel::SchedulingData;
use crate::viewmodels::SchedulingViewModel;
use crate::views::shared::{render_badge, render_modal};

fn row(list: &Element, label: &str, value: &str) -> Result<(), JsValue> {
    append_child(list, &ElementBuilder::new("dt")?.text(label).build())?;
    append_child(list, &ElementBuilder::new("dd")?.text(value).build())
}

pub fn render_detail_modal(vm: &SchedulingViewModel, data: &SchedulingData) -> Result<Option<Element>, JsValue> {
    let appointment = match &data.detail {
        Some(appointment) => appointment,
        None => return Ok(None),
    };

    let body = ElementBuilder::new("div")?.class("appointment-detail").build();
    append_child(&body, &render_badge(appointment.status.css_class(), appointment.status.label())?)?;

    let list = ElementBuilder::new("dl")?.class("detail-list").build();
    row(&list, "Patient", &appointment.patient.full_name)?;
    row(&list, "Phone", &appointment.patient.phone)?;
    row(&list, "Email", appointment.patient.email.as_deref().unwrap_or("-"))?;
    row(&list, "Doctor", &appointment.doctor.full_name)?;
    row(&list, "Service", &appointment.service.name)?;
    row(&list, "Date", &appointment.appointment_date.format("%d/%m/%Y").to_string())?;
    row(&list, "Time", &appointment.time_range())?;
    row(&list, "Note", appointment.note.as_deref().unwrap_or("-"))?;
    append_child(&body, &list)?;

    if !appointment.reassignment_history.is_empty() {
        append_child(&body, &ElementBuilder::new("h4")?.text("Reassignment history").build())?;
        let history = ElementBuilder::new("ul")?.class("reassign-history").build();
        for entry in &appointment.reassignment_history {
            let mut text = format!("{}: {} → {}", entry.reassigned_at, entry.from_doctor_name, entry.to_doctor_name);
            if let Some(reason) = entry.reason.as_deref().filter(|r| !r.is_empty()) {
                text.push_str(&format!(" ({})", reason));
            }
            append_child(&history, &ElementBuilder::new("li")?.text(&text).build())?;
        }
        append_child(&body, &history)?;
    }

    let vm = vm.clone();
    Ok(Some(render_modal("Appointment details", body, Rc::new(move || vm.close_detail()))?))
}
