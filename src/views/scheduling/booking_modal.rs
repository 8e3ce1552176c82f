// ============================================================================
// BOOKING MODAL - Service, date, doctor and slot, then the patient
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_change, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::scheduling_viewmodel::{parse_date_input, SchedulingData};
use crate::viewmodels::{RemoteData, SchedulingViewModel, SlotCheck};
use crate::views::shared::{
    parse_id, render_modal, render_notice, render_select, render_submit_button, render_text_field, render_textarea,
    SelectOption,
};

fn id_value(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

fn render_slot_picker(state: &AppState, vm: &SchedulingViewModel, data: &SchedulingData, selected: &str, error: Option<&str>, busy: bool) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("slot-picker").build();
    let (options, placeholder, disabled) = match &data.slots {
        RemoteData::NotAsked => (Vec::new(), "Choose service, date and doctor first", true),
        RemoteData::Loading => (Vec::new(), "Loading slots...", true),
        RemoteData::Failed(_) => (Vec::new(), "Slots unavailable", true),
        RemoteData::Loaded(slots) => {
            let options: Vec<SelectOption> = slots
                .iter()
                .map(|slot| {
                    let label = if slot.available { slot.label() } else { format!("{} (booked)", slot.label()) };
                    (slot.key(), label, !slot.available)
                })
                .collect();
            let placeholder = if options.is_empty() { "No free slot on this day" } else { "Choose a time slot" };
            (options, placeholder, busy)
        }
    };

    let (state, vm) = (state.clone(), vm.clone());
    let select = render_select("Time slot", placeholder, &options, selected, error, disabled, move |key| {
        let vm = vm.clone();
        state.spawn_page(async move {
            vm.choose_slot(&key).await;
        });
    })?;
    append_child(&group, &select)?;

    let status = match &data.slot_check {
        SlotCheck::Unchecked => None,
        SlotCheck::Checking => Some(render_notice("slot-status checking", "Checking availability...")?),
        SlotCheck::Valid => Some(render_notice("slot-status valid", "✓ Slot available")?),
        SlotCheck::Invalid(message) => Some(render_notice("slot-status invalid", message)?),
    };
    if let Some(status) = status {
        append_child(&group, &status)?;
    }
    Ok(group)
}

pub fn render_booking_modal(state: &AppState, vm: &SchedulingViewModel, data: &SchedulingData) -> Result<Option<Element>, JsValue> {
    if !vm.booking.is_open() {
        return Ok(None);
    }
    let snapshot = vm.booking.snapshot();
    let fields = &snapshot.fields;
    let errors = vm.booking.visible_errors();
    let busy = snapshot.submitting;
    let date = parse_date_input(&fields.date);

    let form = ElementBuilder::new("form")?.class("booking-form").attr("novalidate", "")?.build();
    {
        let (state, vm) = (state.clone(), vm.clone());
        on_submit(&form, move || {
            let vm = vm.clone();
            state.spawn_detached(async move {
                vm.submit_booking().await;
            });
        })?;
    }

    let services: Vec<SelectOption> = data.services.iter().map(|s| (s.id.to_string(), s.name.clone(), false)).collect();
    {
        let (state, vm) = (state.clone(), vm.clone());
        append_child(&form, &render_select("Service", "Choose a service", &services, &id_value(fields.service_id), errors.get("service"), busy, move |v| {
            let vm = vm.clone();
            state.spawn_page(async move { vm.choose_service(parse_id(&v)).await });
        })?)?;
    }

    let date_group = render_text_field("Date", "date", &fields.date, errors.get("date"), busy, |_| {})?;
    if let Some(input) = date_group.query_selector("input")? {
        let (state, vm) = (state.clone(), vm.clone());
        on_change(&input, move |v| {
            let vm = vm.clone();
            state.spawn_page(async move { vm.choose_date(&v).await });
        })?;
    }
    append_child(&form, &date_group)?;

    let doctors: Vec<SelectOption> = data
        .doctors
        .iter()
        .map(|d| {
            let on_leave = date.and_then(|date| vm.blocking_leave(d.id, date)).is_some();
            let label = if on_leave { format!("{} (on leave)", d.display_name()) } else { d.display_name() };
            (d.id.to_string(), label, false)
        })
        .collect();
    {
        let (state, vm) = (state.clone(), vm.clone());
        append_child(&form, &render_select("Doctor", "Choose a doctor", &doctors, &id_value(fields.doctor_id), errors.get("doctor"), busy, move |v| {
            let vm = vm.clone();
            state.spawn_page(async move { vm.choose_doctor(parse_id(&v)).await });
        })?)?;
    }

    let slot_key = fields.slot.map(|s| s.key()).unwrap_or_default();
    append_child(&form, &render_slot_picker(state, vm, data, &slot_key, errors.get("slot"), busy)?)?;

    let b = vm.booking.clone();
    append_child(&form, &render_text_field("Patient name", "text", &fields.patient_name, errors.get("patientName"), busy, move |v| {
        b.update(|f| f.patient_name = v)
    })?)?;
    let b = vm.booking.clone();
    append_child(&form, &render_text_field("Patient phone", "tel", &fields.patient_phone, errors.get("patientPhone"), busy, move |v| {
        b.update(|f| f.patient_phone = v)
    })?)?;
    let b = vm.booking.clone();
    append_child(&form, &render_text_field("Patient email (optional)", "email", &fields.patient_email, errors.get("patientEmail"), busy, move |v| {
        b.update(|f| f.patient_email = v)
    })?)?;
    let b = vm.booking.clone();
    append_child(&form, &render_textarea("Note", &fields.note, errors.get("note"), busy, move |v| {
        b.update(|f| f.note = v)
    })?)?;

    append_child(&form, &render_submit_button("Book appointment", "Booking...", busy)?)?;

    let vm = vm.clone();
    Ok(Some(render_modal("New appointment", form, Rc::new(move || {
        vm.close_booking();
    }))?))
}
