use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::scheduling_viewmodel::SchedulingData;
use crate::viewmodels::{RemoteData, SchedulingViewModel};
use crate::views::shared::{parse_id, render_modal, render_notice, render_select, render_submit_button, render_textarea, SelectOption};

pub fn render_reassign_modal(state: &AppState, vm: &SchedulingViewModel, data: &SchedulingData) -> Result<Option<Element>, JsValue> {
    let target = match (&data.reassign_target, vm.reassign.is_open()) {
        (Some(target), true) => target,
        _ => return Ok(None),
    };
    let snapshot = vm.reassign.snapshot();
    let errors = vm.reassign.visible_errors();
    let busy = snapshot.submitting;

    let form = ElementBuilder::new("form")?.class("reassign-form").attr("novalidate", "")?.build();
    {
        let (state, vm) = (state.clone(), vm.clone());
        on_submit(&form, move || {
            let vm = vm.clone();
            state.spawn_detached(async move {
                vm.submit_reassign().await;
            });
        })?;
    }

    let summary = format!(
        "{} · {} {} · currently {}",
        target.patient.full_name,
        target.appointment_date.format("%d/%m/%Y"),
        target.time_range(),
        target.doctor.full_name
    );
    append_child(&form, &ElementBuilder::new("p")?.class("reassign-summary").text(&summary).build())?;

    match &data.reassign_doctors {
        RemoteData::Loaded(doctors) if doctors.is_empty() => {
            append_child(&form, &render_notice("list-empty", "No other doctor is free at this time.")?)?;
        }
        RemoteData::Loaded(doctors) => {
            let options: Vec<SelectOption> = doctors.iter().map(|d| (d.id.to_string(), d.display_name(), false)).collect();
            let selected = snapshot.fields.doctor_id.map(|id| id.to_string()).unwrap_or_default();
            let r = vm.reassign.clone();
            append_child(&form, &render_select("New doctor", "Choose a doctor", &options, &selected, errors.get("doctor"), busy, move |v| {
                r.update_and_refresh(|f| f.doctor_id = parse_id(&v))
            })?)?;
        }
        RemoteData::Failed(message) => append_child(&form, &render_notice("list-error", message)?)?,
        RemoteData::NotAsked | RemoteData::Loading => append_child(&form, &render_notice("list-loading", "Finding free doctors...")?)?,
    }

    let r = vm.reassign.clone();
    append_child(&form, &render_textarea("Reason (optional)", &snapshot.fields.reason, errors.get("reason"), busy, move |v| {
        r.update(|f| f.reason = v)
    })?)?;
    append_child(&form, &render_submit_button("Reassign", "Reassigning...", busy)?)?;

    let vm = vm.clone();
    Ok(Some(render_modal("Reassign appointment", form, Rc::new(move || {
        vm.close_reassign();
    }))?))
}
