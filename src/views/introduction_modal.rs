use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_file_change, on_submit, ElementBuilder};
use crate::models::IntroductionStatus;
use crate::state::AppState;
use crate::viewmodels::IntroductionViewModel;
use crate::views::shared::{render_modal, render_select, render_submit_button, render_text_field, render_textarea, SelectOption};

pub fn render_introduction_modal(state: &AppState, vm: &IntroductionViewModel) -> Result<Option<Element>, JsValue> {
    if !vm.form.is_open() {
        return Ok(None);
    }
    let snapshot = vm.form.snapshot();
    let errors = vm.form.visible_errors();
    let busy = snapshot.submitting;

    let form = ElementBuilder::new("form")?.class("introduction-form").attr("novalidate", "")?.build();
    {
        let (state, vm) = (state.clone(), vm.clone());
        on_submit(&form, move || {
            let vm = vm.clone();
            state.spawn_detached(async move {
                vm.submit().await;
            });
        })?;
    }

    let f = vm.form.clone();
    append_child(&form, &render_text_field("Title", "text", &snapshot.fields.title, errors.get("title"), busy, move |v| {
        f.update(|x| x.title = v)
    })?)?;
    let f = vm.form.clone();
    append_child(&form, &render_textarea("Summary", &snapshot.fields.summary, errors.get("summary"), busy, move |v| {
        f.update(|x| x.summary = v)
    })?)?;

    let statuses: Vec<SelectOption> = [IntroductionStatus::Draft, IntroductionStatus::Published]
        .iter()
        .map(|s| (s.as_param().to_string(), s.label().to_string(), false))
        .collect();
    let f = vm.form.clone();
    append_child(&form, &render_select("Status", "Choose a status", &statuses, snapshot.fields.status.as_param(), None, busy, move |v| {
        f.update_and_refresh(|x| x.status = IntroductionStatus::from_param(&v).unwrap_or_default())
    })?)?;

    let group = ElementBuilder::new("div")?.class("form-group").build();
    append_child(&group, &ElementBuilder::new("label")?.class("form-label").text("Thumbnail").build())?;
    let picker = ElementBuilder::new("input")?
        .attr("type", "file")?
        .attr("accept", "image/*")?
        .flag("disabled", busy)?
        .build();
    let f = vm.form.clone();
    on_file_change(&picker, move |file| f.update(|x| x.thumbnail_file = file))?;
    append_child(&group, &picker)?;
    if let Some(file) = &snapshot.fields.thumbnail_file {
        append_child(&group, &ElementBuilder::new("p")?.class("file-name").text(&file.name()).build())?;
    }
    append_child(&form, &group)?;

    append_child(&form, &render_submit_button("Create introduction", "Uploading...", busy)?)?;

    let f = vm.form.clone();
    Ok(Some(render_modal("New introduction", form, Rc::new(move || {
        f.close();
    }))?))
}
