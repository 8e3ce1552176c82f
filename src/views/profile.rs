use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::ProfileViewModel;
use crate::views::shared::{render_button, render_modal, render_notice, render_submit_button, render_text_field};

fn render_edit_modal(state: &AppState, vm: &ProfileViewModel) -> Result<Option<Element>, JsValue> {
    if !vm.form.is_open() {
        return Ok(None);
    }
    let snapshot = vm.form.snapshot();
    let errors = vm.form.visible_errors();
    let busy = snapshot.submitting;

    let form = ElementBuilder::new("form")?.class("profile-form").attr("novalidate", "")?.build();
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
    append_child(&form, &render_text_field("Full name", "text", &snapshot.fields.full_name, errors.get("fullName"), busy, move |v| {
        f.update(|x| x.full_name = v)
    })?)?;
    let f = vm.form.clone();
    append_child(&form, &render_text_field("Phone", "tel", &snapshot.fields.phone, errors.get("phone"), busy, move |v| {
        f.update(|x| x.phone = v)
    })?)?;
    let f = vm.form.clone();
    append_child(&form, &render_text_field("Email", "email", &snapshot.fields.email, errors.get("email"), busy, move |v| {
        f.update(|x| x.email = v)
    })?)?;
    append_child(&form, &render_submit_button("Save", "Saving...", busy)?)?;

    let f = vm.form.clone();
    Ok(Some(render_modal("Edit profile", form, Rc::new(move || {
        f.close();
    }))?))
}

pub fn render_profile(state: &AppState, vm: &ProfileViewModel) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("profile-page").build();
    let user = match vm.user() {
        Some(user) => user,
        None => {
            append_child(&page, &render_notice("list-empty", "No profile loaded.")?)?;
            return Ok(page);
        }
    };

    let card = ElementBuilder::new("div")?
        .class("profile-card")
        .child(ElementBuilder::new("span")?.class("avatar avatar-lg").text(&user.initials()).build())?
        .child(ElementBuilder::new("h2")?.text(&user.full_name).build())?
        .child(ElementBuilder::new("p")?.text(&user.email).build())?
        .child(ElementBuilder::new("p")?.text(user.phone.as_deref().unwrap_or("-")).build())?
        .child(ElementBuilder::new("p")?.class("profile-role").text(user.role.label()).build())?
        .build();
    let editor = vm.clone();
    append_child(&card, &render_button("btn btn-primary", "Edit profile", false, move || editor.edit())?)?;
    append_child(&page, &card)?;

    if let Some(modal) = render_edit_modal(state, vm)? {
        append_child(&page, &modal)?;
    }
    Ok(page)
}
