use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::AuthViewModel;
use crate::views::shared::{render_modal, render_submit_button, render_text_field};

pub fn render_login_modal(state: &AppState, auth: &AuthViewModel) -> Result<Option<Element>, JsValue> {
    if !auth.login.is_open() {
        return Ok(None);
    }
    let form_state = auth.login.snapshot();
    let errors = auth.login.visible_errors();
    let busy = form_state.submitting;

    let form = ElementBuilder::new("form")?.class("auth-form").attr("novalidate", "")?.build();
    {
        let (state, auth) = (state.clone(), auth.clone());
        on_submit(&form, move || {
            let auth = auth.clone();
            state.spawn_detached(async move {
                auth.submit_login().await;
            });
        })?;
    }

    let login = auth.login.clone();
    append_child(&form, &render_text_field("Email", "email", &form_state.fields.email, errors.get("email"), busy, move |v| {
        login.update(|f| f.email = v)
    })?)?;
    let login = auth.login.clone();
    append_child(&form, &render_text_field("Password", "password", &form_state.fields.password, errors.get("password"), busy, move |v| {
        login.update(|f| f.password = v)
    })?)?;
    append_child(&form, &render_submit_button("Sign in", "Signing in...", busy)?)?;

    let switch = ElementBuilder::new("p")?.class("auth-switch").text("No account yet? ").build();
    let link = ElementBuilder::new("a")?.attr("href", "#")?.text("Create one").build();
    {
        let auth = auth.clone();
        on_click(&link, move |e| {
            e.prevent_default();
            auth.open_signup();
        })?;
    }
    append_child(&switch, &link)?;
    append_child(&form, &switch)?;

    let auth = auth.clone();
    let modal = render_modal("Sign in", form, Rc::new(move || {
        auth.close();
    }))?;
    Ok(Some(modal))
}
