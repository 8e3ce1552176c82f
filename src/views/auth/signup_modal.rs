use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::auth_viewmodel::SignupFields;
use crate::viewmodels::AuthViewModel;
use crate::views::shared::{render_modal, render_submit_button, render_text_field};

type Setter = fn(&mut SignupFields, String);

pub fn render_signup_modal(state: &AppState, auth: &AuthViewModel) -> Result<Option<Element>, JsValue> {
    if !auth.signup.is_open() {
        return Ok(None);
    }
    let form_state = auth.signup.snapshot();
    let errors = auth.signup.visible_errors();
    let busy = form_state.submitting;
    let fields = &form_state.fields;

    let form = ElementBuilder::new("form")?.class("auth-form").attr("novalidate", "")?.build();
    {
        let (state, auth) = (state.clone(), auth.clone());
        on_submit(&form, move || {
            let auth = auth.clone();
            state.spawn_detached(async move {
                auth.submit_signup().await;
            });
        })?;
    }

    let inputs: [(&str, &str, &str, &'static str, Setter); 5] = [
        ("Full name", "text", fields.full_name.as_str(), "fullName", |f, v| f.full_name = v),
        ("Email", "email", fields.email.as_str(), "email", |f, v| f.email = v),
        ("Phone", "tel", fields.phone.as_str(), "phone", |f, v| f.phone = v),
        ("Password", "password", fields.password.as_str(), "password", |f, v| f.password = v),
        ("Confirm password", "password", fields.confirm_password.as_str(), "confirmPassword", |f, v| f.confirm_password = v),
    ];
    for (label, input_type, value, key, set) in inputs {
        let signup = auth.signup.clone();
        let field = render_text_field(label, input_type, value, errors.get(key), busy, move |v| {
            signup.update(|f| set(f, v))
        })?;
        append_child(&form, &field)?;
    }
    append_child(&form, &render_submit_button("Create account", "Creating...", busy)?)?;

    let switch = ElementBuilder::new("p")?.class("auth-switch").text("Already registered? ").build();
    let link = ElementBuilder::new("a")?.attr("href", "#")?.text("Sign in").build();
    {
        let auth = auth.clone();
        on_click(&link, move |e| {
            e.prevent_default();
            auth.open_login();
        })?;
    }
    append_child(&switch, &link)?;
    append_child(&form, &switch)?;

    let auth = auth.clone();
    let modal = render_modal("Create an account", form, Rc::new(move || {
        auth.close();
    }))?;
    Ok(Some(modal))
}
