// ============================================================================
// NAVBAR - Public header with the sign-in entry points
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::PageModels;
use crate::views::layout::render_link;
use crate::views::shared::render_button;

pub fn render_navbar(state: &AppState, pages: &PageModels) -> Result<Element, JsValue> {
    let bar = ElementBuilder::new("header")?.class("navbar").build();
    append_child(&bar, &render_link(state, "navbar-brand", "🏥 Clinic Portal", &Route::Home)?)?;

    let actions = ElementBuilder::new("div")?.class("navbar-actions").build();
    let session = state.session.snapshot();
    match (session.is_authenticated, session.role()) {
        (true, Some(role)) => {
            let home = Route::home_for(role);
            if home != Route::Home {
                append_child(&actions, &render_link(state, "btn btn-outline", "My workspace", &home)?)?;
            }
            let layout = pages.layout.clone();
            append_child(&actions, &render_button("btn btn-primary", "Sign out", false, move || layout.logout())?)?;
        }
        _ => {
            let auth = pages.auth.clone();
            append_child(&actions, &render_button("btn btn-outline", "Sign in", false, move || auth.open_login())?)?;
            let auth = pages.auth.clone();
            append_child(&actions, &render_button("btn btn-primary", "Sign up", false, move || auth.open_signup())?)?;
        }
    }
    append_child(&bar, &actions)?;
    Ok(bar)
}
