// ============================================================================
// ACCOUNTS VIEW - Admin user table
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::AccountsViewModel;
use crate::views::introduction_modal::render_introduction_modal;
use crate::views::shared::{render_badge, render_button, render_list_status, render_pagination};

pub fn render_accounts(state: &AppState, vm: &AccountsViewModel) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("accounts-page").build();
    let toolbar = ElementBuilder::new("div")?.class("toolbar").build();
    let form = vm.introduction.form.clone();
    append_child(&toolbar, &render_button("btn btn-primary", "+ New introduction", false, move || form.open())?)?;
    append_child(&page, &toolbar)?;

    let data = vm.users.get();
    match render_list_status(&data, |p| p.items.is_empty(), "No accounts found.")? {
        Some(status) => append_child(&page, &status)?,
        None => {
            if let Some(users) = data.value() {
                let table = ElementBuilder::new("table")?.class("data-table").build();
                let head = ElementBuilder::new("tr")?.build();
                for title in ["", "Name", "Email", "Phone", "Role"] {
                    append_child(&head, &ElementBuilder::new("th")?.text(title).build())?;
                }
                append_child(&table, &ElementBuilder::new("thead")?.child(head)?.build())?;
                let body = ElementBuilder::new("tbody")?.build();
                for user in &users.items {
                    let row = ElementBuilder::new("tr")?
                        .child(ElementBuilder::new("td")?.child(ElementBuilder::new("span")?.class("avatar").text(&user.initials()).build())?.build())?
                        .child(ElementBuilder::new("td")?.text(&user.full_name).build())?
                        .child(ElementBuilder::new("td")?.text(&user.email).build())?
                        .child(ElementBuilder::new("td")?.text(user.phone.as_deref().unwrap_or("-")).build())?
                        .child(ElementBuilder::new("td")?.child(render_badge("role", user.role.label())?)?.build())?
                        .build();
                    append_child(&body, &row)?;
                }
                append_child(&table, &body)?;
                append_child(&page, &table)?;

                let (state, vm) = (state.clone(), vm.clone());
                let on_page: Rc<dyn Fn(u32)> = Rc::new(move |target| {
                    let vm = vm.clone();
                    state.spawn_page(async move {
                        vm.go_to_page(target).await;
                    });
                });
                append_child(&page, &render_pagination(users, on_page)?)?;
            }
        }
    }

    if let Some(modal) = render_introduction_modal(state, &vm.introduction)? {
        append_child(&page, &modal)?;
    }
    Ok(page)
}
