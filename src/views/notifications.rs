// Inbox with mark-as-read actions

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, class_if, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::NotificationViewModel;
use crate::views::shared::{render_button, render_list_status, render_pagination};

pub fn render_notifications(state: &AppState, vm: &NotificationViewModel) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("notifications-page").build();

    let toolbar = ElementBuilder::new("div")?.class("toolbar").build();
    let unread = state.feed.unread();
    {
        let (state, vm) = (state.clone(), vm.clone());
        append_child(&toolbar, &render_button("btn btn-outline", "Mark all as read", unread == 0, move || {
            let vm = vm.clone();
            state.spawn_detached(async move {
                vm.mark_all_read().await;
            });
        })?)?;
    }
    append_child(&page, &toolbar)?;

    let data = vm.inbox.get();
    if let Some(status) = render_list_status(&data, |p| p.items.is_empty(), "You have no notifications.")? {
        append_child(&page, &status)?;
        return Ok(page);
    }
    let inbox = match data.value() {
        Some(inbox) => inbox.clone(),
        None => return Ok(page),
    };

    let list = ElementBuilder::new("ul")?.class("notification-list").build();
    for notification in &inbox.items {
        let item = ElementBuilder::new("li")?
            .class(&class_if("notification", "unread", !notification.read))
            .child(ElementBuilder::new("strong")?.text(&notification.title).build())?
            .child(ElementBuilder::new("p")?.text(&notification.message).build())?
            .build();
        if let Some(at) = &notification.created_at {
            append_child(&item, &ElementBuilder::new("time")?.text(at).build())?;
        }
        if !notification.read {
            let (state, vm) = (state.clone(), vm.clone());
            let id = notification.id;
            append_child(&item, &render_button("btn btn-sm", "Mark as read", false, move || {
                let vm = vm.clone();
                state.spawn_detached(async move {
                    vm.mark_read(id).await;
                });
            })?)?;
        }
        append_child(&list, &item)?;
    }
    append_child(&page, &list)?;

    let (state, vm) = (state.clone(), vm.clone());
    let on_page: Rc<dyn Fn(u32)> = Rc::new(move |target| {
        let vm = vm.clone();
        state.spawn_page(async move {
            vm.go_to_page(target).await;
        });
    });
    append_child(&page, &render_pagination(&inbox, on_page)?)?;
    Ok(page)
}
