// ============================================================================
// SCHEDULING PAGE VIEW - Filters, appointment table and pagination
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, class_if, on_change, on_click, ElementBuilder};
use crate::models::{Appointment, StatusFilter};
use crate::state::AppState;
use crate::viewmodels::scheduling_viewmodel::{parse_date_input, SchedulingData};
use crate::viewmodels::SchedulingViewModel;
use crate::views::scheduling::booking_modal::render_booking_modal;
use crate::views::scheduling::detail_modal::render_detail_modal;
use crate::views::scheduling::reassign_modal::render_reassign_modal;
use crate::views::shared::{render_badge, render_button, render_list_status, render_pagination};

const PAGE_SIZES: [u32; 4] = [5, 10, 20, 50];

fn date_value(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

fn render_filters(state: &AppState, vm: &SchedulingViewModel, data: &SchedulingData) -> Result<Element, JsValue> {
    let bar = ElementBuilder::new("div")?.class("filters").build();

    let search = ElementBuilder::new("input")?
        .class("form-input search-input")
        .attr("type", "search")?
        .attr("placeholder", "Search patient, phone, doctor...")?
        .attr("value", &data.query.search)?
        .build();
    {
        let (state, vm) = (state.clone(), vm.clone());
        on_change(&search, move |text| {
            let vm = vm.clone();
            state.spawn_page(async move {
                vm.set_search(&text).await;
            });
        })?;
    }
    append_child(&bar, &search)?;

    let from = data.query.from;
    let to = data.query.to;
    for (label, value, is_from) in [("From", from, true), ("To", to, false)] {
        let input = ElementBuilder::new("input")?
            .class("form-input date-input")
            .attr("type", "date")?
            .attr("aria-label", label)?
            .attr("value", &date_value(value))?
            .build();
        let (state, vm) = (state.clone(), vm.clone());
        on_change(&input, move |raw| {
            let picked = parse_date_input(&raw);
            let (from, to) = if is_from { (picked, to) } else { (from, picked) };
            let vm = vm.clone();
            state.spawn_page(async move {
                vm.set_date_range(from, to).await;
            });
        })?;
        append_child(&bar, &input)?;
    }

    let size = ElementBuilder::new("select")?.class("form-input page-size").build();
    for option in PAGE_SIZES {
        let element = ElementBuilder::new("option")?
            .attr("value", &option.to_string())?
            .flag("selected", option == data.query.size)?
            .text(&format!("{} / page", option))
            .build();
        append_child(&size, &element)?;
    }
    {
        let (state, vm) = (state.clone(), vm.clone());
        on_change(&size, move |raw| {
            if let Ok(size) = raw.parse::<u32>() {
                let vm = vm.clone();
                state.spawn_page(async move {
                    vm.set_page_size(size).await;
                });
            }
        })?;
    }
    append_child(&bar, &size)?;

    let vm = vm.clone();
    append_child(&bar, &render_button("btn btn-primary", "+ New appointment", false, move || vm.open_booking())?)?;
    Ok(bar)
}

fn render_tabs(state: &AppState, vm: &SchedulingViewModel, current: StatusFilter) -> Result<Element, JsValue> {
    let tabs = ElementBuilder::new("div")?.class("status-tabs").attr("role", "tablist")?.build();
    for filter in StatusFilter::TABS {
        let tab = ElementBuilder::new("button")?
            .class(&class_if("tab", "active", filter == current))
            .attr("type", "button")?
            .text(filter.label())
            .build();
        let (state, vm) = (state.clone(), vm.clone());
        on_click(&tab, move |_| {
            let vm = vm.clone();
            state.spawn_page(async move {
                vm.set_status(filter).await;
            });
        })?;
        append_child(&tabs, &tab)?;
    }
    Ok(tabs)
}

fn cell(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("td")?.text(text).build())
}

fn render_actions(state: &AppState, vm: &SchedulingViewModel, appointment: &Appointment, busy: bool) -> Result<Element, JsValue> {
    let actions = ElementBuilder::new("td")?.class("row-actions").build();
    let id = appointment.id;

    let detail_vm = vm.clone();
    let detail_state = state.clone();
    append_child(&actions, &render_button("btn btn-sm", "Details", false, move || {
        let vm = detail_vm.clone();
        detail_state.spawn_page(async move { vm.open_detail(id).await });
    })?)?;

    if appointment.status.can_confirm() {
        let (vm, state) = (vm.clone(), state.clone());
        append_child(&actions, &render_button("btn btn-sm btn-success", "Confirm", busy, move || {
            let vm = vm.clone();
            state.spawn_detached(async move {
                vm.confirm(id).await;
            });
        })?)?;
    }
    if appointment.status.can_reassign() {
        let (vm, state) = (vm.clone(), state.clone());
        append_child(&actions, &render_button("btn btn-sm", "Reassign", busy, move || {
            let vm = vm.clone();
            state.spawn_page(async move {
                vm.open_reassign(id).await;
            });
        })?)?;
    }
    if appointment.status.can_cancel() {
        let (vm, state) = (vm.clone(), state.clone());
        append_child(&actions, &render_button("btn btn-sm btn-danger", "Cancel", busy, move || {
            let vm = vm.clone();
            state.spawn_detached(async move {
                vm.cancel(id, None).await;
            });
        })?)?;
    }
    Ok(actions)
}

fn render_table(state: &AppState, vm: &SchedulingViewModel, data: &SchedulingData) -> Result<Element, JsValue> {
    let wrapper = ElementBuilder::new("div")?.class("table-wrapper").build();
    let list = vm.appointments.get();
    if let Some(status) = render_list_status(&list, |page| page.items.is_empty(), "No appointments match these filters.")? {
        append_child(&wrapper, &status)?;
        return Ok(wrapper);
    }
    let page = match list.value() {
        Some(page) => page.clone(),
        None => return Ok(wrapper),
    };

    let table = ElementBuilder::new("table")?.class("data-table").build();
    let head = ElementBuilder::new("tr")?.build();
    for title in ["Patient", "Phone", "Doctor", "Service", "Date", "Time", "Status", ""] {
        append_child(&head, &ElementBuilder::new("th")?.text(title).build())?;
    }
    append_child(&table, &ElementBuilder::new("thead")?.child(head)?.build())?;

    let body = ElementBuilder::new("tbody")?.build();
    for appointment in &page.items {
        let row = ElementBuilder::new("tr")?.build();
        append_child(&row, &cell(&appointment.patient.full_name)?)?;
        append_child(&row, &cell(&appointment.patient.phone)?)?;
        append_child(&row, &cell(&appointment.doctor.full_name)?)?;
        append_child(&row, &cell(&appointment.service.name)?)?;
        append_child(&row, &cell(&appointment.appointment_date.format("%d/%m/%Y").to_string())?)?;
        append_child(&row, &cell(&appointment.time_range())?)?;
        let status = ElementBuilder::new("td")?
            .child(render_badge(appointment.status.css_class(), appointment.status.label())?)?
            .build();
        append_child(&row, &status)?;
        let busy = data.busy_id.is_some();
        append_child(&row, &render_actions(state, vm, appointment, busy)?)?;
        append_child(&body, &row)?;
    }
    append_child(&table, &body)?;
    append_child(&wrapper, &table)?;

    let (state, vm) = (state.clone(), vm.clone());
    let on_page: Rc<dyn Fn(u32)> = Rc::new(move |target| {
        let vm = vm.clone();
        state.spawn_page(async move {
            vm.go_to_page(target).await;
        });
    });
    append_child(&wrapper, &render_pagination(&page, on_page)?)?;
    Ok(wrapper)
}

pub fn render_scheduling_page(state: &AppState, vm: &SchedulingViewModel) -> Result<Element, JsValue> {
    let data = vm.snapshot();
    let page = ElementBuilder::new("div")?.class("scheduling-page").build();
    append_child(&page, &render_filters(state, vm, &data)?)?;
    append_child(&page, &render_tabs(state, vm, data.status_filter)?)?;
    append_child(&page, &render_table(state, vm, &data)?)?;

    for modal in [
        render_booking_modal(state, vm, &data)?,
        render_reassign_modal(state, vm, &data)?,
        render_detail_modal(vm, &data)?,
    ]
    .into_iter()
    .flatten()
    {
        append_child(&page, &modal)?;
    }
    Ok(page)
}
