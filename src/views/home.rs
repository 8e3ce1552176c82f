// ============================================================================
// HOME VIEW - Public landing page, consultation modal and news detail
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::models::Blog;
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::{ConsultationViewModel, HomeViewModel, NewsDetailViewModel, RemoteData};
use crate::views::layout::render_link;
use crate::views::shared::{render_button, render_list_status, render_modal, render_notice, render_submit_button, render_text_field};

const SERVICES: [(&str, &str, &str); 4] = [
    ("🩺", "General check-ups", "Routine examinations with our family doctors."),
    ("🧪", "Laboratory", "Blood and urine tests with same-day results."),
    ("🦷", "Dental care", "Cleaning, fillings and orthodontic consultations."),
    ("👶", "Paediatrics", "Care for children from newborns to teens."),
];

fn render_hero(home: &HomeViewModel) -> Result<Element, JsValue> {
    let hero = ElementBuilder::new("section")?.class("hero").build();
    let title = ElementBuilder::new("h1")?.text("Your family's health, in good hands").build();
    let lead = ElementBuilder::new("p")?
        .class("hero-lead")
        .text("Book a visit with our specialists or leave your number and we will call you back.")
        .build();
    let form = home.consultation.form.clone();
    let cta = render_button("btn btn-primary btn-lg", "Request a consultation", false, move || form.open())?;
    append_child(&hero, &title)?;
    append_child(&hero, &lead)?;
    append_child(&hero, &cta)?;
    Ok(hero)
}

fn render_services() -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.class("services").build();
    append_child(&section, &ElementBuilder::new("h2")?.text("Our services").build())?;
    let grid = ElementBuilder::new("div")?.class("service-grid").build();
    for (icon, name, text) in SERVICES {
        let card = ElementBuilder::new("div")?
            .class("service-card")
            .child(ElementBuilder::new("span")?.class("service-icon").text(icon).build())?
            .child(ElementBuilder::new("h3")?.text(name).build())?
            .child(ElementBuilder::new("p")?.text(text).build())?
            .build();
        append_child(&grid, &card)?;
    }
    append_child(&section, &grid)?;
    Ok(section)
}

fn render_blog_card(state: &AppState, blog: &Blog) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("article")?.class("blog-card").build();
    if let Some(url) = &blog.thumbnail_url {
        let img = ElementBuilder::new("img")?.attr("src", url)?.attr("alt", &blog.title)?.build();
        append_child(&card, &img)?;
    }
    append_child(&card, &render_link(state, "blog-title", &blog.title, &Route::NewsDetail(blog.id))?)?;
    if let Some(summary) = &blog.summary {
        append_child(&card, &ElementBuilder::new("p")?.class("blog-summary").text(summary).build())?;
    }
    Ok(card)
}

fn render_news(state: &AppState, home: &HomeViewModel) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.class("news").build();
    append_child(&section, &ElementBuilder::new("h2")?.text("Health news").build())?;
    let data = home.blogs.get();
    if let Some(status) = render_list_status(&data, |page| page.items.is_empty(), "No articles yet.")? {
        append_child(&section, &status)?;
        return Ok(section);
    }
    let grid = ElementBuilder::new("div")?.class("blog-grid").build();
    for blog in data.value().map(|p| p.items.as_slice()).unwrap_or_default() {
        append_child(&grid, &render_blog_card(state, blog)?)?;
    }
    append_child(&section, &grid)?;
    Ok(section)
}

pub fn render_consultation_modal(state: &AppState, vm: &ConsultationViewModel) -> Result<Option<Element>, JsValue> {
    if !vm.form.is_open() {
        return Ok(None);
    }
    let snapshot = vm.form.snapshot();
    let errors = vm.form.visible_errors();
    let busy = snapshot.submitting;

    let form = ElementBuilder::new("form")?.class("consultation-form").attr("novalidate", "")?.build();
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
    append_child(&form, &render_text_field("Full name", "text", &snapshot.fields.name, errors.get("name"), busy, move |v| {
        f.update(|x| x.name = v)
    })?)?;
    let f = vm.form.clone();
    append_child(&form, &render_text_field("Phone", "tel", &snapshot.fields.phone, errors.get("phone"), busy, move |v| {
        f.update(|x| x.phone = v)
    })?)?;
    let f = vm.form.clone();
    append_child(&form, &render_text_field("Email", "email", &snapshot.fields.email, errors.get("email"), busy, move |v| {
        f.update(|x| x.email = v)
    })?)?;
    append_child(&form, &render_submit_button("Send request", "Sending...", busy)?)?;

    let f = vm.form.clone();
    Ok(Some(render_modal("Request a consultation", form, Rc::new(move || {
        f.close();
    }))?))
}

pub fn render_home(state: &AppState, home: &HomeViewModel) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("home").build();
    append_child(&page, &render_hero(home)?)?;
    append_child(&page, &render_services()?)?;
    append_child(&page, &render_news(state, home)?)?;
    if let Some(modal) = render_consultation_modal(state, &home.consultation)? {
        append_child(&page, &modal)?;
    }
    Ok(page)
}

pub fn render_news_detail(state: &AppState, news: &NewsDetailViewModel) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("article")?.class("news-detail").build();
    append_child(&page, &render_link(state, "back-link", "‹ Back to home", &Route::Home)?)?;
    match news.article.get() {
        RemoteData::Loaded(blog) => {
            append_child(&page, &ElementBuilder::new("h1")?.text(&blog.title).build())?;
            if let Some(date) = &blog.published_at {
                append_child(&page, &ElementBuilder::new("p")?.class("news-date").text(date).build())?;
            }
            if let Some(url) = &blog.thumbnail_url {
                append_child(&page, &ElementBuilder::new("img")?.class("news-cover").attr("src", url)?.build())?;
            }
            // Backend-authored rich text
            let body = ElementBuilder::new("div")?.class("news-body").build();
            body.set_inner_html(&blog.content);
            append_child(&page, &body)?;
        }
        RemoteData::Failed(message) => append_child(&page, &render_notice("list-error", &message)?)?,
        RemoteData::NotAsked | RemoteData::Loading => append_child(&page, &render_notice("list-loading", "Loading...")?)?,
    }
    Ok(page)
}
