// ============================================================================
// ROLE LAYOUT - Sidebar workspace shell shared by every role
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, class_if, on_click, ElementBuilder};
use crate::models::Role;
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::{LayoutViewModel, NavItem};
use crate::views::shared::render_button;

/// In-app link: `href` for middle-click, router navigation on click
pub fn render_link(state: &AppState, class: &str, text: &str, route: &Route) -> Result<Element, JsValue> {
    let link = ElementBuilder::new("a")?
        .class(class)
        .attr("href", &route.path())?
        .text(text)
        .build();
    let router = state.router.clone();
    let route = route.clone();
    on_click(&link, move |e| {
        e.prevent_default();
        router.navigate(&route);
    })?;
    Ok(link)
}

fn render_nav_item(state: &AppState, item: &NavItem) -> Result<Element, JsValue> {
    let link = render_link(state, &class_if("nav-item", "active", item.current), "", &item.route)?;
    let icon = ElementBuilder::new("span")?.class("nav-icon").text(item.icon).build();
    let label = ElementBuilder::new("span")?.class("nav-label").text(item.label).build();
    append_child(&link, &icon)?;
    append_child(&link, &label)?;
    if let Some(count) = item.badge {
        let badge = ElementBuilder::new("span")?
            .class("nav-badge")
            .text(&if count > 99 { "99+".to_string() } else { count.to_string() })
            .build();
        append_child(&link, &badge)?;
    }
    Ok(link)
}

pub fn render_role_layout(
    state: &AppState,
    layout: &LayoutViewModel,
    role: Role,
    title: &str,
    content: Element,
) -> Result<Element, JsValue> {
    let shell = ElementBuilder::new("div")?.class(&format!("workspace workspace-{}", role.as_str().to_lowercase())).build();

    let sidebar = ElementBuilder::new("aside")?.class("sidebar").build();
    append_child(&sidebar, &render_link(state, "sidebar-brand", "🏥 Clinic Portal", &Route::Home)?)?;
    let section = ElementBuilder::new("p")?.class("sidebar-role").text(role.label()).build();
    append_child(&sidebar, &section)?;
    let nav = ElementBuilder::new("nav")?.class("sidebar-nav").build();
    for item in layout.navigation(role) {
        append_child(&nav, &render_nav_item(state, &item)?)?;
    }
    append_child(&sidebar, &nav)?;

    let main = ElementBuilder::new("div")?.class("workspace-main").build();
    let topbar = ElementBuilder::new("header")?.class("workspace-topbar").build();
    let heading = ElementBuilder::new("h1")?.text(title).build();
    append_child(&topbar, &heading)?;

    if let Some(user) = state.session.user() {
        let who = ElementBuilder::new("div")?.class("topbar-user").build();
        let avatar = ElementBuilder::new("span")?.class("avatar").text(&user.initials()).build();
        let name = ElementBuilder::new("span")?.class("user-name").text(&user.full_name).build();
        append_child(&who, &avatar)?;
        append_child(&who, &name)?;
        append_child(&topbar, &who)?;
    }
    let layout = layout.clone();
    append_child(&topbar, &render_button("btn btn-outline", "Sign out", false, move || layout.logout())?)?;

    append_child(&main, &topbar)?;
    let body = ElementBuilder::new("main")?.class("workspace-content").child(content)?.build();
    append_child(&main, &body)?;

    append_child(&shell, &sidebar)?;
    append_child(&shell, &main)?;
    Ok(shell)
}
