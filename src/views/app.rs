// ============================================================================
// APP VIEW - Route dispatch into the public shell or a role workspace
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::PageModels;
use crate::views::accounts::render_accounts;
use crate::views::auth::{render_login_modal, render_signup_modal};
use crate::views::clinician_schedule::render_clinician_schedule;
use crate::views::errors::{render_not_found, render_unauthorized};
use crate::views::home::{render_home, render_news_detail};
use crate::views::layout::render_role_layout;
use crate::views::leave_requests::render_leave_requests;
use crate::views::manager_dashboard::render_manager_dashboard;
use crate::views::navbar::render_navbar;
use crate::views::notifications::render_notifications;
use crate::views::patient_requests::render_patient_requests;
use crate::views::profile::render_profile;
use crate::views::scheduling::render_scheduling_page;
use crate::views::shared::render_toasts;

/// Title and body of a page rendered inside a role layout
fn render_workspace_page(state: &AppState, pages: &PageModels, route: &Route) -> Result<(&'static str, Element), JsValue> {
    Ok(match route {
        Route::AdminAccounts => ("Accounts", render_accounts(state, &pages.accounts)?),
        Route::ManagerDashboard => ("Dashboard", render_manager_dashboard(state, &pages.manager)?),
        Route::DoctorSchedule | Route::NurseSchedule => ("Schedule", render_clinician_schedule(state, &pages.schedule)?),
        Route::StaffDashboard => ("Appointments", render_scheduling_page(state, &pages.scheduling)?),
        Route::StaffLeaveRequests | Route::NurseLeaveRequests => {
            ("Leave requests", render_leave_requests(state, &pages.leave_requests)?)
        }
        Route::StaffNotifications | Route::NurseNotifications => {
            ("Notifications", render_notifications(state, &pages.notifications)?)
        }
        Route::StaffPatientRequests => ("Patient requests", render_patient_requests(state, &pages.patient_requests)?),
        Route::StaffProfile | Route::NurseProfile => ("My profile", render_profile(state, &pages.profile)?),
        other => ("Not found", render_not_found(state, &other.path())?),
    })
}

fn render_public_page(state: &AppState, pages: &PageModels, route: &Route) -> Result<Element, JsValue> {
    let shell = ElementBuilder::new("div")?.class("public-shell").build();
    append_child(&shell, &render_navbar(state, pages)?)?;
    let page = match route {
        Route::Home | Route::Login | Route::Signup => render_home(state, &pages.home)?,
        Route::NewsDetail(_) => render_news_detail(state, &pages.news)?,
        Route::Unauthorized | Route::AdminUnauthorized => render_unauthorized(state)?,
        other => render_not_found(state, &other.path())?,
    };
    let main = ElementBuilder::new("main")?.class("public-content").child(page)?.build();
    append_child(&shell, &main)?;
    Ok(shell)
}

/// Whole tree for the current route; gating has already run
pub fn render_app(state: &AppState, pages: &PageModels) -> Result<Element, JsValue> {
    let route = state.router.route();
    let root = ElementBuilder::new("div")?.class("app-root").build();

    let content = match route.layout_role() {
        Some(role) => {
            let (title, body) = render_workspace_page(state, pages, &route)?;
            render_role_layout(state, &pages.layout, role, title, body)?
        }
        None => render_public_page(state, pages, &route)?,
    };
    append_child(&root, &content)?;

    for modal in [render_login_modal(state, &pages.auth)?, render_signup_modal(state, &pages.auth)?]
        .into_iter()
        .flatten()
    {
        append_child(&root, &modal)?;
    }
    append_child(&root, &render_toasts(state)?)?;
    Ok(root)
}
