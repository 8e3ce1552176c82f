// ============================================================================
// APP - Wires state, page models and the root render
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::router::{Route, Router};
use crate::state::{AppState, Backends, ChangeNotifier, NotificationFeed, SessionPersistence, SessionStore};
use crate::utils::storage::BrowserStorage;
use crate::viewmodels::{resolve_route, AuthViewModel, GateDecision, PageModels};
use crate::views::render_app;

/// Redirect chains are at most two hops (e.g. /admin/unauthorized -> /unauthorized)
const MAX_REDIRECTS: usize = 4;

pub struct App {
    state: AppState,
    pages: PageModels,
    root: Element,
    entry: RouteEntry,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let notifier = ChangeNotifier::new();
        let persistence = SessionPersistence::new(Rc::new(BrowserStorage));
        let session = SessionStore::with_persistence(notifier.clone(), persistence);
        session.restore_from_storage();

        let backends = Backends::http(&CONFIG, &session);
        let state = AppState::new(
            notifier.clone(),
            session,
            NotificationFeed::new(notifier.clone()),
            Router::browser(notifier.clone()),
            backends,
            CONFIG.notification_poll_ms(),
        );

        let toasts = state.toasts.clone();
        let duration = CONFIG.toast_duration_ms;
        state.toasts.set_on_push(move |id| {
            let toasts = toasts.clone();
            Timeout::new(duration, move || toasts.dismiss(id)).forget();
        });

        // Many notifications in one tick collapse into a single render
        let pending = Rc::new(Cell::new(false));
        notifier.subscribe(move || {
            if pending.replace(true) {
                return;
            }
            let pending = pending.clone();
            Timeout::new(0, move || {
                pending.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        let today = chrono::Local::now().date_naive();
        let pages = PageModels::new(state.clone(), CONFIG.default_page_size, today);

        log::info!("✅ [APP] Initialised at {}", state.router.pathname());
        Ok(Self { state, pages, root, entry: RouteEntry::default() })
    }

    pub fn router(&self) -> Router {
        self.state.router.clone()
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(route) = self.entry.settle(&self.state, &self.pages.auth) {
            self.state.reset_page_scope();
            self.pages.enter(&route);
        }

        self.state.sync_notification_feed();
        self.pages.auth.sync();

        set_inner_html(&self.root, "");
        let view = render_app(&self.state, &self.pages)?;
        append_child(&self.root, &view)
    }
}

/// Settles the router before a render and remembers which path's page
/// loads are running
#[derive(Debug, Default)]
struct RouteEntry {
    entered_path: Option<String>,
}

impl RouteEntry {
    /// Route to enter now, or `None` while the entered path is unchanged.
    /// /login and /signup become Home with a modal on top, and aliases such
    /// as /staff are rewritten to their canonical path.
    fn settle(&mut self, state: &AppState, auth: &AuthViewModel) -> Option<Route> {
        apply_gate(state);

        let path = state.router.pathname();
        if self.entered_path.as_deref() == Some(path.as_str()) {
            return None;
        }

        let route = match state.router.route() {
            Route::Login => {
                auth.open_login();
                Route::Home
            }
            Route::Signup => {
                auth.open_signup();
                Route::Home
            }
            route => route,
        };
        if route.path() != path {
            state.router.replace(&route);
        }

        self.entered_path = Some(route.path());
        Some(route)
    }
}

fn apply_gate(state: &AppState) {
    for _ in 0..MAX_REDIRECTS {
        let route = state.router.route();
        match resolve_route(&route, &state.session.snapshot()) {
            GateDecision::Render => return,
            GateDecision::Redirect(target) => {
                log::info!("🚧 [APP] {} redirected to {}", route.path(), target.path());
                state.router.replace(&target);
            }
        }
    }
    log::warn!("⚠️ [APP] Redirect limit reached at {}", state.router.pathname());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{staff_user, state_at};

    #[test]
    fn workspace_root_is_entered_once_under_its_canonical_path() {
        let (state, _fake) = state_at("/staff");
        state.session.set_auth(staff_user(), "tok".into());
        let auth = AuthViewModel::new(state.clone());
        let mut entry = RouteEntry::default();

        assert_eq!(entry.settle(&state, &auth), Some(Route::StaffDashboard));
        assert_eq!(state.router.pathname(), "/staff/dashboard");
        assert_eq!(entry.settle(&state, &auth), None);
        assert_eq!(entry.settle(&state, &auth), None);
    }

    #[test]
    fn padded_news_id_settles_on_one_path() {
        let (state, _fake) = state_at("/news/007");
        let auth = AuthViewModel::new(state.clone());
        let mut entry = RouteEntry::default();

        assert_eq!(entry.settle(&state, &auth), Some(Route::NewsDetail(7)));
        assert_eq!(state.router.pathname(), "/news/7");
        assert_eq!(entry.settle(&state, &auth), None);
    }

    #[test]
    fn login_path_becomes_home_with_the_modal_open() {
        let (state, _fake) = state_at("/login");
        let auth = AuthViewModel::new(state.clone());
        let mut entry = RouteEntry::default();

        assert_eq!(entry.settle(&state, &auth), Some(Route::Home));
        assert_eq!(state.router.pathname(), "/");
        assert!(state.modals.is_login_modal_open());
        assert_eq!(entry.settle(&state, &auth), None);
    }

    #[test]
    fn anonymous_visit_to_a_workspace_is_gated_first() {
        let (state, _fake) = state_at("/nurse");
        let auth = AuthViewModel::new(state.clone());
        let mut entry = RouteEntry::default();

        assert_eq!(entry.settle(&state, &auth), Some(Route::Home));
        assert_eq!(state.router.pathname(), "/");
    }
}
