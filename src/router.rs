// ============================================================================
// ROUTER - Client-side routes and history navigation
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use crate::models::Role;
use crate::state::ChangeNotifier;

/// Path prefixes that need a signed-in user
pub const PROTECTED_PREFIXES: [&str; 5] = ["/admin", "/manager", "/doctor", "/nurse", "/staff"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    NewsDetail(i64),
    Unauthorized,
    AdminAccounts,
    AdminUnauthorized,
    ManagerDashboard,
    DoctorSchedule,
    NurseSchedule,
    NurseLeaveRequests,
    NurseNotifications,
    NurseProfile,
    StaffDashboard,
    StaffLeaveRequests,
    StaffPatientRequests,
    StaffNotifications,
    StaffProfile,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let path = normalize_path(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["news", id] => match id.parse() {
                Ok(id) => Route::NewsDetail(id),
                Err(_) => Route::NotFound(path),
            },
            ["unauthorized"] => Route::Unauthorized,
            ["admin"] | ["admin", "accounts"] => Route::AdminAccounts,
            ["admin", "unauthorized"] => Route::AdminUnauthorized,
            ["manager"] | ["manager", "dashboard"] => Route::ManagerDashboard,
            ["doctor"] | ["doctor", "schedule"] => Route::DoctorSchedule,
            ["nurse"] | ["nurse", "schedule"] => Route::NurseSchedule,
            ["nurse", "leave-requests"] => Route::NurseLeaveRequests,
            ["nurse", "notifications"] => Route::NurseNotifications,
            ["nurse", "profile"] => Route::NurseProfile,
            ["staff"] | ["staff", "dashboard"] => Route::StaffDashboard,
            ["staff", "leave-requests"] => Route::StaffLeaveRequests,
            ["staff", "patient-requests"] => Route::StaffPatientRequests,
            ["staff", "notifications"] => Route::StaffNotifications,
            ["staff", "profile"] => Route::StaffProfile,
            _ => Route::NotFound(path),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::NewsDetail(id) => format!("/news/{}", id),
            Route::Unauthorized => "/unauthorized".to_string(),
            Route::AdminAccounts => "/admin/accounts".to_string(),
            Route::AdminUnauthorized => "/admin/unauthorized".to_string(),
            Route::ManagerDashboard => "/manager/dashboard".to_string(),
            Route::DoctorSchedule => "/doctor/schedule".to_string(),
            Route::NurseSchedule => "/nurse/schedule".to_string(),
            Route::NurseLeaveRequests => "/nurse/leave-requests".to_string(),
            Route::NurseNotifications => "/nurse/notifications".to_string(),
            Route::NurseProfile => "/nurse/profile".to_string(),
            Route::StaffDashboard => "/staff/dashboard".to_string(),
            Route::StaffLeaveRequests => "/staff/leave-requests".to_string(),
            Route::StaffPatientRequests => "/staff/patient-requests".to_string(),
            Route::StaffNotifications => "/staff/notifications".to_string(),
            Route::StaffProfile => "/staff/profile".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Layout role a route renders inside, `None` for public pages
    pub fn layout_role(&self) -> Option<Role> {
        match self {
            Route::AdminAccounts => Some(Role::Admin),
            Route::ManagerDashboard => Some(Role::Manager),
            Route::DoctorSchedule => Some(Role::Doctor),
            Route::NurseSchedule
            | Route::NurseLeaveRequests
            | Route::NurseNotifications
            | Route::NurseProfile => Some(Role::Nurse),
            Route::StaffDashboard
            | Route::StaffLeaveRequests
            | Route::StaffPatientRequests
            | Route::StaffNotifications
            | Route::StaffProfile => Some(Role::Staff),
            Route::Home
            | Route::Login
            | Route::Signup
            | Route::NewsDetail(_)
            | Route::Unauthorized
            | Route::AdminUnauthorized
            | Route::NotFound(_) => None,
        }
    }

    /// Where a role lands after signing in
    pub fn home_for(role: Role) -> Route {
        match role {
            Role::Admin => Route::AdminAccounts,
            Role::Manager => Route::ManagerDashboard,
            Role::Staff => Route::StaffDashboard,
            Role::Doctor => Route::DoctorSchedule,
            Role::Nurse => Route::NurseSchedule,
            Role::Patient => Route::Home,
        }
    }
}

/// Strip query/fragment and a trailing slash
fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Segment-aware: `/staff` and `/staff/x` are protected, `/staffing` is not
pub fn is_protected_path(path: &str) -> bool {
    let path = normalize_path(path);
    PROTECTED_PREFIXES.iter().any(|prefix| {
        path == *prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Current pathname plus navigation. A detached router never touches
/// `window.history` (used by tests).
#[derive(Clone)]
pub struct Router {
    path: Rc<RefCell<String>>,
    use_history: bool,
    notifier: ChangeNotifier,
}

impl Router {
    /// Router bound to `window.location` / `window.history`
    pub fn browser(notifier: ChangeNotifier) -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string());
        Self { path: Rc::new(RefCell::new(normalize_path(&path))), use_history: true, notifier }
    }

    pub fn detached(initial: &str, notifier: ChangeNotifier) -> Self {
        Self { path: Rc::new(RefCell::new(normalize_path(initial))), use_history: false, notifier }
    }

    pub fn pathname(&self) -> String {
        self.path.borrow().clone()
    }

    pub fn route(&self) -> Route {
        Route::parse(&self.path.borrow())
    }

    pub fn navigate(&self, route: &Route) {
        self.go(route, false);
    }

    /// Navigate without leaving a history entry (redirects)
    pub fn replace(&self, route: &Route) {
        self.go(route, true);
    }

    fn go(&self, route: &Route, replace: bool) {
        let path = route.path();
        if *self.path.borrow() == path {
            return;
        }
        if self.use_history {
            if let Err(e) = push_history(&path, replace) {
                log::warn!("⚠️ [ROUTER] history update failed: {:?}", e);
            }
        }
        log::info!("🧭 [ROUTER] {} -> {}", self.path.borrow(), path);
        *self.path.borrow_mut() = path;
        self.notifier.notify();
    }

    /// Sync with the address bar after back/forward
    pub fn sync_from_location(&self) {
        if let Some(path) = web_sys::window().and_then(|w| w.location().pathname().ok()) {
            let path = normalize_path(&path);
            if *self.path.borrow() != path {
                *self.path.borrow_mut() = path;
                self.notifier.notify();
            }
        }
    }
}

fn push_history(path: &str, replace: bool) -> Result<(), JsValue> {
    let history = web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .history()?;
    if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/news/42"), Route::NewsDetail(42));
        assert_eq!(Route::parse("/news/abc"), Route::NotFound("/news/abc".into()));
        assert_eq!(Route::parse("/nurse/leave-requests/"), Route::NurseLeaveRequests);
        assert_eq!(Route::parse("/staff/dashboard?page=2"), Route::StaffDashboard);
        assert_eq!(Route::parse("/admin/unauthorized"), Route::AdminUnauthorized);
    }

    #[test]
    fn every_route_path_parses_back() {
        let routes = [
            Route::Home, Route::Login, Route::Signup, Route::NewsDetail(3), Route::Unauthorized,
            Route::AdminAccounts, Route::AdminUnauthorized, Route::ManagerDashboard,
            Route::DoctorSchedule, Route::NurseSchedule, Route::NurseLeaveRequests,
            Route::NurseNotifications, Route::NurseProfile, Route::StaffDashboard,
            Route::StaffLeaveRequests, Route::StaffPatientRequests, Route::StaffNotifications,
            Route::StaffProfile,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn protected_prefixes_are_segment_aware() {
        assert!(is_protected_path("/staff"));
        assert!(is_protected_path("/nurse/profile"));
        assert!(!is_protected_path("/staffing"));
        assert!(!is_protected_path("/news/1"));
        assert!(!is_protected_path("/unauthorized"));
    }

    #[test]
    fn detached_router_navigates_and_notifies() {
        let notifier = ChangeNotifier::new();
        let hits = Rc::new(std::cell::Cell::new(0));
        let counter = hits.clone();
        notifier.subscribe(move || counter.set(counter.get() + 1));

        let router = Router::detached("/staff/dashboard", notifier);
        router.navigate(&Route::StaffNotifications);
        router.navigate(&Route::StaffNotifications);
        assert_eq!(router.route(), Route::StaffNotifications);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn role_homes_live_inside_their_layout() {
        for role in Role::ALL {
            let home = Route::home_for(role);
            if role.has_workspace() {
                assert_eq!(home.layout_role(), Some(role));
            } else {
                assert_eq!(home, Route::Home);
            }
        }
    }
}
