// ============================================================================
// LAYOUT VIEWMODEL - Role gate and workspace navigation
// ============================================================================

use crate::models::Role;
use crate::router::{is_protected_path, Route};
use crate::state::{AppState, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    Redirect(Route),
}

/// Gate of a layout owned by `layout_role`, evaluated on every render
pub fn evaluate_gate(layout_role: Role, session: &Session, path: &str) -> GateDecision {
    if session.is_authenticated {
        if session.role() != Some(layout_role) {
            return GateDecision::Redirect(Route::Unauthorized);
        }
    } else if is_protected_path(path) {
        return GateDecision::Redirect(Route::Home);
    }
    GateDecision::Render
}

/// Decision for any route, public or role-gated
pub fn resolve_route(route: &Route, session: &Session) -> GateDecision {
    match route {
        Route::AdminUnauthorized => GateDecision::Redirect(Route::Unauthorized),
        Route::Login | Route::Signup if session.is_authenticated => match session.role() {
            Some(role) => GateDecision::Redirect(Route::home_for(role)),
            None => GateDecision::Redirect(Route::Home),
        },
        _ => match route.layout_role() {
            Some(role) => evaluate_gate(role, session, &route.path()),
            None if !session.is_authenticated && is_protected_path(&route.path()) => {
                GateDecision::Redirect(Route::Home)
            }
            None => GateDecision::Render,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: Route,
    pub current: bool,
    pub badge: Option<u32>,
}

fn items_for(role: Role) -> Vec<(&'static str, &'static str, Route)> {
    match role {
        Role::Admin => vec![("Accounts", "👥", Route::AdminAccounts)],
        Role::Manager => vec![("Dashboard", "📊", Route::ManagerDashboard)],
        Role::Doctor => vec![("My schedule", "🗓️", Route::DoctorSchedule)],
        Role::Nurse => vec![
            ("Schedule", "🗓️", Route::NurseSchedule),
            ("Leave requests", "🏖️", Route::NurseLeaveRequests),
            ("Notifications", "🔔", Route::NurseNotifications),
            ("Profile", "👤", Route::NurseProfile),
        ],
        Role::Staff => vec![
            ("Appointments", "📅", Route::StaffDashboard),
            ("Leave requests", "🏖️", Route::StaffLeaveRequests),
            ("Patient requests", "📨", Route::StaffPatientRequests),
            ("Notifications", "🔔", Route::StaffNotifications),
            ("Profile", "👤", Route::StaffProfile),
        ],
        Role::Patient => Vec::new(),
    }
}

/// Static items for `role`; `current` is an exact path match and the
/// notifications entry carries the unread badge
pub fn navigation_for(role: Role, path: &str, unread: u32) -> Vec<NavItem> {
    items_for(role)
        .into_iter()
        .map(|(label, icon, route)| {
            let badge = match route {
                Route::NurseNotifications | Route::StaffNotifications if unread > 0 => Some(unread),
                _ => None,
            };
            NavItem { current: route.path() == path, label, icon, route, badge }
        })
        .collect()
}

#[derive(Clone)]
pub struct LayoutViewModel {
    state: AppState,
}

impl LayoutViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn navigation(&self, layout_role: Role) -> Vec<NavItem> {
        navigation_for(layout_role, &self.state.router.pathname(), self.state.feed.unread())
    }

    pub fn logout(&self) {
        self.state.sign_out();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::testing::{nurse_user, state_at, staff_user};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn signed_in(user: User) -> Session {
        Session { user: Some(user), token: Some("t".into()), is_authenticated: true }
    }

    #[test]
    fn nurse_layout_accepts_mixed_case_role() {
        let user: User = serde_json::from_str(
            r#"{"id":7,"fullName":"Lan","email":"lan@clinic.vn","role":"Nurse"}"#,
        )
        .unwrap();
        assert_eq!(evaluate_gate(Role::Nurse, &signed_in(user), "/nurse/schedule"), GateDecision::Render);
    }

    #[test]
    fn wrong_role_goes_to_unauthorized() {
        assert_eq!(
            evaluate_gate(Role::Admin, &signed_in(nurse_user()), "/admin/accounts"),
            GateDecision::Redirect(Route::Unauthorized)
        );
    }

    #[test]
    fn anonymous_visitor_is_sent_home_from_protected_paths() {
        let anonymous = Session::default();
        assert_eq!(
            evaluate_gate(Role::Staff, &anonymous, "/staff/dashboard"),
            GateDecision::Redirect(Route::Home)
        );
        assert_eq!(
            resolve_route(&Route::parse("/staff/unknown"), &anonymous),
            GateDecision::Redirect(Route::Home)
        );
        assert_eq!(resolve_route(&Route::Home, &anonymous), GateDecision::Render);
    }

    #[test]
    fn admin_unauthorized_alias_and_signed_in_login() {
        let session = signed_in(staff_user());
        assert_eq!(
            resolve_route(&Route::AdminUnauthorized, &session),
            GateDecision::Redirect(Route::Unauthorized)
        );
        assert_eq!(
            resolve_route(&Route::Login, &session),
            GateDecision::Redirect(Route::StaffDashboard)
        );
        assert_eq!(resolve_route(&Route::Login, &Session::default()), GateDecision::Render);
    }

    #[test]
    fn navigation_marks_current_and_badges_notifications() {
        let items = navigation_for(Role::Staff, "/staff/leave-requests", 3);
        let current: Vec<_> = items.iter().filter(|i| i.current).map(|i| i.route.clone()).collect();
        assert_eq!(current, vec![Route::StaffLeaveRequests]);

        let badged: Vec<_> = items.iter().filter_map(|i| i.badge.map(|b| (i.route.clone(), b))).collect();
        assert_eq!(badged, vec![(Route::StaffNotifications, 3)]);

        assert!(navigation_for(Role::Nurse, "/nurse/schedule", 0).iter().all(|i| i.badge.is_none()));
    }

    #[test]
    fn logout_navigates_before_clearing_the_session() {
        let (state, _) = state_at("/staff/dashboard");
        state.session.set_auth(staff_user(), "tok".into());
        state.sync_notification_feed();

        let events = Rc::new(RefCell::new(Vec::new()));
        let log = events.clone();
        let (router, session) = (state.router.clone(), state.session.clone());
        state.notifier.subscribe(move || {
            log.borrow_mut().push((router.pathname(), session.is_authenticated()));
        });

        LayoutViewModel::new(state.clone()).logout();

        let events = events.borrow();
        assert_eq!(events.first(), Some(&("/".to_string(), true)));
        assert_eq!(events.last(), Some(&("/".to_string(), false)));
        assert!(!state.feed.is_running());
    }
}
