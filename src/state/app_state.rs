// ============================================================================
// APP STATE - Shared state handed to every view and view model
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use crate::config::AppConfig;
use crate::models::Role;
use crate::router::{Route, Router};
use crate::services::{
    ApiClient, AppointmentApi, AuthApi, AvailableDoctorApi, AvailableSlotApi, BlogApi,
    ConsultationInfoApi, DoctorApi, IntroductionApi, LeaveRequestApi, NotificationApi,
    ServiceApi, UserApi,
};
use crate::state::{AuthModalCoordinator, ChangeNotifier, NotificationFeed, SessionStore, Toasts};
use crate::utils::task::TaskScope;

/// Backend collaborators, one handle per API
#[derive(Clone)]
pub struct Backends {
    pub auth: Rc<dyn AuthApi>,
    pub appointments: Rc<dyn AppointmentApi>,
    pub leave_requests: Rc<dyn LeaveRequestApi>,
    pub doctors: Rc<dyn DoctorApi>,
    pub services: Rc<dyn ServiceApi>,
    pub available_doctors: Rc<dyn AvailableDoctorApi>,
    pub available_slots: Rc<dyn AvailableSlotApi>,
    pub notifications: Rc<dyn NotificationApi>,
    pub users: Rc<dyn UserApi>,
    pub consultations: Rc<dyn ConsultationInfoApi>,
    pub introductions: Rc<dyn IntroductionApi>,
    pub blogs: Rc<dyn BlogApi>,
}

impl Backends {
    /// HTTP clients for the clinic backend and the public content backend
    pub fn http(config: &AppConfig, session: &SessionStore) -> Self {
        let api = Rc::new(ApiClient::authenticated(config.api_base_url.clone(), session.clone()));
        let (public, public_staff) = public_clients(&config.public_api_base_url, session);
        log::debug!(
            "🔌 [APP] Backends ready (public content with token: {})",
            public.sends_credentials()
        );

        Self {
            auth: api.clone(),
            appointments: api.clone(),
            leave_requests: api.clone(),
            doctors: api.clone(),
            services: api.clone(),
            available_doctors: api.clone(),
            available_slots: api.clone(),
            notifications: api.clone(),
            users: api,
            consultations: public_staff.clone(),
            introductions: public_staff,
            blogs: public,
        }
    }
}

/// Blog reads go out without credentials. Consultation requests and
/// introductions carry staff/admin endpoints, so they keep the token.
fn public_clients(base_url: &str, session: &SessionStore) -> (Rc<ApiClient>, Rc<ApiClient>) {
    (
        Rc::new(ApiClient::new(base_url)),
        Rc::new(ApiClient::authenticated(base_url, session.clone())),
    )
}

#[derive(Clone)]
pub struct AppState {
    pub notifier: ChangeNotifier,
    pub session: SessionStore,
    pub modals: AuthModalCoordinator,
    pub feed: NotificationFeed,
    pub toasts: Toasts,
    pub router: Router,
    pub backends: Backends,
    page_scope: Rc<RefCell<TaskScope>>,
    poll_ms: u32,
}

impl AppState {
    pub fn new(
        notifier: ChangeNotifier,
        session: SessionStore,
        feed: NotificationFeed,
        router: Router,
        backends: Backends,
        poll_ms: u32,
    ) -> Self {
        Self {
            modals: AuthModalCoordinator::new(notifier.clone()),
            toasts: Toasts::new(notifier.clone()),
            page_scope: Rc::new(RefCell::new(TaskScope::new())),
            notifier,
            session,
            feed,
            router,
            backends,
            poll_ms,
        }
    }

    /// Scope of the page currently on screen
    pub fn page_scope(&self) -> TaskScope {
        self.page_scope.borrow().clone()
    }

    /// Abort the previous page's work and hand out a fresh scope
    pub fn reset_page_scope(&self) -> TaskScope {
        let fresh = TaskScope::new();
        let previous = self.page_scope.replace(fresh.clone());
        previous.cancel();
        fresh
    }

    /// Run `future` under the current page scope
    pub fn spawn_page<F>(&self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        self.page_scope().spawn(future);
    }

    /// Run `future` outside any page scope (modal submissions)
    pub fn spawn_detached<F>(&self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    /// The unread badge is tracked for staff and nurses while signed in
    pub fn sync_notification_feed(&self) {
        let wanted = self.session.is_authenticated()
            && matches!(self.session.role(), Some(Role::Staff) | Some(Role::Nurse));

        if wanted && !self.feed.is_running() {
            self.feed.start(self.backends.notifications.clone(), self.poll_ms);
        } else if !wanted && self.feed.is_running() {
            self.feed.stop();
        }
    }

    /// Land on the role's home route and start the badge feed
    pub fn after_sign_in(&self) {
        self.modals.close_modals();
        self.sync_notification_feed();
        if let Some(role) = self.session.role() {
            self.router.navigate(&Route::home_for(role));
        }
    }

    /// Navigate home first, then tear down the feed and the session
    pub fn sign_out(&self) {
        log::info!("👋 [APP] Signing out");
        self.router.navigate(&Route::Home);
        self.feed.stop();
        self.reset_page_scope();
        self.session.clear_auth();
    }
}
