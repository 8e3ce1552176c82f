// ============================================================================
// NOTIFICATION FEED - Unread count polled for the staff / nurse badge
// ============================================================================

use gloo_timers::callback::Interval;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::services::NotificationApi;
use crate::state::ChangeNotifier;
use crate::utils::task::TaskScope;

/// A `manual` feed never arms timers; refreshes are driven by the caller
#[derive(Clone)]
pub struct NotificationFeed {
    unread: Rc<Cell<u32>>,
    running: Rc<Cell<bool>>,
    poller: Rc<RefCell<Option<Interval>>>,
    scope: Rc<RefCell<TaskScope>>,
    live: bool,
    notifier: ChangeNotifier,
}

impl NotificationFeed {
    pub fn new(notifier: ChangeNotifier) -> Self {
        Self::build(notifier, true)
    }

    pub fn manual(notifier: ChangeNotifier) -> Self {
        Self::build(notifier, false)
    }

    fn build(notifier: ChangeNotifier, live: bool) -> Self {
        Self {
            unread: Rc::new(Cell::new(0)),
            running: Rc::new(Cell::new(false)),
            poller: Rc::new(RefCell::new(None)),
            scope: Rc::new(RefCell::new(TaskScope::new())),
            live,
            notifier,
        }
    }

    pub fn unread(&self) -> u32 {
        self.unread.get()
    }

    pub fn set_unread(&self, count: u32) {
        if self.unread.replace(count) != count {
            self.notifier.notify();
        }
    }

    /// One poll; failures keep the last known count
    pub async fn refresh(&self, api: &dyn NotificationApi) {
        let scope = self.scope.borrow().clone();
        match scope.guard(api.unread_count()).await {
            Some(Ok(count)) => self.set_unread(count),
            Some(Err(e)) => log::warn!("⚠️ [NOTIFICATIONS] Could not refresh unread count: {}", e),
            None => {}
        }
    }

    /// Poll now and then every `period_ms` until `stop`
    pub fn start(&self, api: Rc<dyn NotificationApi>, period_ms: u32) {
        self.stop_polling();
        *self.scope.borrow_mut() = TaskScope::new();
        self.running.set(true);
        if !self.live {
            return;
        }
        log::info!("🔔 [NOTIFICATIONS] Polling unread count every {} ms", period_ms);

        self.spawn_refresh(api.clone());
        let feed = self.clone();
        let interval = Interval::new(period_ms, move || {
            feed.spawn_refresh(api.clone());
        });
        *self.poller.borrow_mut() = Some(interval);
    }

    fn spawn_refresh(&self, api: Rc<dyn NotificationApi>) {
        let feed = self.clone();
        let scope = self.scope.borrow().clone();
        scope.spawn(async move {
            feed.refresh(api.as_ref()).await;
        });
    }

    fn stop_polling(&self) {
        // Dropping the Interval clears it
        self.poller.borrow_mut().take();
        self.scope.borrow().cancel();
        self.running.set(false);
    }

    /// Teardown on sign-out
    pub fn stop(&self) {
        if self.is_running() {
            log::info!("🔕 [NOTIFICATIONS] Polling stopped");
        }
        self.stop_polling();
        self.set_unread(0);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}
