// ============================================================================
// NOTIFICATION VIEWMODEL - Inbox page for staff and nurses
// ============================================================================
// Every change is followed by a list reload and an unread-count refresh so
// the sidebar badge stays in step with the inbox.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use crate::error::AppResult;
use crate::models::{Notification, Page};
use crate::state::AppState;
use crate::viewmodels::remote_data::Resource;

const CONTEXT: &str = "NOTIFICATIONS";

#[derive(Clone)]
pub struct NotificationViewModel {
    state: AppState,
    page: Rc<Cell<u32>>,
    size: u32,
    pub inbox: Resource<Page<Notification>>,
}

impl NotificationViewModel {
    pub fn new(state: AppState, size: u32) -> Self {
        Self {
            inbox: Resource::new(state.notifier.clone()),
            page: Rc::new(Cell::new(1)),
            size,
            state,
        }
    }

    pub async fn enter(&self) -> bool {
        let api = self.state.backends.notifications.clone();
        let (page, size) = (self.page.get(), self.size);
        self.inbox
            .load(&self.state.toasts, CONTEXT, async move { api.list_notifications(page, size).await })
            .await
    }

    pub async fn go_to_page(&self, page: u32) -> bool {
        let page = self.inbox.value().map_or(page.max(1), |current| current.clamp_page(page));
        self.page.set(page);
        self.enter().await
    }

    pub async fn mark_read(&self, id: i64) -> bool {
        let already_read = self
            .inbox
            .value()
            .and_then(|page| page.items.into_iter().find(|n| n.id == id))
            .is_some_and(|n| n.read);
        if already_read {
            return false;
        }
        let api = self.state.backends.notifications.clone();
        self.after_change(api.mark_read(id).await, None).await
    }

    pub async fn mark_all_read(&self) -> bool {
        let api = self.state.backends.notifications.clone();
        self.after_change(api.mark_all_read().await, Some("All notifications marked as read")).await
    }

    async fn after_change(&self, result: AppResult<()>, success: Option<&str>) -> bool {
        if let Err(e) = result {
            self.state.toasts.app_error(CONTEXT, &e);
            return false;
        }
        if let Some(message) = success {
            self.state.toasts.success(message);
        }
        let api = self.state.backends.notifications.clone();
        futures::join!(self.enter(), self.state.feed.refresh(api.as_ref()));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{notification, state_at};
    use futures::executor::block_on;

    fn inbox() -> (NotificationViewModel, Rc<crate::testing::FakeBackend>) {
        let (state, fake) = state_at("/staff/notifications");
        fake.notifications.borrow_mut().extend([notification(1, false), notification(2, false), notification(3, true)]);
        fake.unread.set(2);
        (NotificationViewModel::new(state, 10), fake)
    }

    #[test]
    fn marking_one_read_refreshes_list_and_badge() {
        let (vm, fake) = inbox();
        block_on(vm.enter());

        assert!(block_on(vm.mark_read(1)));
        assert_eq!(*fake.marked_read.borrow(), vec![1]);
        assert_eq!(vm.state.feed.unread(), 1);
        let first = vm.inbox.value().map(|p| p.items[0].read);
        assert_eq!(first, Some(true));
    }

    #[test]
    fn already_read_notification_is_skipped() {
        let (vm, fake) = inbox();
        block_on(vm.enter());
        assert!(!block_on(vm.mark_read(3)));
        assert!(fake.marked_read.borrow().is_empty());
    }

    #[test]
    fn mark_all_read_clears_the_badge() {
        let (vm, fake) = inbox();
        vm.state.feed.set_unread(2);
        assert!(block_on(vm.mark_all_read()));
        assert_eq!(fake.mark_all_calls.get(), 1);
        assert_eq!(vm.state.feed.unread(), 0);
        assert!(vm.inbox.value().is_some_and(|p| p.items.iter().all(|n| n.read)));
    }
}
