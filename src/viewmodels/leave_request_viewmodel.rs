// Read-only leave list for staff and nurses

use std::cell::Cell;
use std::rc::Rc;
use crate::models::{LeaveRequest, LeaveStatus};
use crate::state::AppState;
use crate::viewmodels::remote_data::Resource;

/// Filter chips, `None` shows every request
pub const LEAVE_FILTERS: [Option<LeaveStatus>; 4] =
    [None, Some(LeaveStatus::Pending), Some(LeaveStatus::Approved), Some(LeaveStatus::Rejected)];

pub fn filter_label(filter: Option<LeaveStatus>) -> &'static str {
    match filter {
        None => "All",
        Some(status) => status.label(),
    }
}

#[derive(Clone)]
pub struct LeaveRequestViewModel {
    state: AppState,
    filter: Rc<Cell<Option<LeaveStatus>>>,
    pub requests: Resource<Vec<LeaveRequest>>,
}

impl LeaveRequestViewModel {
    pub fn new(state: AppState) -> Self {
        Self {
            requests: Resource::new(state.notifier.clone()),
            filter: Rc::new(Cell::new(None)),
            state,
        }
    }

    pub fn filter(&self) -> Option<LeaveStatus> {
        self.filter.get()
    }

    pub async fn enter(&self) -> bool {
        let api = self.state.backends.leave_requests.clone();
        let status = self.filter.get();
        self.requests
            .load(&self.state.toasts, "LEAVE", async move { api.list(status).await })
            .await
    }

    pub async fn set_filter(&self, status: Option<LeaveStatus>) -> bool {
        self.filter.set(status);
        self.enter().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{leave, state_at};
    use futures::executor::block_on;

    #[test]
    fn filter_is_sent_to_the_backend() {
        let (state, fake) = state_at("/nurse/leave-requests");
        fake.leaves.borrow_mut().extend([
            leave(1, 3, 4, LeaveStatus::Pending),
            leave(2, 5, 6, LeaveStatus::Approved),
        ]);
        let vm = LeaveRequestViewModel::new(state);

        assert!(block_on(vm.enter()));
        assert_eq!(vm.requests.value().map(|l| l.len()), Some(2));

        assert!(block_on(vm.set_filter(Some(LeaveStatus::Approved))));
        assert_eq!(*fake.leave_filters.borrow(), vec![None, Some(LeaveStatus::Approved)]);
        assert_eq!(vm.requests.value().map(|l| l[0].doctor_id), Some(2));
        assert_eq!(filter_label(vm.filter()), "Approved");
    }
}
