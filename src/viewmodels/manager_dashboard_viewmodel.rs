// ============================================================================
// MANAGER DASHBOARD VIEWMODEL - Appointment totals per status
// ============================================================================

use futures::future::join_all;
use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{AppointmentQuery, AppointmentStatus};
use crate::state::AppState;
use crate::viewmodels::introduction_viewmodel::IntroductionViewModel;

pub const COUNTED_STATUSES: [AppointmentStatus; 4] = [
    AppointmentStatus::Pending,
    AppointmentStatus::Confirmed,
    AppointmentStatus::Cancelled,
    AppointmentStatus::Completed,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTotal {
    pub status: AppointmentStatus,
    /// `None` when the count could not be fetched
    pub total: Option<u64>,
}

#[derive(Clone)]
pub struct ManagerDashboardViewModel {
    state: AppState,
    totals: Rc<RefCell<Vec<StatusTotal>>>,
    pub introduction: IntroductionViewModel,
}

impl ManagerDashboardViewModel {
    pub fn new(state: AppState) -> Self {
        Self {
            totals: Rc::new(RefCell::new(Vec::new())),
            introduction: IntroductionViewModel::new(state.clone()),
            state,
        }
    }

    pub fn totals(&self) -> Vec<StatusTotal> {
        self.totals.borrow().clone()
    }

    /// One single-item query per status; only `total_items` is read
    pub async fn enter(&self) {
        let api = self.state.backends.appointments.clone();
        let requests = COUNTED_STATUSES.iter().map(|&status| {
            let api = api.clone();
            let mut query = AppointmentQuery::new(1);
            query.status = Some(status);
            async move { (status, api.list(&query).await) }
        });

        let mut failed = false;
        let totals: Vec<StatusTotal> = join_all(requests)
            .await
            .into_iter()
            .map(|(status, result)| match result {
                Ok(page) => StatusTotal { status, total: Some(page.total_items) },
                Err(e) => {
                    log::error!("❌ [DASHBOARD] {} count failed: {}", status.label(), e);
                    failed = true;
                    StatusTotal { status, total: None }
                }
            })
            .collect();

        if failed {
            self.state.toasts.error("Some appointment totals could not be loaded");
        }
        *self.totals.borrow_mut() = totals;
        self.state.notifier.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{appointment, state_at};
    use futures::executor::block_on;

    #[test]
    fn totals_come_from_page_metadata() {
        let (state, fake) = state_at("/manager/dashboard");
        fake.appointments.borrow_mut().extend([
            appointment(1, 1, AppointmentStatus::Pending),
            appointment(2, 1, AppointmentStatus::Pending),
            appointment(3, 2, AppointmentStatus::Completed),
        ]);
        let vm = ManagerDashboardViewModel::new(state);

        block_on(vm.enter());
        let totals: Vec<_> = vm.totals().into_iter().map(|t| (t.status, t.total)).collect();
        assert_eq!(
            totals,
            vec![
                (AppointmentStatus::Pending, Some(2)),
                (AppointmentStatus::Confirmed, Some(0)),
                (AppointmentStatus::Cancelled, Some(0)),
                (AppointmentStatus::Completed, Some(1)),
            ]
        );
        assert!(fake.appointment_queries.borrow().iter().all(|q| q.size == 1));
    }
}
