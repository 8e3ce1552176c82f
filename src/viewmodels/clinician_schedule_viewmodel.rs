// ============================================================================
// CLINICIAN SCHEDULE VIEWMODEL - One day of appointments (doctor / nurse)
// ============================================================================
// Doctors only see their own bookings; nurses see the whole clinic day.
// ============================================================================

use chrono::{Duration, NaiveDate};
use std::cell::Cell;
use std::rc::Rc;
use crate::models::{Appointment, AppointmentQuery, Page, Role};
use crate::state::AppState;
use crate::viewmodels::remote_data::Resource;

const DAY_PAGE_SIZE: u32 = 100;

#[derive(Clone)]
pub struct ClinicianScheduleViewModel {
    state: AppState,
    date: Rc<Cell<NaiveDate>>,
    pub day: Resource<Page<Appointment>>,
}

impl ClinicianScheduleViewModel {
    pub fn new(state: AppState, today: NaiveDate) -> Self {
        Self {
            day: Resource::new(state.notifier.clone()),
            date: Rc::new(Cell::new(today)),
            state,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date.get()
    }

    fn query(&self) -> AppointmentQuery {
        let date = self.date.get();
        let mut query = AppointmentQuery::new(DAY_PAGE_SIZE);
        query.from = Some(date);
        query.to = Some(date);
        if let Some(user) = self.state.session.user().filter(|u| u.role == Role::Doctor) {
            query.doctor_id = Some(user.id);
        }
        query
    }

    pub async fn enter(&self) -> bool {
        let api = self.state.backends.appointments.clone();
        let query = self.query();
        self.day
            .load(&self.state.toasts, "SCHEDULE", async move { api.list(&query).await })
            .await
    }

    pub async fn set_date(&self, date: NaiveDate) -> bool {
        self.date.set(date);
        self.enter().await
    }

    /// `days` may be negative
    pub async fn shift(&self, days: i64) -> bool {
        self.set_date(self.date.get() + Duration::days(days)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;
    use crate::testing::{appointment, date, nurse_user, staff_user, state_at};
    use futures::executor::block_on;

    #[test]
    fn doctor_sees_only_own_day() {
        let (state, fake) = state_at("/doctor/schedule");
        let mut doctor = staff_user();
        doctor.id = 3;
        doctor.role = Role::Doctor;
        state.session.set_auth(doctor, "t".into());
        fake.appointments.borrow_mut().extend([
            appointment(1, 3, AppointmentStatus::Confirmed),
            appointment(2, 4, AppointmentStatus::Confirmed),
        ]);
        let vm = ClinicianScheduleViewModel::new(state, date(20));

        assert!(block_on(vm.enter()));
        let query = fake.appointment_queries.borrow()[0].clone();
        assert_eq!((query.doctor_id, query.from, query.to), (Some(3), Some(date(20)), Some(date(20))));
        assert_eq!(vm.day.value().map(|p| p.items.len()), Some(1));
    }

    #[test]
    fn nurse_sees_clinic_day_and_can_step_days() {
        let (state, fake) = state_at("/nurse/schedule");
        state.session.set_auth(nurse_user(), "t".into());
        let vm = ClinicianScheduleViewModel::new(state, date(20));

        assert!(block_on(vm.shift(-1)));
        let query = fake.appointment_queries.borrow()[0].clone();
        assert_eq!((query.doctor_id, query.from), (None, Some(date(19))));
        assert_eq!(vm.date(), date(19));
    }
}
