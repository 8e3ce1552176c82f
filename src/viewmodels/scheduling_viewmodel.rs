// ============================================================================
// SCHEDULING VIEWMODEL - Staff appointment page
// ============================================================================
// List with search / date range / status tabs / pagination, the booking
// modal with slot validation, and the per-appointment actions (confirm,
// cancel, reassign, detail). Every mutation is one request followed by a
// refetch of the current page.
// ============================================================================

use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;
use crate::error::{AppError, AppResult, FieldErrors};
use crate::models::{
    find_blocking_leave, Appointment, AppointmentQuery, AvailableSlot, CancelRequest, ClinicService,
    CreateAppointmentRequest, Doctor, LeaveRequest, Page, ReassignRequest, StatusFilter,
    TimeValidationRequest,
};
use crate::state::AppState;
use crate::utils::task::TaskScope;
use crate::utils::validation::{max_len, normalize_text, optional_text, required, validate_optional_email, validate_phone};
use crate::viewmodels::form_modal::{FormFields, FormModal};
use crate::viewmodels::remote_data::{RemoteData, Resource};

const CONTEXT: &str = "SCHEDULING";
const SLOT_TAKEN_MESSAGE: &str = "This time slot is no longer available";

/// `yyyy-mm-dd` from a date input; blank or malformed gives `None`
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn leave_message(leave: &LeaveRequest) -> String {
    format!("{} is on leave ({})", leave.doctor_name, leave.period())
}

/// Outcome of the last slot check shown under the slot picker
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlotCheck {
    #[default]
    Unchecked,
    Checking,
    Valid,
    Invalid(String),
}

impl SlotCheck {
    pub fn is_invalid(&self) -> bool {
        matches!(self, SlotCheck::Invalid(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFields {
    pub service_id: Option<i64>,
    pub date: String,
    pub doctor_id: Option<i64>,
    pub slot: Option<AvailableSlot>,
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_email: String,
    pub note: String,
}

impl FormFields for BookingFields {
    type Payload = CreateAppointmentRequest;

    fn validate(&self) -> Result<CreateAppointmentRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        let date = parse_date_input(&self.date);
        let patient_name = normalize_text(&self.patient_name);

        if self.service_id.is_none() {
            errors.insert("service", "Please choose a service");
        }
        if date.is_none() {
            errors.insert("date", "Please choose a date");
        }
        if self.doctor_id.is_none() {
            errors.insert("doctor", "Please choose a doctor");
        }
        if self.slot.is_none() {
            errors.insert("slot", "Please choose a time slot");
        }
        errors.check("patientName", required(&patient_name, "Patient name"));
        errors.check("patientName", max_len(&patient_name, 100, "Patient name"));
        errors.check("patientPhone", validate_phone(&self.patient_phone));
        errors.check("patientEmail", validate_optional_email(&self.patient_email));
        errors.check("note", max_len(&normalize_text(&self.note), 500, "Note"));

        match (self.service_id, date, self.doctor_id, self.slot) {
            (Some(service_id), Some(appointment_date), Some(doctor_id), Some(slot)) if errors.is_empty() => {
                Ok(CreateAppointmentRequest {
                    doctor_id,
                    service_id,
                    appointment_date,
                    start_time: slot.start_time,
                    end_time: slot.end_time,
                    patient_name,
                    patient_phone: self.patient_phone.trim().to_string(),
                    patient_email: optional_text(&self.patient_email),
                    note: optional_text(&self.note),
                })
            }
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReassignFields {
    pub doctor_id: Option<i64>,
    pub reason: String,
}

impl FormFields for ReassignFields {
    type Payload = ReassignRequest;

    fn validate(&self) -> Result<ReassignRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("reason", max_len(&normalize_text(&self.reason), 500, "Reason"));
        match self.doctor_id {
            Some(new_doctor_id) => errors.into_result(ReassignRequest {
                new_doctor_id,
                reason: optional_text(&self.reason),
            }),
            None => {
                errors.insert("doctor", "Please choose a doctor");
                Err(errors)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SchedulingData {
    pub query: AppointmentQuery,
    pub status_filter: StatusFilter,
    pub doctors: Vec<Doctor>,
    pub services: Vec<ClinicService>,
    pub leaves: Vec<LeaveRequest>,
    pub slots: RemoteData<Vec<AvailableSlot>>,
    pub slot_check: SlotCheck,
    pub detail: Option<Appointment>,
    /// Appointment whose detail modal is open (or opening)
    pub detail_id: Option<i64>,
    pub reassign_target: Option<Appointment>,
    pub reassign_doctors: RemoteData<Vec<Doctor>>,
    pub busy_id: Option<i64>,
}

impl SchedulingData {
    fn new(page_size: u32) -> Self {
        Self {
            query: AppointmentQuery::new(page_size),
            status_filter: StatusFilter::All,
            doctors: Vec::new(),
            services: Vec::new(),
            leaves: Vec::new(),
            slots: RemoteData::NotAsked,
            slot_check: SlotCheck::Unchecked,
            detail: None,
            detail_id: None,
            reassign_target: None,
            reassign_doctors: RemoteData::NotAsked,
            busy_id: None,
        }
    }
}

#[derive(Clone)]
pub struct SchedulingViewModel {
    state: AppState,
    data: Rc<RefCell<SchedulingData>>,
    pub appointments: Resource<Page<Appointment>>,
    pub booking: FormModal<BookingFields>,
    pub reassign: FormModal<ReassignFields>,
}

impl SchedulingViewModel {
    pub fn new(state: AppState, page_size: u32) -> Self {
        Self {
            data: Rc::new(RefCell::new(SchedulingData::new(page_size))),
            appointments: Resource::new(state.notifier.clone()),
            booking: FormModal::new(state.notifier.clone()),
            reassign: FormModal::new(state.notifier.clone()),
            state,
        }
    }

    pub fn snapshot(&self) -> SchedulingData {
        self.data.borrow().clone()
    }

    fn mutate(&self, edit: impl FnOnce(&mut SchedulingData)) {
        edit(&mut self.data.borrow_mut());
        self.state.notifier.notify();
    }

    // ---------------------------------------------------------------------
    // Loading
    // ---------------------------------------------------------------------

    /// Page entry: reference data and the first page in parallel
    pub async fn enter(&self) {
        log::info!("📅 [{}] Loading appointment page", CONTEXT);
        futures::join!(self.load_reference_data(), self.load_appointments());
    }

    pub async fn load_reference_data(&self) {
        let backends = self.state.backends.clone();
        let (doctors, services, leaves) = futures::join!(
            backends.doctors.list_doctors(),
            backends.services.list_services(),
            backends.leave_requests.list(None),
        );

        let toasts = &self.state.toasts;
        let doctors = doctors.map_err(|e| toasts.app_error(CONTEXT, &e)).unwrap_or_default();
        let services = services.map_err(|e| toasts.app_error(CONTEXT, &e)).unwrap_or_default();
        let leaves = leaves.map_err(|e| toasts.app_error(CONTEXT, &e)).unwrap_or_default();
        log::info!(
            "✅ [{}] {} doctors, {} services, {} leave requests",
            CONTEXT,
            doctors.len(),
            services.len(),
            leaves.len()
        );
        self.mutate(|data| {
            data.doctors = doctors;
            data.services = services;
            data.leaves = leaves;
        });
    }

    pub async fn load_appointments(&self) -> bool {
        let query = self.data.borrow().query.clone();
        let api = self.state.backends.appointments.clone();
        self.appointments
            .load(&self.state.toasts, CONTEXT, async move { api.list(&query).await })
            .await
    }

    // ---------------------------------------------------------------------
    // Filters and pagination
    // ---------------------------------------------------------------------

    /// Any filter change goes back to page 1
    async fn refilter(&self, edit: impl FnOnce(&mut AppointmentQuery)) -> bool {
        {
            let mut data = self.data.borrow_mut();
            edit(&mut data.query);
            data.query.page = 1;
        }
        self.load_appointments().await
    }

    pub async fn set_search(&self, search: &str) -> bool {
        let search = normalize_text(search);
        self.refilter(|query| query.search = search).await
    }

    pub async fn set_date_range(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                self.state.toasts.error("The start date must not be after the end date");
                return false;
            }
        }
        self.refilter(|query| {
            query.from = from;
            query.to = to;
        })
        .await
    }

    pub async fn set_status(&self, filter: StatusFilter) -> bool {
        self.data.borrow_mut().status_filter = filter;
        self.refilter(|query| query.status = filter.status()).await
    }

    pub async fn set_page_size(&self, size: u32) -> bool {
        self.refilter(|query| query.size = size.max(1)).await
    }

    pub async fn go_to_page(&self, page: u32) -> bool {
        let page = match self.appointments.value() {
            Some(current) => current.clamp_page(page),
            None => page.max(1),
        };
        self.data.borrow_mut().query.page = page;
        self.load_appointments().await
    }

    // ---------------------------------------------------------------------
    // Booking
    // ---------------------------------------------------------------------

    pub fn open_booking(&self) {
        self.mutate(|data| {
            data.slots = RemoteData::NotAsked;
            data.slot_check = SlotCheck::Unchecked;
        });
        self.booking.open();
    }

    pub fn close_booking(&self) -> bool {
        self.booking.close()
    }

    /// Leave request blocking `doctor_id` on `date`, if any
    pub fn blocking_leave(&self, doctor_id: i64, date: NaiveDate) -> Option<LeaveRequest> {
        find_blocking_leave(&self.data.borrow().leaves, doctor_id, date).cloned()
    }

    /// Service, date or doctor changed: the chosen slot no longer applies
    async fn rechoose(&self, edit: impl FnOnce(&mut BookingFields)) {
        self.booking.update(|fields| {
            edit(fields);
            fields.slot = None;
        });
        self.mutate(|data| data.slot_check = SlotCheck::Unchecked);
        self.load_slots().await;
    }

    pub async fn choose_service(&self, service_id: Option<i64>) {
        self.rechoose(|fields| fields.service_id = service_id).await;
    }

    pub async fn choose_date(&self, date: &str) {
        let date = date.trim().to_string();
        self.rechoose(|fields| fields.date = date).await;
    }

    pub async fn choose_doctor(&self, doctor_id: Option<i64>) {
        self.rechoose(|fields| fields.doctor_id = doctor_id).await;
    }

    /// Slots for the chosen doctor, date and service. A doctor on leave is
    /// rejected here without asking the backend.
    pub async fn load_slots(&self) {
        let fields = self.booking.fields();
        let (doctor_id, date, service_id) =
            match (fields.doctor_id, parse_date_input(&fields.date), fields.service_id) {
                (Some(doctor_id), Some(date), Some(service_id)) => (doctor_id, date, service_id),
                _ => {
                    self.mutate(|data| data.slots = RemoteData::NotAsked);
                    return;
                }
            };

        if let Some(leave) = self.blocking_leave(doctor_id, date) {
            log::info!("🏖️ [{}] Doctor {} on leave {}, no slots requested", CONTEXT, doctor_id, date);
            self.mutate(|data| {
                data.slots = RemoteData::Loaded(Vec::new());
                data.slot_check = SlotCheck::Invalid(leave_message(&leave));
            });
            return;
        }

        self.mutate(|data| data.slots = RemoteData::Loading);
        let result = self.state.backends.available_slots.available_slots(doctor_id, date, service_id).await;
        match result {
            Ok(slots) => self.mutate(|data| data.slots = RemoteData::Loaded(slots)),
            Err(e) => {
                self.state.toasts.app_error(CONTEXT, &e);
                self.mutate(|data| data.slots = RemoteData::Failed(e.user_message()));
            }
        }
    }

    /// Pick a slot by its `<option>` value and check it right away
    pub async fn choose_slot(&self, key: &str) -> bool {
        let slot = AvailableSlot::from_key(key);
        self.booking.update(|fields| fields.slot = slot);
        if slot.is_none() {
            self.mutate(|data| data.slot_check = SlotCheck::Unchecked);
            return false;
        }
        self.check_slot().await
    }

    pub async fn check_slot(&self) -> bool {
        let fields = self.booking.fields();
        let request = match (fields.doctor_id, parse_date_input(&fields.date), fields.slot) {
            (Some(doctor_id), Some(appointment_date), Some(slot)) => TimeValidationRequest {
                doctor_id,
                appointment_date,
                start_time: slot.start_time,
                end_time: slot.end_time,
                exclude_appointment_id: None,
            },
            _ => return false,
        };

        self.mutate(|data| data.slot_check = SlotCheck::Checking);
        match self.verify_slot(&request).await {
            Ok(()) => true,
            Err(AppError::Validation(_)) => false,
            Err(e) => {
                self.state.toasts.app_error(CONTEXT, &e);
                self.mutate(|data| data.slot_check = SlotCheck::Unchecked);
                false
            }
        }
    }

    /// Leave check first (local), then the backend's double-booking check.
    /// A rejection marks the slot invalid.
    async fn verify_slot(&self, request: &TimeValidationRequest) -> AppResult<()> {
        if let Some(leave) = self.blocking_leave(request.doctor_id, request.appointment_date) {
            return Err(self.reject_slot(leave_message(&leave)));
        }

        let verdict = self.state.backends.appointments.validate_appointment_time(request).await?;
        if verdict.valid {
            self.mutate(|data| data.slot_check = SlotCheck::Valid);
            Ok(())
        } else {
            let message = verdict
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| SLOT_TAKEN_MESSAGE.to_string());
            Err(self.reject_slot(message))
        }
    }

    fn reject_slot(&self, message: String) -> AppError {
        log::warn!("⚠️ [{}] Slot rejected: {}", CONTEXT, message);
        self.mutate(|data| data.slot_check = SlotCheck::Invalid(message.clone()));
        AppError::Validation(FieldErrors::single("slot", message))
    }

    pub async fn submit_booking(&self) -> Option<Appointment> {
        let scope = self.state.page_scope();
        let this = self.clone();
        let created = self
            .booking
            .submit(
                &self.state.toasts,
                CONTEXT,
                |appointment: &Appointment| format!("Appointment booked for {}", appointment.patient.full_name),
                |request| async move {
                    match this.verify_slot(&TimeValidationRequest::from(&request)).await {
                        Ok(()) => this.state.backends.appointments.create(&request).await,
                        Err(e) => Err(e),
                    }
                },
            )
            .await?;

        log::info!("✅ [{}] Appointment {} created", CONTEXT, created.id);
        self.refetch_within(&scope).await;
        Some(created)
    }

    // ---------------------------------------------------------------------
    // Appointment actions
    // ---------------------------------------------------------------------

    fn find(&self, id: i64) -> Option<Appointment> {
        let listed = self
            .appointments
            .value()
            .and_then(|page| page.items.into_iter().find(|a| a.id == id));
        listed.or_else(|| self.data.borrow().detail.clone().filter(|a| a.id == id))
    }

    /// Runs `action` on `id` unless another action is in flight or the
    /// appointment's status does not allow it
    async fn act<Fut>(
        &self,
        id: i64,
        allowed: fn(&Appointment) -> bool,
        refused: &str,
        done: &str,
        action: impl FnOnce(Appointment) -> Fut,
    ) -> bool
    where
        Fut: std::future::Future<Output = AppResult<Option<String>>>,
    {
        let appointment = match self.find(id) {
            Some(appointment) => appointment,
            None => {
                log::warn!("⚠️ [{}] Appointment {} is not on this page", CONTEXT, id);
                return false;
            }
        };
        if !allowed(&appointment) {
            self.state.toasts.error(refused);
            return false;
        }
        if self.data.borrow().busy_id.is_some() {
            return false;
        }

        let scope = self.state.page_scope();
        self.mutate(|data| data.busy_id = Some(id));
        let result = action(appointment).await;
        self.mutate(|data| data.busy_id = None);

        match result {
            Ok(message) => {
                self.state.toasts.success(message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| done.to_string()));
                self.mutate(|data| {
                    if data.detail_id == Some(id) {
                        data.detail = None;
                        data.detail_id = None;
                    }
                });
                self.refetch_within(&scope).await;
                true
            }
            Err(e) => {
                self.state.toasts.app_error(CONTEXT, &e);
                false
            }
        }
    }

    /// Refetch after a mutation, unless the page was left meanwhile
    async fn refetch_within(&self, scope: &TaskScope) {
        if scope.guard(self.load_appointments()).await.is_none() {
            log::debug!("⏭️ [{}] Page left, list not refetched", CONTEXT);
        }
    }

    pub async fn confirm(&self, id: i64) -> bool {
        let api = self.state.backends.appointments.clone();
        self.act(
            id,
            |a| a.status.can_confirm(),
            "Only pending appointments can be confirmed",
            "Appointment confirmed",
            |a| async move { api.confirm(a.id).await },
        )
        .await
    }

    pub async fn cancel(&self, id: i64, reason: Option<String>) -> bool {
        let api = self.state.backends.appointments.clone();
        let request = CancelRequest { reason: reason.as_deref().and_then(optional_text) };
        self.act(
            id,
            |a| a.status.can_cancel(),
            "Only pending or confirmed appointments can be cancelled",
            "Appointment cancelled",
            |a| async move { api.cancel(a.id, &request).await },
        )
        .await
    }

    /// Open the reassign modal with the doctors free at the same time
    pub async fn open_reassign(&self, id: i64) -> bool {
        let appointment = match self.find(id) {
            Some(appointment) => appointment,
            None => return false,
        };
        if !appointment.status.can_reassign() {
            self.state.toasts.error("Only pending or confirmed appointments can be reassigned");
            return false;
        }

        self.mutate(|data| {
            data.reassign_target = Some(appointment.clone());
            data.reassign_doctors = RemoteData::Loading;
        });
        self.reassign.open();

        let result = self
            .state
            .backends
            .available_doctors
            .available_doctors(appointment.appointment_date, appointment.start_time, appointment.end_time)
            .await;
        match result {
            Ok(doctors) => {
                let current = appointment.doctor.id;
                let candidates: Vec<Doctor> = doctors.into_iter().filter(|d| d.id != current).collect();
                self.mutate(|data| data.reassign_doctors = RemoteData::Loaded(candidates));
                true
            }
            Err(e) => {
                self.state.toasts.app_error(CONTEXT, &e);
                self.mutate(|data| data.reassign_doctors = RemoteData::Failed(e.user_message()));
                false
            }
        }
    }

    pub fn close_reassign(&self) -> bool {
        if !self.reassign.close() {
            return false;
        }
        self.mutate(|data| {
            data.reassign_target = None;
            data.reassign_doctors = RemoteData::NotAsked;
        });
        true
    }

    pub async fn submit_reassign(&self) -> bool {
        let target = match self.data.borrow().reassign_target.clone() {
            Some(target) => target,
            None => return false,
        };
        let api = self.state.backends.appointments.clone();
        let id = target.id;
        let scope = self.state.page_scope();
        let result = self
            .reassign
            .submit(
                &self.state.toasts,
                CONTEXT,
                |message: &Option<String>| {
                    message
                        .clone()
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| "Appointment reassigned".to_string())
                },
                |request| async move { api.reassign(id, &request).await },
            )
            .await;

        if result.is_none() {
            return false;
        }
        self.mutate(|data| {
            data.reassign_target = None;
            data.reassign_doctors = RemoteData::NotAsked;
        });
        self.refetch_within(&scope).await;
        true
    }

    /// Show the listed copy at once, then replace it with the full record
    pub async fn open_detail(&self, id: i64) {
        let listed = self.find(id);
        self.mutate(|data| {
            data.detail = listed;
            data.detail_id = Some(id);
        });

        match self.state.backends.appointments.detail(id).await {
            Ok(full) => self.mutate(|data| {
                if data.detail_id == Some(id) {
                    data.detail = Some(full);
                }
            }),
            Err(e) => {
                self.state.toasts.app_error(CONTEXT, &e);
            }
        }
    }

    pub fn close_detail(&self) {
        self.mutate(|data| {
            data.detail = None;
            data.detail_id = None;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppointmentStatus, LeaveStatus};
    use crate::state::ToastKind;
    use crate::testing::{appointment, doctor, leave, service, state_at, time, FakeBackend};
    use futures::executor::block_on;

    fn page() -> (SchedulingViewModel, Rc<FakeBackend>) {
        let (state, fake) = state_at("/staff/dashboard");
        fake.doctors.borrow_mut().extend([doctor(1, "Dr. An"), doctor(2, "Dr. Binh"), doctor(3, "Dr. Cuong")]);
        fake.services.borrow_mut().push(service(1, "General check-up"));
        fake.slots.borrow_mut().push(AvailableSlot { start_time: time(8, 0), end_time: time(8, 30), available: true });
        (SchedulingViewModel::new(state, 10), fake)
    }

    fn fill_booking(vm: &SchedulingViewModel, doctor_id: i64) {
        vm.open_booking();
        vm.booking.update(|f| {
            f.service_id = Some(1);
            f.date = "2026-10-20".into();
            f.doctor_id = Some(doctor_id);
            f.slot = AvailableSlot::from_key("08:00-08:30");
            f.patient_name = " Nguyen  Van A ".into();
            f.patient_phone = "0912345678".into();
        });
    }

    #[test]
    fn entering_loads_reference_data_and_first_page() {
        let (vm, fake) = page();
        fake.appointments.borrow_mut().push(appointment(1, 1, AppointmentStatus::Pending));

        block_on(vm.enter());
        let data = vm.snapshot();
        assert_eq!(data.doctors.len(), 3);
        assert_eq!(data.services.len(), 1);
        assert_eq!(vm.appointments.value().map(|p| p.items.len()), Some(1));
        assert_eq!(fake.appointment_queries.borrow()[0].page, 1);
    }

    #[test]
    fn filter_changes_go_back_to_first_page() {
        let (vm, fake) = page();
        for id in 1..=25 {
            fake.appointments.borrow_mut().push(appointment(id, 1, AppointmentStatus::Pending));
        }
        block_on(vm.enter());
        block_on(vm.go_to_page(3));
        assert_eq!(fake.appointment_queries.borrow().last().map(|q| q.page), Some(3));

        block_on(vm.set_status(StatusFilter::Only(AppointmentStatus::Confirmed)));
        let last = fake.appointment_queries.borrow().last().cloned().unwrap();
        assert_eq!(last.page, 1);
        assert_eq!(last.status, Some(AppointmentStatus::Confirmed));

        block_on(vm.go_to_page(2));
        block_on(vm.set_search("  van  "));
        let last = fake.appointment_queries.borrow().last().cloned().unwrap();
        assert_eq!((last.page, last.search.as_str()), (1, "van"));
    }

    #[test]
    fn inverted_date_range_is_refused_locally() {
        let (vm, fake) = page();
        let from = parse_date_input("2026-10-21");
        let to = parse_date_input("2026-10-20");
        assert!(!block_on(vm.set_date_range(from, to)));
        assert!(fake.appointment_queries.borrow().is_empty());
    }

    #[test]
    fn doctor_on_leave_is_rejected_without_any_request() {
        let (vm, fake) = page();
        fake.leaves.borrow_mut().push(leave(3, 19, 21, LeaveStatus::Pending));
        block_on(vm.load_reference_data());

        vm.open_booking();
        block_on(vm.choose_service(Some(1)));
        block_on(vm.choose_date("2026-10-20"));
        block_on(vm.choose_doctor(Some(3)));
        assert!(fake.slot_calls.borrow().is_empty());
        assert!(vm.snapshot().slot_check.is_invalid());

        fill_booking(&vm, 3);
        assert_eq!(block_on(vm.submit_booking()), None);
        assert!(fake.validations.borrow().is_empty());
        assert!(fake.created.borrow().is_empty());
        assert!(vm.snapshot().slot_check.is_invalid());
    }

    #[test]
    fn rejected_leave_does_not_block() {
        let (vm, fake) = page();
        fake.leaves.borrow_mut().push(leave(3, 19, 21, LeaveStatus::Rejected));
        block_on(vm.load_reference_data());

        vm.open_booking();
        block_on(vm.choose_service(Some(1)));
        block_on(vm.choose_date("2026-10-20"));
        block_on(vm.choose_doctor(Some(3)));
        assert_eq!(fake.slot_calls.borrow().len(), 1);
        assert_eq!(vm.snapshot().slots.value().map(Vec::len), Some(1));
    }

    #[test]
    fn conflicting_slot_is_marked_invalid_and_nothing_is_created() {
        let (vm, fake) = page();
        *fake.time_conflict.borrow_mut() = Some("Dr. An already has an appointment at 08:00".into());
        fill_booking(&vm, 1);

        assert!(!block_on(vm.choose_slot("08:00-08:30")));
        assert_eq!(
            vm.snapshot().slot_check,
            SlotCheck::Invalid("Dr. An already has an appointment at 08:00".into())
        );

        assert_eq!(block_on(vm.submit_booking()), None);
        assert!(fake.created.borrow().is_empty());
        assert!(vm.booking.is_open());
    }

    #[test]
    fn valid_booking_is_created_and_list_refetched() {
        let (vm, fake) = page();
        fill_booking(&vm, 1);

        let created = block_on(vm.submit_booking());
        assert!(created.is_some());
        let sent = fake.created.borrow()[0].clone();
        assert_eq!(sent.patient_name, "Nguyen Van A");
        assert_eq!(sent.patient_email, None);
        assert_eq!(fake.appointment_queries.borrow().len(), 1);
        assert!(!vm.booking.is_open());
        assert_eq!(vm.snapshot().slot_check, SlotCheck::Valid);
    }

    #[test]
    fn disallowed_transitions_never_reach_the_backend() {
        let (vm, fake) = page();
        fake.appointments.borrow_mut().extend([
            appointment(1, 1, AppointmentStatus::Confirmed),
            appointment(2, 1, AppointmentStatus::Completed),
        ]);
        block_on(vm.load_appointments());

        assert!(!block_on(vm.confirm(1)));
        assert!(!block_on(vm.cancel(2, None)));
        assert!(!block_on(vm.open_reassign(2)));
        assert!(fake.confirmed.borrow().is_empty());
        assert!(fake.cancelled.borrow().is_empty());
        assert!(fake.available_doctor_calls.borrow().is_empty());
        assert_eq!(vm.state.toasts.last().map(|t| t.kind), Some(ToastKind::Error));
    }

    #[test]
    fn confirming_a_pending_appointment_refetches() {
        let (vm, fake) = page();
        fake.appointments.borrow_mut().push(appointment(1, 1, AppointmentStatus::Pending));
        block_on(vm.load_appointments());

        assert!(block_on(vm.confirm(1)));
        assert_eq!(*fake.confirmed.borrow(), vec![1]);
        assert_eq!(fake.appointment_queries.borrow().len(), 2);
        assert_eq!(vm.state.toasts.last().map(|t| t.message), Some("Appointment confirmed".to_string()));
        assert_eq!(vm.snapshot().busy_id, None);
    }

    #[test]
    fn reassign_offers_other_doctors_only() {
        let (vm, fake) = page();
        fake.appointments.borrow_mut().push(appointment(4, 1, AppointmentStatus::Confirmed));
        block_on(vm.load_appointments());

        assert!(block_on(vm.open_reassign(4)));
        assert_eq!(fake.available_doctor_calls.borrow()[0].1, time(8, 0));
        let offered: Vec<i64> = vm
            .snapshot()
            .reassign_doctors
            .value()
            .map(|d| d.iter().map(|d| d.id).collect())
            .unwrap_or_default();
        assert_eq!(offered, vec![2, 3]);

        vm.reassign.update(|f| {
            f.doctor_id = Some(2);
            f.reason = "  schedule   change ".into();
        });
        assert!(block_on(vm.submit_reassign()));
        let (id, request) = fake.reassigned.borrow()[0].clone();
        assert_eq!((id, request.new_doctor_id), (4, 2));
        assert_eq!(request.reason.as_deref(), Some("schedule change"));
        assert!(vm.snapshot().reassign_target.is_none());
    }

    #[test]
    fn detail_shows_full_record() {
        let (vm, fake) = page();
        fake.appointments.borrow_mut().push(appointment(9, 2, AppointmentStatus::Pending));

        block_on(vm.open_detail(9));
        assert_eq!(vm.snapshot().detail.map(|a| a.id), Some(9));
        vm.close_detail();
        assert!(vm.snapshot().detail.is_none());
    }

    #[test]
    fn detail_arriving_after_close_stays_closed() {
        let (vm, fake) = page();
        fake.appointments.borrow_mut().push(appointment(9, 2, AppointmentStatus::Pending));
        let release = fake.hold_next();

        block_on(async {
            let opening = vm.open_detail(9);
            futures::pin_mut!(opening);
            assert!(futures::poll!(opening.as_mut()).is_pending());

            vm.close_detail();
            release.send(()).unwrap();
            opening.await;
        });
        assert!(vm.snapshot().detail.is_none());
    }

    #[test]
    fn confirm_finishing_after_navigation_skips_the_refetch() {
        let (vm, fake) = page();
        fake.appointments.borrow_mut().push(appointment(1, 1, AppointmentStatus::Pending));
        block_on(vm.load_appointments());
        let release = fake.hold_next();

        block_on(async {
            let confirming = vm.confirm(1);
            futures::pin_mut!(confirming);
            assert!(futures::poll!(confirming.as_mut()).is_pending());

            vm.state.reset_page_scope();
            release.send(()).unwrap();
            assert!(confirming.await);
        });
        assert_eq!(*fake.confirmed.borrow(), vec![1]);
        assert_eq!(fake.appointment_queries.borrow().len(), 1);
    }
}
