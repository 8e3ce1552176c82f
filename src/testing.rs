// In-memory backend and fixtures shared by view-model tests

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::router::Router;
use crate::services::*;
use crate::state::{AppState, Backends, ChangeNotifier, NotificationFeed, SessionStore};

#[derive(Default)]
pub struct FakeBackend {
    pub appointments: RefCell<Vec<Appointment>>,
    pub appointment_queries: RefCell<Vec<AppointmentQuery>>,
    pub created: RefCell<Vec<CreateAppointmentRequest>>,
    pub validations: RefCell<Vec<TimeValidationRequest>>,
    /// `Some(message)` makes every time validation report a conflict
    pub time_conflict: RefCell<Option<String>>,
    pub confirmed: RefCell<Vec<i64>>,
    pub cancelled: RefCell<Vec<i64>>,
    pub reassigned: RefCell<Vec<(i64, ReassignRequest)>>,
    pub doctors: RefCell<Vec<Doctor>>,
    pub services: RefCell<Vec<ClinicService>>,
    pub leaves: RefCell<Vec<LeaveRequest>>,
    pub leave_filters: RefCell<Vec<Option<LeaveStatus>>>,
    pub available_doctor_calls: RefCell<Vec<(NaiveDate, NaiveTime, NaiveTime)>>,
    pub slots: RefCell<Vec<AvailableSlot>>,
    pub slot_calls: RefCell<Vec<(i64, NaiveDate, i64)>>,
    pub unread: Cell<u32>,
    pub notifications: RefCell<Vec<Notification>>,
    pub marked_read: RefCell<Vec<i64>>,
    pub mark_all_calls: Cell<u32>,
    pub users: RefCell<Vec<User>>,
    pub profile_updates: RefCell<Vec<ProfileUpdate>>,
    pub consultations_sent: RefCell<Vec<ConsultationRequest>>,
    pub consultations: RefCell<Vec<ConsultationInfo>>,
    pub introductions_sent: RefCell<Vec<IntroductionDraft>>,
    pub blogs: RefCell<Vec<Blog>>,
    pub logins: RefCell<Vec<LoginRequest>>,
    pub signups: RefCell<Vec<SignupRequest>>,
    /// Error returned by every call while set
    pub fail: RefCell<Option<AppError>>,
    /// Next `detail` or `confirm` call waits until the sender fires
    pub hold: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeBackend {
    fn check(&self) -> AppResult<()> {
        match self.fail.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    pub fn fail_with(&self, error: AppError) {
        *self.fail.borrow_mut() = Some(error);
    }

    /// Park the next held call; the returned sender releases it
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.hold.borrow_mut() = Some(rx);
        tx
    }

    async fn wait_if_held(&self) {
        let held = self.hold.borrow_mut().take();
        if let Some(rx) = held {
            let _ = rx.await;
        }
    }
}

fn paginate<T: Clone>(items: &[T], page: u32, size: u32) -> Page<T> {
    let size = size.max(1);
    let total_items = items.len() as u64;
    let total_pages = ((items.len() as u32) + size - 1) / size;
    let start = ((page.max(1) - 1) * size) as usize;
    Page {
        items: items.iter().skip(start).take(size as usize).cloned().collect(),
        page,
        size,
        total_items,
        total_pages,
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeBackend {
    async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        self.logins.borrow_mut().push(request.clone());
        self.check()?;
        let mut user = staff_user();
        user.email = request.email.clone();
        Ok(LoginResponse { token: "token-1".into(), user })
    }

    async fn signup(&self, request: &SignupRequest) -> AppResult<User> {
        self.signups.borrow_mut().push(request.clone());
        self.check()?;
        Ok(User {
            id: 99,
            full_name: request.full_name.clone(),
            email: request.email.clone(),
            role: Role::Patient,
            avatar: None,
            phone: Some(request.phone.clone()),
        })
    }
}

#[async_trait(?Send)]
impl AppointmentApi for FakeBackend {
    async fn list(&self, query: &AppointmentQuery) -> AppResult<Page<Appointment>> {
        self.appointment_queries.borrow_mut().push(query.clone());
        self.check()?;
        let matching: Vec<Appointment> = self
            .appointments
            .borrow()
            .iter()
            .filter(|a| query.status.map_or(true, |s| a.status == s))
            .filter(|a| query.doctor_id.map_or(true, |id| a.doctor.id == id))
            .filter(|a| query.from.map_or(true, |from| a.appointment_date >= from))
            .filter(|a| query.to.map_or(true, |to| a.appointment_date <= to))
            .filter(|a| a.matches_search(&query.search))
            .cloned()
            .collect();
        Ok(paginate(&matching, query.page, query.size))
    }

    async fn detail(&self, id: i64) -> AppResult<Appointment> {
        self.wait_if_held().await;
        self.check()?;
        self.appointments
            .borrow()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| AppError::Business("Appointment not found".into()))
    }

    async fn create(&self, request: &CreateAppointmentRequest) -> AppResult<Appointment> {
        self.created.borrow_mut().push(request.clone());
        self.check()?;
        let created = Appointment {
            id: 500 + self.created.borrow().len() as i64,
            doctor: DoctorRef { id: request.doctor_id, full_name: format!("Doctor {}", request.doctor_id) },
            patient: PatientInfo {
                full_name: request.patient_name.clone(),
                phone: request.patient_phone.clone(),
                email: request.patient_email.clone(),
            },
            service: ServiceRef { id: request.service_id, name: "Service".into() },
            appointment_date: request.appointment_date,
            start_time: request.start_time,
            end_time: request.end_time,
            status: AppointmentStatus::Pending,
            note: request.note.clone(),
            reassignment_history: Vec::new(),
        };
        self.appointments.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn confirm(&self, id: i64) -> AppResult<Option<String>> {
        self.wait_if_held().await;
        self.confirmed.borrow_mut().push(id);
        self.check()?;
        Ok(Some("Appointment confirmed".into()))
    }

    async fn cancel(&self, id: i64, _request: &CancelRequest) -> AppResult<Option<String>> {
        self.cancelled.borrow_mut().push(id);
        self.check()?;
        Ok(None)
    }

    async fn reassign(&self, id: i64, request: &ReassignRequest) -> AppResult<Option<String>> {
        self.reassigned.borrow_mut().push((id, request.clone()));
        self.check()?;
        Ok(None)
    }

    async fn validate_appointment_time(&self, request: &TimeValidationRequest) -> AppResult<TimeValidationResult> {
        self.validations.borrow_mut().push(request.clone());
        self.check()?;
        Ok(match self.time_conflict.borrow().clone() {
            Some(message) => TimeValidationResult { valid: false, message: Some(message) },
            None => TimeValidationResult { valid: true, message: None },
        })
    }
}

#[async_trait(?Send)]
impl LeaveRequestApi for FakeBackend {
    async fn list(&self, status: Option<LeaveStatus>) -> AppResult<Vec<LeaveRequest>> {
        self.leave_filters.borrow_mut().push(status);
        self.check()?;
        Ok(self
            .leaves
            .borrow()
            .iter()
            .filter(|l| status.map_or(true, |s| l.status == s))
            .cloned()
            .collect())
    }
}

#[async_trait(?Send)]
impl DoctorApi for FakeBackend {
    async fn list_doctors(&self) -> AppResult<Vec<Doctor>> {
        self.check()?;
        Ok(self.doctors.borrow().clone())
    }
}

#[async_trait(?Send)]
impl ServiceApi for FakeBackend {
    async fn list_services(&self) -> AppResult<Vec<ClinicService>> {
        self.check()?;
        Ok(self.services.borrow().clone())
    }
}

#[async_trait(?Send)]
impl AvailableDoctorApi for FakeBackend {
    async fn available_doctors(&self, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> AppResult<Vec<Doctor>> {
        self.available_doctor_calls.borrow_mut().push((date, start, end));
        self.check()?;
        Ok(self.doctors.borrow().clone())
    }
}

#[async_trait(?Send)]
impl AvailableSlotApi for FakeBackend {
    async fn available_slots(&self, doctor_id: i64, date: NaiveDate, service_id: i64) -> AppResult<Vec<AvailableSlot>> {
        self.slot_calls.borrow_mut().push((doctor_id, date, service_id));
        self.check()?;
        Ok(self.slots.borrow().clone())
    }
}

#[async_trait(?Send)]
impl NotificationApi for FakeBackend {
    async fn unread_count(&self) -> AppResult<u32> {
        self.check()?;
        Ok(self.unread.get())
    }

    async fn list_notifications(&self, page: u32, size: u32) -> AppResult<Page<Notification>> {
        self.check()?;
        Ok(paginate(&self.notifications.borrow(), page, size))
    }

    async fn mark_read(&self, id: i64) -> AppResult<()> {
        self.marked_read.borrow_mut().push(id);
        self.check()?;
        for notification in self.notifications.borrow_mut().iter_mut() {
            if notification.id == id && !notification.read {
                notification.read = true;
                self.unread.set(self.unread.get().saturating_sub(1));
            }
        }
        Ok(())
    }

    async fn mark_all_read(&self) -> AppResult<()> {
        self.mark_all_calls.set(self.mark_all_calls.get() + 1);
        self.check()?;
        for notification in self.notifications.borrow_mut().iter_mut() {
            notification.read = true;
        }
        self.unread.set(0);
        Ok(())
    }
}

#[async_trait(?Send)]
impl UserApi for FakeBackend {
    async fn list_users(&self, page: u32, size: u32) -> AppResult<Page<User>> {
        self.check()?;
        Ok(paginate(&self.users.borrow(), page, size))
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> AppResult<User> {
        self.profile_updates.borrow_mut().push(update.clone());
        self.check()?;
        let mut user = nurse_user();
        user.full_name = update.full_name.clone();
        user.email = update.email.clone();
        user.phone = Some(update.phone.clone());
        Ok(user)
    }
}

#[async_trait(?Send)]
impl ConsultationInfoApi for FakeBackend {
    async fn create(&self, request: &ConsultationRequest) -> AppResult<Option<String>> {
        self.consultations_sent.borrow_mut().push(request.clone());
        self.check()?;
        Ok(Some("We will contact you shortly".into()))
    }

    async fn list(&self, page: u32, size: u32) -> AppResult<Page<ConsultationInfo>> {
        self.check()?;
        Ok(paginate(&self.consultations.borrow(), page, size))
    }
}

#[async_trait(?Send)]
impl IntroductionApi for FakeBackend {
    async fn create_introduction(&self, draft: &IntroductionDraft) -> AppResult<Introduction> {
        self.introductions_sent.borrow_mut().push(draft.clone());
        self.check()?;
        Ok(Introduction {
            id: 1,
            title: draft.title.clone(),
            summary: draft.summary.clone(),
            status: draft.status,
            thumbnail_url: None,
        })
    }
}

#[async_trait(?Send)]
impl BlogApi for FakeBackend {
    async fn get_public_blogs(&self, page: u32, size: u32) -> AppResult<Page<Blog>> {
        self.check()?;
        Ok(paginate(&self.blogs.borrow(), page, size))
    }

    async fn get_public_blog_detail(&self, id: i64) -> AppResult<Blog> {
        self.check()?;
        self.blogs
            .borrow()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::Http { status: 404, message: "Not Found".into() })
    }
}

pub fn backends(fake: &Rc<FakeBackend>) -> Backends {
    Backends {
        auth: fake.clone(),
        appointments: fake.clone(),
        leave_requests: fake.clone(),
        doctors: fake.clone(),
        services: fake.clone(),
        available_doctors: fake.clone(),
        available_slots: fake.clone(),
        notifications: fake.clone(),
        users: fake.clone(),
        consultations: fake.clone(),
        introductions: fake.clone(),
        blogs: fake.clone(),
    }
}

/// Detached state (no history, no timers, no storage) at `path`
pub fn state_at(path: &str) -> (AppState, Rc<FakeBackend>) {
    let fake = Rc::new(FakeBackend::default());
    let notifier = ChangeNotifier::new();
    let state = AppState::new(
        notifier.clone(),
        SessionStore::new(notifier.clone()),
        NotificationFeed::manual(notifier.clone()),
        Router::detached(path, notifier),
        backends(&fake),
        30_000,
    );
    (state, fake)
}

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub fn staff_user() -> User {
    User {
        id: 2,
        full_name: "Le Thu Ha".into(),
        email: "ha@clinic.vn".into(),
        role: Role::Staff,
        avatar: None,
        phone: Some("0901234567".into()),
    }
}

pub fn nurse_user() -> User {
    User {
        id: 7,
        full_name: "Tran Thi Lan".into(),
        email: "lan@clinic.vn".into(),
        role: Role::Nurse,
        avatar: None,
        phone: Some("0912345678".into()),
    }
}

pub fn doctor(id: i64, name: &str) -> Doctor {
    Doctor { id, full_name: name.into(), specialty: None }
}

pub fn service(id: i64, name: &str) -> ClinicService {
    ClinicService { id, name: name.into(), duration_minutes: Some(30), price: None }
}

pub fn leave(doctor_id: i64, from: u32, to: u32, status: LeaveStatus) -> LeaveRequest {
    LeaveRequest {
        id: doctor_id * 100 + from as i64,
        doctor_id,
        doctor_name: format!("Doctor {}", doctor_id),
        start_date: date(from),
        end_date: date(to),
        reason: None,
        status,
    }
}

pub fn appointment(id: i64, doctor_id: i64, status: AppointmentStatus) -> Appointment {
    Appointment {
        id,
        doctor: DoctorRef { id: doctor_id, full_name: format!("Doctor {}", doctor_id) },
        patient: PatientInfo { full_name: "Nguyen Van A".into(), phone: "0912345678".into(), email: None },
        service: ServiceRef { id: 1, name: "General check-up".into() },
        appointment_date: date(20),
        start_time: time(8, 0),
        end_time: time(8, 30),
        status,
        note: None,
        reassignment_history: Vec::new(),
    }
}

pub fn notification(id: i64, read: bool) -> Notification {
    Notification {
        id,
        title: format!("Notice {}", id),
        message: "Schedule updated".into(),
        read,
        created_at: None,
    }
}
