// ============================================================================
// PAGE MODELS - One view model per screen, loaded on route entry
// ============================================================================

use chrono::NaiveDate;
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::{
    AccountsViewModel, AuthViewModel, ClinicianScheduleViewModel, HomeViewModel, LayoutViewModel,
    LeaveRequestViewModel, ManagerDashboardViewModel, NewsDetailViewModel, NotificationViewModel,
    PatientRequestViewModel, ProfileViewModel, SchedulingViewModel,
};

#[derive(Clone)]
pub struct PageModels {
    state: AppState,
    pub layout: LayoutViewModel,
    pub auth: AuthViewModel,
    pub home: HomeViewModel,
    pub news: NewsDetailViewModel,
    pub scheduling: SchedulingViewModel,
    pub leave_requests: LeaveRequestViewModel,
    pub notifications: NotificationViewModel,
    pub patient_requests: PatientRequestViewModel,
    pub schedule: ClinicianScheduleViewModel,
    pub accounts: AccountsViewModel,
    pub manager: ManagerDashboardViewModel,
    pub profile: ProfileViewModel,
}

impl PageModels {
    pub fn new(state: AppState, page_size: u32, today: NaiveDate) -> Self {
        Self {
            layout: LayoutViewModel::new(state.clone()),
            auth: AuthViewModel::new(state.clone()),
            home: HomeViewModel::new(state.clone()),
            news: NewsDetailViewModel::new(state.clone()),
            scheduling: SchedulingViewModel::new(state.clone(), page_size),
            leave_requests: LeaveRequestViewModel::new(state.clone()),
            notifications: NotificationViewModel::new(state.clone(), page_size),
            patient_requests: PatientRequestViewModel::new(state.clone(), page_size),
            schedule: ClinicianScheduleViewModel::new(state.clone(), today),
            accounts: AccountsViewModel::new(state.clone(), page_size),
            manager: ManagerDashboardViewModel::new(state.clone()),
            profile: ProfileViewModel::new(state.clone()),
            state,
        }
    }

    /// Start the loads of `route` under the current page scope
    pub fn enter(&self, route: &Route) {
        let pages = self.clone();
        let route = route.clone();
        self.state.spawn_page(async move { pages.load(&route).await });
    }

    pub async fn load(&self, route: &Route) {
        log::debug!("📄 [PAGES] Entering {}", route.path());
        match route {
            Route::Home | Route::Login | Route::Signup => {
                self.home.enter().await;
            }
            Route::NewsDetail(id) => {
                self.news.enter(*id).await;
            }
            Route::StaffDashboard => self.scheduling.enter().await,
            Route::StaffLeaveRequests | Route::NurseLeaveRequests => {
                self.leave_requests.enter().await;
            }
            Route::StaffNotifications | Route::NurseNotifications => {
                self.notifications.enter().await;
            }
            Route::StaffPatientRequests => {
                self.patient_requests.enter().await;
            }
            Route::DoctorSchedule | Route::NurseSchedule => {
                self.schedule.enter().await;
            }
            Route::AdminAccounts => {
                self.accounts.enter().await;
            }
            Route::ManagerDashboard => self.manager.enter().await,
            Route::StaffProfile
            | Route::NurseProfile
            | Route::Unauthorized
            | Route::AdminUnauthorized
            | Route::NotFound(_) => {}
        }
    }
}
