pub mod remote_data;
pub mod form_modal;
pub mod auth_viewmodel;
pub mod layout_viewmodel;
pub mod scheduling_viewmodel;
pub mod consultation_viewmodel;
pub mod introduction_viewmodel;
pub mod profile_viewmodel;
pub mod leave_request_viewmodel;
pub mod notification_viewmodel;
pub mod patient_request_viewmodel;
pub mod clinician_schedule_viewmodel;
pub mod accounts_viewmodel;
pub mod manager_dashboard_viewmodel;
pub mod home_viewmodel;
pub mod pages;

pub use remote_data::RemoteData;
pub use auth_viewmodel::AuthViewModel;
pub use layout_viewmodel::{resolve_route, GateDecision, LayoutViewModel, NavItem};
pub use scheduling_viewmodel::{SchedulingViewModel, SlotCheck};
pub use consultation_viewmodel::ConsultationViewModel;
pub use introduction_viewmodel::IntroductionViewModel;
pub use profile_viewmodel::ProfileViewModel;
pub use leave_request_viewmodel::LeaveRequestViewModel;
pub use notification_viewmodel::NotificationViewModel;
pub use patient_request_viewmodel::PatientRequestViewModel;
pub use clinician_schedule_viewmodel::ClinicianScheduleViewModel;
pub use accounts_viewmodel::AccountsViewModel;
pub use manager_dashboard_viewmodel::ManagerDashboardViewModel;
pub use home_viewmodel::{HomeViewModel, NewsDetailViewModel};
pub use pages::PageModels;
