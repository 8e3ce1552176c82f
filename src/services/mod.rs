// ============================================================================
// SERVICES - Backend collaborators (HTTP only, no UI logic)
// ============================================================================
// One trait per collaborator so view models can run against in-memory fakes;
// `ApiClient` implements all of them.
// ============================================================================

pub mod api_client;
pub mod auth_service;
pub mod appointment_service;
pub mod leave_request_service;
pub mod clinic_service;
pub mod content_service;
pub mod notification_service;
pub mod user_service;

pub use api_client::{ApiClient, Verb};
pub use auth_service::AuthApi;
pub use appointment_service::AppointmentApi;
pub use leave_request_service::LeaveRequestApi;
pub use clinic_service::{AvailableDoctorApi, AvailableSlotApi, DoctorApi, ServiceApi};
pub use content_service::{BlogApi, ConsultationInfoApi, IntroductionApi};
pub use notification_service::NotificationApi;
pub use user_service::UserApi;
