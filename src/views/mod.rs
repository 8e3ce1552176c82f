pub mod app;
pub mod shared;
pub mod auth;
pub mod layout;
pub mod navbar;
pub mod home;
pub mod scheduling;
pub mod leave_requests;
pub mod notifications;
pub mod patient_requests;
pub mod clinician_schedule;
pub mod introduction_modal;
pub mod accounts;
pub mod manager_dashboard;
pub mod profile;
pub mod errors;

pub use app::render_app;
