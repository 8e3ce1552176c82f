use async_trait::async_trait;
use crate::error::AppResult;
use crate::models::{
    Appointment, AppointmentQuery, CancelRequest, CreateAppointmentRequest, Page, ReassignRequest,
    TimeValidationRequest, TimeValidationResult,
};
use crate::services::{ApiClient, Verb};

/// Mutations return the backend's success message, if it sent one
#[async_trait(?Send)]
pub trait AppointmentApi {
    async fn list(&self, query: &AppointmentQuery) -> AppResult<Page<Appointment>>;
    async fn detail(&self, id: i64) -> AppResult<Appointment>;
    async fn create(&self, request: &CreateAppointmentRequest) -> AppResult<Appointment>;
    async fn confirm(&self, id: i64) -> AppResult<Option<String>>;
    async fn cancel(&self, id: i64, request: &CancelRequest) -> AppResult<Option<String>>;
    async fn reassign(&self, id: i64, request: &ReassignRequest) -> AppResult<Option<String>>;
    async fn validate_appointment_time(&self, request: &TimeValidationRequest) -> AppResult<TimeValidationResult>;
}

#[async_trait(?Send)]
impl AppointmentApi for ApiClient {
    async fn list(&self, query: &AppointmentQuery) -> AppResult<Page<Appointment>> {
        self.get("/appointments", &query.to_params()).await?.into_data()
    }

    async fn detail(&self, id: i64) -> AppResult<Appointment> {
        self.get(&format!("/appointments/{}", id), &[]).await?.into_data()
    }

    async fn create(&self, request: &CreateAppointmentRequest) -> AppResult<Appointment> {
        log::info!("📅 [APPOINTMENTS] Creating appointment for doctor {} on {}", request.doctor_id, request.appointment_date);
        self.send_json(Verb::Post, "/appointments", request).await?.into_data()
    }

    async fn confirm(&self, id: i64) -> AppResult<Option<String>> {
        self.send_empty::<serde_json::Value>(Verb::Patch, &format!("/appointments/{}/confirm", id))
            .await?
            .into_message()
    }

    async fn cancel(&self, id: i64, request: &CancelRequest) -> AppResult<Option<String>> {
        self.send_json::<_, serde_json::Value>(Verb::Patch, &format!("/appointments/{}/cancel", id), request)
            .await?
            .into_message()
    }

    async fn reassign(&self, id: i64, request: &ReassignRequest) -> AppResult<Option<String>> {
        log::info!("🔁 [APPOINTMENTS] Reassigning {} to doctor {}", id, request.new_doctor_id);
        self.send_json::<_, serde_json::Value>(Verb::Patch, &format!("/appointments/{}/reassign", id), request)
            .await?
            .into_message()
    }

    async fn validate_appointment_time(&self, request: &TimeValidationRequest) -> AppResult<TimeValidationResult> {
        self.send_json(Verb::Post, "/appointments/validate-time", request).await?.into_data()
    }
}
