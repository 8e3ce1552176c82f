use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use crate::error::AppResult;
use crate::models::{AvailableSlot, ClinicService, Doctor};
use crate::services::ApiClient;

#[async_trait(?Send)]
pub trait DoctorApi {
    async fn list_doctors(&self) -> AppResult<Vec<Doctor>>;
}

#[async_trait(?Send)]
pub trait ServiceApi {
    async fn list_services(&self) -> AppResult<Vec<ClinicService>>;
}

/// Doctors free for a whole time range on a date
#[async_trait(?Send)]
pub trait AvailableDoctorApi {
    async fn available_doctors(&self, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> AppResult<Vec<Doctor>>;
}

#[async_trait(?Send)]
pub trait AvailableSlotApi {
    async fn available_slots(&self, doctor_id: i64, date: NaiveDate, service_id: i64) -> AppResult<Vec<AvailableSlot>>;
}

fn date_param(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn time_param(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[async_trait(?Send)]
impl DoctorApi for ApiClient {
    async fn list_doctors(&self) -> AppResult<Vec<Doctor>> {
        self.get("/doctors", &[]).await?.into_data()
    }
}

#[async_trait(?Send)]
impl ServiceApi for ApiClient {
    async fn list_services(&self) -> AppResult<Vec<ClinicService>> {
        self.get("/services", &[]).await?.into_data()
    }
}

#[async_trait(?Send)]
impl AvailableDoctorApi for ApiClient {
    async fn available_doctors(&self, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> AppResult<Vec<Doctor>> {
        let params = [
            ("date", date_param(date)),
            ("startTime", time_param(start)),
            ("endTime", time_param(end)),
        ];
        self.get("/available-doctors", &params).await?.into_data()
    }
}

#[async_trait(?Send)]
impl AvailableSlotApi for ApiClient {
    async fn available_slots(&self, doctor_id: i64, date: NaiveDate, service_id: i64) -> AppResult<Vec<AvailableSlot>> {
        let params = [
            ("doctorId", doctor_id.to_string()),
            ("date", date_param(date)),
            ("serviceId", service_id.to_string()),
        ];
        self.get("/available-slots", &params).await?.into_data()
    }
}
