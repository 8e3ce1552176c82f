use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use crate::models::clock_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Completed => "Completed",
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "PENDING",
            AppointmentStatus::Confirmed => "CONFIRMED",
            AppointmentStatus::Cancelled => "CANCELLED",
            AppointmentStatus::Completed => "COMPLETED",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "status-badge status-pending",
            AppointmentStatus::Confirmed => "status-badge status-confirmed",
            AppointmentStatus::Cancelled => "status-badge status-cancelled",
            AppointmentStatus::Completed => "status-badge status-completed",
        }
    }

    pub fn can_confirm(&self) -> bool {
        matches!(self, AppointmentStatus::Pending)
    }

    pub fn can_cancel(&self) -> bool {
        matches!(self, AppointmentStatus::Pending | AppointmentStatus::Confirmed)
    }

    pub fn can_reassign(&self) -> bool {
        self.can_cancel()
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AppointmentStatus::Cancelled | AppointmentStatus::Completed)
    }
}

/// Status tab on the scheduling page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AppointmentStatus),
}

impl StatusFilter {
    pub const TABS: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Only(AppointmentStatus::Pending),
        StatusFilter::Only(AppointmentStatus::Confirmed),
        StatusFilter::Only(AppointmentStatus::Cancelled),
        StatusFilter::Only(AppointmentStatus::Completed),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn status(&self) -> Option<AppointmentStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(status) => Some(*status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRef {
    pub id: i64,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientInfo {
    pub full_name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reassignment {
    pub from_doctor_id: i64,
    pub from_doctor_name: String,
    pub to_doctor_id: i64,
    pub to_doctor_name: String,
    #[serde(default)]
    pub reason: Option<String>,
    pub reassigned_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub doctor: DoctorRef,
    pub patient: PatientInfo,
    pub service: ServiceRef,
    pub appointment_date: NaiveDate,
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub reassignment_history: Vec<Reassignment>,
}

impl Appointment {
    /// `08:00 - 08:30`
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time.format("%H:%M"), self.end_time.format("%H:%M"))
    }

    /// Case-insensitive match over patient, doctor, service and phone
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            self.patient.full_name.as_str(),
            self.patient.phone.as_str(),
            self.doctor.full_name.as_str(),
            self.service.name.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// List filters sent as query parameters
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentQuery {
    pub search: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub status: Option<AppointmentStatus>,
    pub doctor_id: Option<i64>,
    pub page: u32,
    pub size: u32,
}

impl AppointmentQuery {
    pub fn new(size: u32) -> Self {
        Self { search: String::new(), from: None, to: None, status: None, doctor_id: None, page: 1, size }
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        if let Some(from) = self.from {
            params.push(("fromDate", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            params.push(("toDate", to.format("%Y-%m-%d").to_string()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_param().to_string()));
        }
        if let Some(doctor_id) = self.doctor_id {
            params.push(("doctorId", doctor_id.to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub doctor_id: i64,
    pub service_id: i64,
    pub appointment_date: NaiveDate,
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    pub patient_name: String,
    pub patient_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeValidationRequest {
    pub doctor_id: i64,
    pub appointment_date: NaiveDate,
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_appointment_id: Option<i64>,
}

impl From<&CreateAppointmentRequest> for TimeValidationRequest {
    fn from(request: &CreateAppointmentRequest) -> Self {
        Self {
            doctor_id: request.doctor_id,
            appointment_date: request.appointment_date,
            start_time: request.start_time,
            end_time: request.end_time,
            exclude_appointment_id: None,
        }
    }
}

/// Backend verdict on a proposed time; `valid: false` means double booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeValidationResult {
    pub valid: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReassignRequest {
    pub new_doctor_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 12,
        "doctor": {"id": 3, "fullName": "Dr. Pham Minh"},
        "patient": {"fullName": "Nguyen Van A", "phone": "0912345678"},
        "service": {"id": 1, "name": "General check-up"},
        "appointmentDate": "2026-10-20",
        "startTime": "08:00:00",
        "endTime": "08:30",
        "status": "CONFIRMED"
    }"#;

    #[test]
    fn appointment_parses_backend_shape() {
        let appointment: Appointment = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
        assert_eq!(appointment.time_range(), "08:00 - 08:30");
        assert!(appointment.reassignment_history.is_empty());
        assert!(appointment.matches_search("pham"));
        assert!(appointment.matches_search("0912"));
        assert!(!appointment.matches_search("dermatology"));
    }

    #[test]
    fn status_transitions() {
        assert!(AppointmentStatus::Pending.can_confirm());
        assert!(!AppointmentStatus::Confirmed.can_confirm());
        assert!(AppointmentStatus::Confirmed.can_cancel());
        assert!(!AppointmentStatus::Completed.can_cancel());
        assert!(!AppointmentStatus::Cancelled.can_reassign());
        assert!(AppointmentStatus::Cancelled.is_terminal());
    }

    #[test]
    fn query_params_skip_empty_filters() {
        let mut query = AppointmentQuery::new(10);
        assert_eq!(query.to_params().len(), 2);

        query.search = "  lan ".into();
        query.status = StatusFilter::Only(AppointmentStatus::Pending).status();
        query.from = NaiveDate::from_ymd_opt(2026, 10, 1);
        let params = query.to_params();
        assert!(params.contains(&("search", "lan".to_string())));
        assert!(params.contains(&("status", "PENDING".to_string())));
        assert!(params.contains(&("fromDate", "2026-10-01".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "toDate"));
    }
}
