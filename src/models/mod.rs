// ============================================================================
// MODELS - Data shared with the clinic backend (camelCase JSON)
// ============================================================================

pub mod api;
pub mod user;
pub mod appointment;
pub mod leave_request;
pub mod clinic;
pub mod content;
pub mod notification;

pub use api::{ApiResponse, Page};
pub use user::{Role, User, LoginRequest, LoginResponse, SignupRequest, ProfileUpdate};
pub use appointment::{
    Appointment, AppointmentStatus, StatusFilter, AppointmentQuery, CreateAppointmentRequest,
    TimeValidationRequest, TimeValidationResult, ReassignRequest, CancelRequest,
    DoctorRef, PatientInfo, ServiceRef,
};
pub use leave_request::{LeaveRequest, LeaveStatus, find_blocking_leave};
pub use clinic::{Doctor, ClinicService, AvailableSlot};
pub use content::{
    Blog, ConsultationInfo, ConsultationRequest, Introduction, IntroductionDraft, IntroductionStatus,
};
pub use notification::{Notification, UnreadCount};

/// `HH:MM` on the wire; `HH:MM:SS` is accepted when reading
pub(crate) mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    pub fn parse(raw: &str) -> Result<NaiveTime, String> {
        let raw = raw.trim();
        NaiveTime::parse_from_str(raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
            .map_err(|_| format!("invalid time of day: {}", raw))
    }
}

#[cfg(test)]
mod tests {
    use super::clock_time;
    use chrono::NaiveTime;

    #[test]
    fn clock_time_accepts_both_precisions() {
        let expected = NaiveTime::from_hms_opt(8, 30, 0);
        assert_eq!(clock_time::parse("08:30").ok(), expected);
        assert_eq!(clock_time::parse("08:30:00").ok(), expected);
        assert!(clock_time::parse("8h30").is_err());
    }
}
