use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Rejected => "REJECTED",
        }
    }
}

/// Doctor unavailability, owned by the backend and read-only here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: i64,
    pub doctor_id: i64,
    #[serde(default)]
    pub doctor_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: LeaveStatus,
}

impl LeaveRequest {
    /// Inclusive on both ends
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Pending leave blocks booking as well as approved leave
    pub fn blocks(&self, doctor_id: i64, date: NaiveDate) -> bool {
        self.doctor_id == doctor_id && self.status != LeaveStatus::Rejected && self.covers(date)
    }

    pub fn period(&self) -> String {
        if self.start_date == self.end_date {
            self.start_date.format("%d/%m/%Y").to_string()
        } else {
            format!("{} - {}", self.start_date.format("%d/%m/%Y"), self.end_date.format("%d/%m/%Y"))
        }
    }
}

pub fn find_blocking_leave(leaves: &[LeaveRequest], doctor_id: i64, date: NaiveDate) -> Option<&LeaveRequest> {
    leaves.iter().find(|leave| leave.blocks(doctor_id, date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    fn leave(doctor_id: i64, from: u32, to: u32, status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            id: 1,
            doctor_id,
            doctor_name: "Dr. Le".into(),
            start_date: date(from),
            end_date: date(to),
            reason: None,
            status,
        }
    }

    #[test]
    fn approved_and_pending_leave_block_their_dates() {
        let leaves = vec![leave(3, 10, 12, LeaveStatus::Approved), leave(4, 15, 15, LeaveStatus::Pending)];
        assert!(find_blocking_leave(&leaves, 3, date(10)).is_some());
        assert!(find_blocking_leave(&leaves, 3, date(12)).is_some());
        assert!(find_blocking_leave(&leaves, 3, date(13)).is_none());
        assert!(find_blocking_leave(&leaves, 4, date(15)).is_some());
        assert!(find_blocking_leave(&leaves, 5, date(11)).is_none());
    }

    #[test]
    fn rejected_leave_never_blocks() {
        let leaves = vec![leave(3, 10, 12, LeaveStatus::Rejected)];
        assert!(find_blocking_leave(&leaves, 3, date(11)).is_none());
        assert_eq!(leaves[0].period(), "10/10/2026 - 12/10/2026");
    }
}
