use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use crate::models::clock_time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub specialty: Option<String>,
}

impl Doctor {
    pub fn display_name(&self) -> String {
        match &self.specialty {
            Some(specialty) if !specialty.is_empty() => format!("{} ({})", self.full_name, specialty),
            _ => self.full_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicService {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlot {
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl AvailableSlot {
    pub fn label(&self) -> String {
        format!("{} - {}", self.start_time.format("%H:%M"), self.end_time.format("%H:%M"))
    }

    /// Value of the slot `<option>`; parsed back with `from_key`
    pub fn key(&self) -> String {
        format!("{}-{}", self.start_time.format("%H:%M"), self.end_time.format("%H:%M"))
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let (start, end) = key.split_once('-')?;
        Some(Self {
            start_time: clock_time::parse(start).ok()?,
            end_time: clock_time::parse(end).ok()?,
            available: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_key_round_trips_through_select_value() {
        let slot: AvailableSlot = serde_json::from_str(r#"{"startTime":"09:00","endTime":"09:30"}"#).unwrap();
        assert!(slot.available);
        assert_eq!(slot.key(), "09:00-09:30");
        assert_eq!(AvailableSlot::from_key(&slot.key()), Some(slot));
        assert_eq!(AvailableSlot::from_key("garbage"), None);
    }
}
