use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inputs of one estimation run. Replaced wholesale whenever the user edits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleParameters {
    pub start_date: NaiveDate,
    /// Days of flow.
    pub period_length: u32,
    /// Days between the start of one period and the start of the next.
    pub cycle_length: u32,
}

impl CycleParameters {
    pub fn new(start_date: NaiveDate, period_length: u32, cycle_length: u32) -> Self {
        Self {
            start_date,
            period_length,
            cycle_length,
        }
    }

    /// `period_length < cycle_length`. Projection does not enforce this;
    /// callers may use it to warn about overlapping intervals.
    pub fn is_consistent(&self) -> bool {
        self.period_length < self.cycle_length
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedInterval {
    pub index: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    pub is_menstrual: bool,
    pub is_highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    pub name: String,
    pub short_description: String,
    pub long_description: String,
    pub website: String,
}

/// Appointment document; field names are camelCase on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub patient_name: String,
    pub phone: String,
    pub doctor_name: String,
    /// ISO-8601 timestamp (midnight UTC of the appointment day).
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(default)]
    pub notes: String,
    /// ISO-8601 UTC instant the booking was made, millisecond precision.
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsMessage {
    pub to: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Doctor {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BedCount {
    pub total: u32,
    pub available: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BedAvailability {
    pub icu: BedCount,
    pub general: BedCount,
    pub emergency: BedCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hospital {
    pub id: u32,
    pub name: &'static str,
    pub distance: &'static str,
    pub phone: &'static str,
    pub beds: BedAvailability,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Donor {
    pub id: u32,
    pub name: &'static str,
    pub blood_type: &'static str,
    pub location: &'static str,
    pub last_donation: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePlan {
    pub id: u32,
    pub name: &'static str,
    pub provider: &'static str,
    pub premium: &'static str,
    pub coverage: &'static str,
    /// Size of the cashless network.
    pub hospitals: u32,
    pub affiliated_hospitals: &'static [&'static str],
    pub conditions: &'static [&'static str],
    pub waiting_period: &'static str,
    pub critical_illness: &'static str,
}
