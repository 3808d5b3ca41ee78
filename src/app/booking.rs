use crate::core::forms::AppointmentForm;
use crate::domain::model::{Appointment, SmsMessage};
use crate::domain::ports::{AppointmentStore, Notifier};
use crate::utils::error::Result;
use chrono::{DateTime, Datelike, NaiveDate, Utc};

pub const DEFAULT_COUNTRY_CODE: &str = "+91";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingOutcome {
    pub appointment: Appointment,
    pub notified: bool,
}

/// Saves appointments and tells the patient by SMS.
pub struct BookingService<S: AppointmentStore, N: Notifier> {
    store: S,
    notifier: N,
    country_code: String,
    clock: fn() -> DateTime<Utc>,
}

impl<S: AppointmentStore, N: Notifier> BookingService<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            store,
            notifier,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            clock: Utc::now,
        }
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// Source of the `created_at` stamp; `Utc::now` unless replaced.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// A failed notification does not undo the saved appointment; it is
    /// reported through `notified`.
    pub async fn book(&self, form: AppointmentForm) -> Result<BookingOutcome> {
        let (appointment, date) = form.into_appointment((self.clock)())?;

        self.store.save(&appointment).await?;
        tracing::info!(
            "Appointment saved for {} with {} on {} at {}",
            appointment.patient_name,
            appointment.doctor_name,
            date,
            appointment.time
        );

        let sms = SmsMessage {
            to: format!("{}{}", self.country_code, appointment.phone),
            message: confirmation_message(&appointment, date),
        };
        let notified = match self.notifier.send_sms(&sms).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Appointment saved but SMS notification failed: {}", e);
                false
            }
        };

        Ok(BookingOutcome {
            appointment,
            notified,
        })
    }
}

pub fn confirmation_message(appointment: &Appointment, date: NaiveDate) -> String {
    format!(
        "Hello {}, your appointment with {} is scheduled on {} at {}.",
        appointment.patient_name,
        appointment.doctor_name,
        long_date(date),
        appointment.time
    )
}

/// "January 5th, 2025"
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_long_date() {
        assert_eq!(long_date(date(2025, 1, 5)), "January 5th, 2025");
        assert_eq!(long_date(date(2025, 3, 1)), "March 1st, 2025");
        assert_eq!(long_date(date(2025, 3, 22)), "March 22nd, 2025");
        assert_eq!(long_date(date(2025, 3, 23)), "March 23rd, 2025");
        assert_eq!(long_date(date(2025, 3, 11)), "March 11th, 2025");
        assert_eq!(long_date(date(2025, 3, 13)), "March 13th, 2025");
    }

    #[test]
    fn test_confirmation_message() {
        let appointment = Appointment {
            patient_name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            doctor_name: "Dr. Vikas Menon".to_string(),
            date: "2025-02-02T00:00:00.000Z".to_string(),
            time: "14:30".to_string(),
            kind: "checkup".to_string(),
            status: "scheduled".to_string(),
            notes: String::new(),
            created_at: "2025-01-30T10:00:00.000Z".to_string(),
        };
        assert_eq!(
            confirmation_message(&appointment, date(2025, 2, 2)),
            "Hello Asha, your appointment with Dr. Vikas Menon is scheduled on February 2nd, 2025 at 14:30."
        );
    }
}
