use crate::core::directory::{doctor_by_name, TIME_SLOTS};
use crate::domain::api::{
    BankAccount, DietRequest, EmploymentType, SchemeRequest, SocioStatus, SymptomReport,
};
use crate::domain::model::Appointment;
use crate::utils::error::{HealthError, Result};
use crate::utils::validation::{validate_min_length, validate_non_empty_string, Validate};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

pub const SYMPTOMS: [&str; 8] = [
    "Fever",
    "Headache",
    "Cough",
    "Fatigue",
    "Shortness of breath",
    "Chest pain",
    "Nausea",
    "Dizziness",
];

pub const SEVERITY_LEVELS: [&str; 4] = [
    "Mild - Barely noticeable",
    "Moderate - Noticeable but manageable",
    "Severe - Significantly affecting daily life",
    "Very Severe - Need immediate attention",
];

/// Case-insensitive match against the listed symptoms.
pub fn known_symptom(input: &str) -> Option<&'static str> {
    let input = input.trim();
    SYMPTOMS.iter().copied().find(|s| s.eq_ignore_ascii_case(input))
}

/// Expands a short severity such as `moderate` to its full label. The
/// comparison is on the part before ` - `.
pub fn severity_label(input: &str) -> Option<&'static str> {
    let input = input.trim();
    SEVERITY_LEVELS.iter().copied().find(|level| {
        let short = level.split(" - ").next().unwrap_or(level);
        short.eq_ignore_ascii_case(input) || level.eq_ignore_ascii_case(input)
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomForm {
    pub main_symptom: String,
    pub duration: String,
    pub severity: String,
    pub additional_symptoms: String,
}

impl Validate for SymptomForm {
    fn validate(&self) -> Result<()> {
        validate_min_length("main_symptom", &self.main_symptom, 2, "Please select a main symptom")?;
        validate_min_length("duration", &self.duration, 1, "Please enter duration")?;
        validate_min_length("severity", &self.severity, 1, "Please select severity")?;
        Ok(())
    }
}

impl SymptomForm {
    /// The backend receives the form values unchanged.
    pub fn into_report(self) -> Result<SymptomReport> {
        self.validate()?;
        Ok(SymptomReport {
            main_symptom: self.main_symptom,
            duration: self.duration,
            severity: self.severity,
            additional_symptoms: self.additional_symptoms,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DietForm {
    pub disease_name: String,
    pub condition: String,
    pub special_instructions: Option<String>,
    pub cuisine: Option<String>,
    pub region: Option<String>,
}

impl Validate for DietForm {
    fn validate(&self) -> Result<()> {
        validate_min_length("disease_name", &self.disease_name, 1, "Please enter the disease name")?;
        validate_min_length(
            "condition",
            &self.condition,
            1,
            "Please enter a brief description of the condition",
        )?;
        Ok(())
    }
}

impl DietForm {
    /// Cuisine and region travel inside `special_instructions`.
    pub fn combined_instructions(&self) -> String {
        let non_empty = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_string);

        [
            non_empty(&self.special_instructions),
            non_empty(&self.cuisine).map(|c| format!("Preferred Cuisine: {}", c)),
            non_empty(&self.region).map(|r| format!("Region: {}", r)),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(". ")
    }

    pub fn into_request(self) -> Result<DietRequest> {
        self.validate()?;
        let special_instructions = self.combined_instructions();
        Ok(DietRequest {
            disease_name: self.disease_name,
            condition: self.condition,
            special_instructions,
        })
    }
}

/// Raw scheme-form input; numeric fields arrive as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeForm {
    pub age: String,
    pub income: String,
    pub employment_type: String,
    pub bank_account: String,
    pub socio_status: String,
    pub family_size: String,
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| HealthError::validation(field, format!("'{}' is not a valid number", value)))
}

fn parse_choice<T: std::str::FromStr<Err = String>>(field: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|e: String| HealthError::validation(field, e))
}

impl SchemeForm {
    pub fn into_request(self) -> Result<SchemeRequest> {
        Ok(SchemeRequest {
            age: parse_number("age", &self.age)?,
            income: parse_number("income", &self.income)?,
            employment_type: parse_choice::<EmploymentType>("employment_type", &self.employment_type)?,
            bank_account: parse_choice::<BankAccount>("bank_account", &self.bank_account)?,
            socio_status: parse_choice::<SocioStatus>("socio_status", &self.socio_status)?,
            family_size: parse_number("family_size", &self.family_size)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentForm {
    pub patient_name: String,
    pub phone: String,
    pub doctor_name: String,
    pub date: Option<NaiveDate>,
    pub time: String,
    pub notes: Option<String>,
}

impl Validate for AppointmentForm {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("patient_name", &self.patient_name)?;
        validate_non_empty_string("phone", &self.phone)?;
        validate_non_empty_string("doctor_name", &self.doctor_name)?;
        if self.date.is_none() {
            return Err(HealthError::validation("date", "Please pick a date"));
        }
        validate_non_empty_string("time", &self.time)?;

        if doctor_by_name(&self.doctor_name).is_none() {
            return Err(HealthError::validation(
                "doctor_name",
                format!("Unknown doctor: {}", self.doctor_name),
            ));
        }
        if !TIME_SLOTS.contains(&self.time.as_str()) {
            return Err(HealthError::validation(
                "time",
                format!("Available slots: {}", TIME_SLOTS.join(", ")),
            ));
        }
        Ok(())
    }
}

impl AppointmentForm {
    pub fn into_appointment(self, created_at: DateTime<Utc>) -> Result<(Appointment, NaiveDate)> {
        self.validate()?;
        let date = self
            .date
            .ok_or_else(|| HealthError::validation("date", "Please pick a date"))?;
        let appointment = Appointment {
            patient_name: self.patient_name,
            phone: self.phone,
            doctor_name: self.doctor_name,
            date: format!("{}T00:00:00.000Z", date.format("%Y-%m-%d")),
            time: self.time,
            kind: "checkup".to_string(),
            status: "scheduled".to_string(),
            notes: self.notes.unwrap_or_default(),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        Ok((appointment, date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_lookup() {
        assert_eq!(known_symptom(" shortness OF breath"), Some("Shortness of breath"));
        assert_eq!(known_symptom("sneezing"), None);
        assert_eq!(severity_label("Severe"), Some("Severe - Significantly affecting daily life"));
        assert_eq!(severity_label("very severe"), Some("Very Severe - Need immediate attention"));
        assert_eq!(severity_label("mild - barely noticeable"), Some("Mild - Barely noticeable"));
        assert_eq!(severity_label("extreme"), None);
    }

    #[test]
    fn test_symptom_form_rules() {
        let mut form = SymptomForm {
            main_symptom: "fever".to_string(),
            duration: "3 days".to_string(),
            severity: "mild - barely noticeable".to_string(),
            additional_symptoms: String::new(),
        };
        assert!(form.validate().is_ok());

        form.main_symptom = "f".to_string();
        let err = form.clone().into_report().unwrap_err();
        assert!(matches!(err, HealthError::ValidationError { ref field, .. } if field == "main_symptom"));

        form.main_symptom = "cough".to_string();
        form.duration.clear();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_diet_instructions_are_merged() {
        let form = DietForm {
            disease_name: "Diabetes".to_string(),
            condition: "Type 2".to_string(),
            special_instructions: Some("Avoid sugar".to_string()),
            cuisine: Some("Punjabi".to_string()),
            region: Some("North India".to_string()),
        };
        let request = form.into_request().unwrap();
        assert_eq!(
            request.special_instructions,
            "Avoid sugar. Preferred Cuisine: Punjabi. Region: North India"
        );
    }

    #[test]
    fn test_diet_instructions_skip_empty_parts() {
        let form = DietForm {
            disease_name: "Hypertension".to_string(),
            condition: "on medication".to_string(),
            special_instructions: Some(String::new()),
            cuisine: None,
            region: Some("Bengal".to_string()),
        };
        assert_eq!(form.combined_instructions(), "Region: Bengal");

        let bare = DietForm {
            disease_name: "x".to_string(),
            condition: "y".to_string(),
            ..Default::default()
        };
        assert_eq!(bare.combined_instructions(), "");
    }

    #[test]
    fn test_diet_form_requires_disease() {
        let form = DietForm {
            condition: "Type 2".to_string(),
            ..Default::default()
        };
        assert!(form.into_request().is_err());
    }

    #[test]
    fn test_scheme_form_parsing() {
        let form = SchemeForm {
            age: "35".to_string(),
            income: " 120000".to_string(),
            employment_type: "Private".to_string(),
            bank_account: "yes".to_string(),
            socio_status: "BPL".to_string(),
            family_size: "5".to_string(),
        };
        let request = form.clone().into_request().unwrap();
        assert_eq!(request.income, 120000);
        assert_eq!(request.bank_account, BankAccount::Yes);

        let bad = SchemeForm {
            age: "thirty".to_string(),
            ..form
        };
        let err = bad.into_request().unwrap_err();
        assert!(matches!(err, HealthError::ValidationError { ref field, .. } if field == "age"));
    }

    #[test]
    fn test_appointment_form() {
        let form = AppointmentForm {
            patient_name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            doctor_name: "Dr. Priyanka Iyer".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 5),
            time: "10:30".to_string(),
            notes: None,
        };
        let booked_at = DateTime::parse_from_rfc3339("2025-01-02T08:15:30.25Z")
            .unwrap()
            .with_timezone(&Utc);
        let (appointment, _) = form.clone().into_appointment(booked_at).unwrap();
        assert_eq!(appointment.date, "2025-01-05T00:00:00.000Z");
        assert_eq!(appointment.created_at, "2025-01-02T08:15:30.250Z");

        let doc = serde_json::to_value(&appointment).unwrap();
        assert_eq!(doc["createdAt"], "2025-01-02T08:15:30.250Z");
        assert_eq!(appointment.kind, "checkup");
        assert_eq!(appointment.status, "scheduled");
        assert_eq!(appointment.notes, "");

        let off_slot = AppointmentForm {
            time: "12:00".to_string(),
            ..form.clone()
        };
        assert!(off_slot.validate().is_err());

        let no_date = AppointmentForm { date: None, ..form };
        assert!(no_date.validate().is_err());
    }
}
