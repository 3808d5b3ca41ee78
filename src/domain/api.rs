//! Payloads exchanged with the external AI backend.
//!
//! Each response is decoded once into one of these types; nothing downstream
//! inspects raw JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomReport {
    pub main_symptom: String,
    pub duration: String,
    pub severity: String,
    pub additional_symptoms: String,
}

/// The detection service owns the shape of its answer, so it is kept as an open object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnosis {
    pub fields: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietRequest {
    pub disease_name: String,
    pub condition: String,
    pub special_instructions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    pub disease_name: String,
    pub condition: String,
    #[serde(default)]
    pub special_instructions: Option<String>,
    pub diet_plan: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub patient_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub doctor_response: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    Government,
    Unorganized,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BankAccount {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocioStatus {
    #[serde(rename = "BPL")]
    Bpl,
    #[serde(rename = "Non-BPL")]
    NonBpl,
}

macro_rules! impl_choice {
    ($ty:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            pub const CHOICES: &'static [&'static str] = &[$($label),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($label) {
                        return Ok($ty::$variant);
                    }
                )+
                Err(format!("expected one of: {}", Self::CHOICES.join(", ")))
            }
        }
    };
}

impl_choice!(EmploymentType {
    Government => "Government",
    Unorganized => "Unorganized",
    Private => "Private",
});

impl_choice!(BankAccount {
    Yes => "Yes",
    No => "No",
});

impl_choice!(SocioStatus {
    Bpl => "BPL",
    NonBpl => "Non-BPL",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeRequest {
    pub age: u32,
    pub income: u64,
    pub employment_type: EmploymentType,
    pub bank_account: BankAccount,
    pub socio_status: SocioStatus,
    pub family_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeRecommendation {
    #[serde(rename = "Recommended Scheme")]
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportAnalysis {
    #[serde(default)]
    pub extracted_text: Option<String>,
    #[serde(default)]
    pub medical_insights: Option<MedicalInsights>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalInsights {
    #[serde(default)]
    pub key_terms: Vec<String>,
    #[serde(default)]
    pub possible_conditions: Vec<PossibleCondition>,
    #[serde(default)]
    pub advice: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleCondition {
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub implication: Option<String>,
    #[serde(default)]
    pub tests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Myth {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MythFeed {
    #[serde(default)]
    pub myths: Vec<Myth>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_request_wire_format() {
        let request = SchemeRequest {
            age: 42,
            income: 90000,
            employment_type: EmploymentType::Unorganized,
            bank_account: BankAccount::Yes,
            socio_status: SocioStatus::NonBpl,
            family_size: 4,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["employment_type"], "Unorganized");
        assert_eq!(value["bank_account"], "Yes");
        assert_eq!(value["socio_status"], "Non-BPL");
        assert_eq!(value["family_size"], 4);
    }

    #[test]
    fn test_choice_parsing_is_case_insensitive() {
        assert_eq!("bpl".parse::<SocioStatus>().unwrap(), SocioStatus::Bpl);
        assert_eq!("non-bpl".parse::<SocioStatus>().unwrap(), SocioStatus::NonBpl);
        assert_eq!("private".parse::<EmploymentType>().unwrap(), EmploymentType::Private);
        assert!("freelance".parse::<EmploymentType>().is_err());
    }

    #[test]
    fn test_report_analysis_tolerates_missing_sections() {
        let analysis: ReportAnalysis = serde_json::from_str(
            r#"{"medical_insights": {"key_terms": ["HbA1c"], "possible_conditions": [{"condition": "Diabetes"}]}}"#,
        )
        .unwrap();

        assert!(analysis.extracted_text.is_none());
        let insights = analysis.medical_insights.unwrap();
        assert_eq!(insights.key_terms, vec!["HbA1c"]);
        assert_eq!(insights.possible_conditions[0].condition.as_deref(), Some("Diabetes"));
        assert!(insights.possible_conditions[0].tests.is_empty());
        assert!(insights.advice.is_empty());
    }
}
