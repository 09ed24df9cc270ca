use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Question ids 1 through 6 are reserved for the shared intake questions;
/// assessment-specific questions start at 7.
pub const DEMOGRAPHIC_QUESTION_COUNT: u32 = 6;

/// A single question in an assessment form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// Unique within the combined intake + assessment question list.
    pub id: u32,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default)]
    pub required: bool,
    /// Clinical weight applied when formatting answers; defaults to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl Question {
    pub fn is_demographic(&self) -> bool {
        self.id <= DEMOGRAPHIC_QUESTION_COUNT
    }
}

/// Input control backing a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Text,
    Number,
    Email,
    /// Single-select.
    MultipleChoice,
    /// Multi-select.
    Checkbox,
    /// Bounded integer slider.
    Scale,
}

/// The fixed intake fields backing question ids 1–6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemographicField {
    FullName,
    Age,
    Gender,
    PhoneNumber,
    EmailAddress,
    PlaceOfResidence,
}

impl DemographicField {
    /// Map a reserved question id to its intake field.
    pub fn from_question_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(DemographicField::FullName),
            2 => Some(DemographicField::Age),
            3 => Some(DemographicField::Gender),
            4 => Some(DemographicField::PhoneNumber),
            5 => Some(DemographicField::EmailAddress),
            6 => Some(DemographicField::PlaceOfResidence),
            _ => None,
        }
    }

    /// The exact key this field serializes under in submission payloads.
    pub fn json_key(&self) -> &'static str {
        match self {
            DemographicField::FullName => "Full Name",
            DemographicField::Age => "Age",
            DemographicField::Gender => "Gender",
            DemographicField::PhoneNumber => "Phone Number",
            DemographicField::EmailAddress => "Email Address",
            DemographicField::PlaceOfResidence => "Place of Residence",
        }
    }
}
