use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::AnswerValue;
use super::question::DemographicField;

/// The six intake fields, serialized under the portal's exact JSON names.
/// Every field is optional so a partially answered intake still serializes;
/// absent fields are omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Demographics {
    #[serde(rename = "Full Name", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(rename = "Age", skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(rename = "Gender", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(rename = "Phone Number", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(rename = "Email Address", skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(rename = "Place of Residence", skip_serializing_if = "Option::is_none")]
    pub place_of_residence: Option<String>,
}

impl Demographics {
    /// Write one intake answer into its field. An unparseable age leaves
    /// the field unset rather than failing the submission.
    pub fn set(&mut self, field: DemographicField, value: &AnswerValue) {
        match field {
            DemographicField::FullName => self.full_name = Some(value.to_string()),
            DemographicField::Age => self.age = value.as_integer(),
            DemographicField::Gender => self.gender = Some(value.to_string()),
            DemographicField::PhoneNumber => self.phone_number = Some(value.to_string()),
            DemographicField::EmailAddress => self.email_address = Some(value.to_string()),
            DemographicField::PlaceOfResidence => {
                self.place_of_residence = Some(value.to_string())
            }
        }
    }
}

/// One answered assessment question as it appears in a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnsweredQuestion {
    pub question_id: u32,
    pub question: String,
    pub answer: AnswerValue,
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    1
}

/// The payload the portal posts for analysis.
///
/// `assessment_name`, `assessment_id`, and `answers` tolerate absence at the
/// serde layer so endpoint validation owns the failure mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionPayload {
    #[serde(default)]
    pub assessment_name: String,
    #[serde(default)]
    pub assessment_id: String,
    #[serde(default)]
    pub user_info: Demographics,
    #[serde(default)]
    pub answers: Vec<AnsweredQuestion>,
    pub timestamp: jiff::Timestamp,
}
