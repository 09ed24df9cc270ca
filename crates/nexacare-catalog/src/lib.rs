//! nexacare-catalog
//!
//! Static assessment configuration: the shared intake questions, the five
//! specialized assessment definitions, and the prompt template registry.
//! Pure data and lookup, with no AWS or HTTP dependency.

pub mod assessments;
pub mod intake;
pub mod prompts;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use nexacare_core::models::question::Question;

/// A complete assessment definition as the portal consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentDefinition {
    pub assessment_id: String,
    pub name: String,
    pub description: String,
    pub version: String,
    /// Assessment-specific questions, ids ascending from 7. The shared
    /// intake questions (ids 1–6) are prepended by the form controller.
    pub questions: Vec<Question>,
}

/// The closed set of specialized assessments.
///
/// Unknown identifiers resolve to `None` rather than falling through to a
/// catch-all prompt; adding an assessment means adding a variant here and
/// its definition module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    SymptomChecker,
    MentalHealth,
    CardioHealth,
    DiabetesRisk,
    SleepHealth,
}

impl AssessmentKind {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "symptom_checker" => Some(AssessmentKind::SymptomChecker),
            "mental_health" => Some(AssessmentKind::MentalHealth),
            "cardio_health" => Some(AssessmentKind::CardioHealth),
            "diabetes_risk" => Some(AssessmentKind::DiabetesRisk),
            "sleep_health" => Some(AssessmentKind::SleepHealth),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            AssessmentKind::SymptomChecker => "symptom_checker",
            AssessmentKind::MentalHealth => "mental_health",
            AssessmentKind::CardioHealth => "cardio_health",
            AssessmentKind::DiabetesRisk => "diabetes_risk",
            AssessmentKind::SleepHealth => "sleep_health",
        }
    }
}

/// Return all registered assessment definitions.
pub fn all_assessments() -> Vec<AssessmentDefinition> {
    vec![
        assessments::symptom_checker::definition(),
        assessments::mental_health::definition(),
        assessments::cardio_health::definition(),
        assessments::diabetes_risk::definition(),
        assessments::sleep_health::definition(),
    ]
}

/// Look up an assessment definition by id.
pub fn get_assessment(id: &str) -> Option<AssessmentDefinition> {
    all_assessments()
        .into_iter()
        .find(|assessment| assessment.assessment_id == id)
}
