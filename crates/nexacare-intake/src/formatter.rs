//! Turns a finished session into the analyze endpoint's payload.
//!
//! Intake answers (ids 1–6) route into the demographics block; everything
//! else becomes an `AnsweredQuestion`. Empty answers are dropped entirely,
//! and multi-select answers flatten to a comma-joined string, which is how
//! the analysis prompt expects to read them.

use jiff::Timestamp;

use nexacare_catalog::AssessmentDefinition;
use nexacare_core::models::answer::{AnswerRecord, AnswerValue};
use nexacare_core::models::question::{DemographicField, Question};
use nexacare_core::models::submission::{AnsweredQuestion, Demographics, SubmissionPayload};

use crate::error::IntakeError;

/// Build the submission payload, validating required coverage first.
///
/// Rejects with every missing required question id at once, so a caller
/// can surface the full list instead of fixing one gap per attempt.
pub fn build_submission(
    definition: &AssessmentDefinition,
    questions: &[Question],
    record: &AnswerRecord,
    timestamp: Timestamp,
) -> Result<SubmissionPayload, IntakeError> {
    let missing: Vec<u32> = questions
        .iter()
        .filter(|question| question.required && !record.is_answered(question.id))
        .map(|question| question.id)
        .collect();
    if !missing.is_empty() {
        return Err(IntakeError::MissingRequired(missing));
    }

    let mut user_info = Demographics::default();
    let mut answers = Vec::new();

    for question in questions {
        let Some(value) = record.get(question.id) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }

        match DemographicField::from_question_id(question.id) {
            Some(field) => user_info.set(field, value),
            None => answers.push(AnsweredQuestion {
                question_id: question.id,
                question: question.prompt.clone(),
                answer: flatten(value),
                weight: question.weight.unwrap_or(1),
            }),
        }
    }

    answers.sort_by_key(|answer| answer.question_id);

    Ok(SubmissionPayload {
        assessment_name: definition.name.clone(),
        assessment_id: definition.assessment_id.clone(),
        user_info,
        answers,
        timestamp,
    })
}

fn flatten(value: &AnswerValue) -> AnswerValue {
    match value {
        AnswerValue::Many(items) => AnswerValue::Text(items.join(", ")),
        other => other.clone(),
    }
}
