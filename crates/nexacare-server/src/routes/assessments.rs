use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use nexacare_catalog::{AssessmentDefinition, all_assessments, get_assessment, intake};
use nexacare_core::models::question::Question;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct AssessmentSummary {
    pub assessment_id: String,
    pub name: String,
    pub description: String,
    pub question_count: usize,
}

pub async fn list_assessments() -> Json<Vec<AssessmentSummary>> {
    let summaries = all_assessments()
        .into_iter()
        .map(|definition| AssessmentSummary {
            question_count: definition.questions.len(),
            assessment_id: definition.assessment_id,
            name: definition.name,
            description: definition.description,
        })
        .collect();
    Json(summaries)
}

pub async fn get_assessment_detail(
    Path(id): Path<String>,
) -> Result<Json<AssessmentDefinition>, ApiError> {
    let definition = get_assessment(&id)
        .ok_or_else(|| ApiError::NotFound(format!("assessment not found: {id}")))?;
    Ok(Json(definition))
}

/// Intake demographics followed by the assessment's own questions, in the
/// order the portal form walks them.
pub async fn get_assessment_questions(
    Path(id): Path<String>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let definition = get_assessment(&id)
        .ok_or_else(|| ApiError::NotFound(format!("assessment not found: {id}")))?;

    let mut questions = intake::intake_questions();
    questions.extend(definition.questions);
    Ok(Json(questions))
}
