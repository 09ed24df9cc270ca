//! One module per assessment definition. Question ids start at 7 and
//! ascend; ids 1–6 belong to the shared intake questions.

pub mod cardio_health;
pub mod diabetes_risk;
pub mod mental_health;
pub mod sleep_health;
pub mod symptom_checker;

use nexacare_core::models::question::{Question, QuestionKind};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Single-select question. Selection is optional; only inputs the
/// analysis cannot do without carry an explicit required flag.
pub(crate) fn choice(id: u32, prompt: &str, options: &[&str], weight: u32) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        kind: QuestionKind::MultipleChoice,
        options: Some(strings(options)),
        min: None,
        max: None,
        required: false,
        weight: Some(weight),
        placeholder: None,
    }
}

/// Multi-select question.
pub(crate) fn checkbox(
    id: u32,
    prompt: &str,
    options: &[&str],
    required: bool,
    weight: u32,
) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        kind: QuestionKind::Checkbox,
        options: Some(strings(options)),
        min: None,
        max: None,
        required,
        weight: Some(weight),
        placeholder: None,
    }
}

/// Bounded slider, optional like [`choice`].
pub(crate) fn scale(id: u32, prompt: &str, min: f64, max: f64, weight: u32) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        kind: QuestionKind::Scale,
        options: None,
        min: Some(min),
        max: Some(max),
        required: false,
        weight: Some(weight),
        placeholder: None,
    }
}

/// Numeric input. An empty placeholder means none.
pub(crate) fn number(
    id: u32,
    prompt: &str,
    min: f64,
    max: f64,
    required: bool,
    weight: u32,
    placeholder: &str,
) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        kind: QuestionKind::Number,
        options: None,
        min: Some(min),
        max: Some(max),
        required,
        weight: Some(weight),
        placeholder: (!placeholder.is_empty()).then(|| placeholder.to_string()),
    }
}

/// Free-text input, never weighted. An empty placeholder means none.
pub(crate) fn text(id: u32, prompt: &str, required: bool, placeholder: &str) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        kind: QuestionKind::Text,
        options: None,
        min: None,
        max: None,
        required,
        weight: None,
        placeholder: (!placeholder.is_empty()).then(|| placeholder.to_string()),
    }
}
