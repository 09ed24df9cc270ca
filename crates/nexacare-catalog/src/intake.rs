//! The shared intake questions every assessment starts with.
//!
//! Ids 1–6 are reserved for these; the submission formatter routes their
//! answers into the demographic fields instead of the answer list.

use nexacare_core::models::question::{Question, QuestionKind};

/// The six demographic questions, ids 1–6 ascending. Name, age, and gender
/// are required; the contact fields are optional.
pub fn intake_questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            prompt: "What is your full name?".to_string(),
            kind: QuestionKind::Text,
            options: None,
            min: None,
            max: None,
            required: true,
            weight: None,
            placeholder: Some("Enter your full name".to_string()),
        },
        Question {
            id: 2,
            prompt: "What is your age?".to_string(),
            kind: QuestionKind::Number,
            options: None,
            min: Some(0.0),
            max: Some(120.0),
            required: true,
            weight: None,
            placeholder: Some("Enter your age in years".to_string()),
        },
        Question {
            id: 3,
            prompt: "What is your gender?".to_string(),
            kind: QuestionKind::MultipleChoice,
            options: Some(vec![
                "Female".to_string(),
                "Male".to_string(),
                "Non-binary".to_string(),
                "Prefer not to say".to_string(),
            ]),
            min: None,
            max: None,
            required: true,
            weight: None,
            placeholder: None,
        },
        Question {
            id: 4,
            prompt: "What is your phone number?".to_string(),
            kind: QuestionKind::Text,
            options: None,
            min: None,
            max: None,
            required: false,
            weight: None,
            placeholder: Some("e.g. +233 20 123 4567".to_string()),
        },
        Question {
            id: 5,
            prompt: "What is your email address?".to_string(),
            kind: QuestionKind::Email,
            options: None,
            min: None,
            max: None,
            required: false,
            weight: None,
            placeholder: Some("you@example.com".to_string()),
        },
        Question {
            id: 6,
            prompt: "Where do you live?".to_string(),
            kind: QuestionKind::Text,
            options: None,
            min: None,
            max: None,
            required: false,
            weight: None,
            placeholder: Some("City, Country".to_string()),
        },
    ]
}
