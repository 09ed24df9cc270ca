use jiff::Timestamp;

use nexacare_catalog::get_assessment;
use nexacare_core::models::answer::{AnswerRecord, AnswerValue};
use nexacare_intake::IntakeError;
use nexacare_intake::formatter::build_submission;

fn now() -> Timestamp {
    "2025-05-01T12:00:00Z".parse().unwrap()
}

/// The minimum answers a sleep_health submission needs.
fn required_answers() -> AnswerRecord {
    let mut record = AnswerRecord::new();
    record.set(1, AnswerValue::Text("Ama Mensah".to_string()));
    record.set(2, AnswerValue::Integer(34));
    record.set(3, AnswerValue::Text("Female".to_string()));
    record.set(7, AnswerValue::Number(6.5));
    record.set(8, AnswerValue::Text("23:30".to_string()));
    record.set(9, AnswerValue::Text("07:00".to_string()));
    record
}

#[test]
fn intake_answers_route_to_demographics() {
    let definition = get_assessment("sleep_health").unwrap();
    let mut questions = nexacare_catalog::intake::intake_questions();
    questions.extend(definition.questions.iter().cloned());

    let mut record = required_answers();
    record.set(5, AnswerValue::Text("ama@example.com".to_string()));

    let payload = build_submission(&definition, &questions, &record, now()).unwrap();

    assert_eq!(payload.user_info.full_name.as_deref(), Some("Ama Mensah"));
    assert_eq!(payload.user_info.age, Some(34));
    assert_eq!(payload.user_info.gender.as_deref(), Some("Female"));
    assert_eq!(payload.user_info.email_address.as_deref(), Some("ama@example.com"));
    assert_eq!(payload.user_info.phone_number, None);

    // Intake ids never leak into the answer list.
    assert!(payload.answers.iter().all(|a| a.question_id > 6));
}

#[test]
fn multi_select_flattens_to_joined_text() {
    let definition = get_assessment("symptom_checker").unwrap();
    let mut questions = nexacare_catalog::intake::intake_questions();
    questions.extend(definition.questions.iter().cloned());

    let mut record = AnswerRecord::new();
    record.set(1, AnswerValue::Text("Kofi Boateng".to_string()));
    record.set(2, AnswerValue::Integer(41));
    record.set(3, AnswerValue::Text("Male".to_string()));
    record.set(
        7,
        AnswerValue::Many(vec!["Fever".to_string(), "Headache".to_string()]),
    );
    // Remaining required symptom questions.
    for question in &questions {
        if question.required && record.get(question.id).is_none() {
            record.set(question.id, AnswerValue::Text("None".to_string()));
        }
    }

    let payload = build_submission(&definition, &questions, &record, now()).unwrap();
    let symptom = payload
        .answers
        .iter()
        .find(|a| a.question_id == 7)
        .unwrap();
    assert_eq!(
        symptom.answer,
        AnswerValue::Text("Fever, Headache".to_string())
    );
    assert_eq!(symptom.weight, 3);
}

#[test]
fn empty_answers_are_dropped() {
    let definition = get_assessment("sleep_health").unwrap();
    let mut questions = nexacare_catalog::intake::intake_questions();
    questions.extend(definition.questions.iter().cloned());

    let mut record = required_answers();
    record.set(31, AnswerValue::Text(String::new()));
    record.set(10, AnswerValue::Many(vec![]));

    let payload = build_submission(&definition, &questions, &record, now()).unwrap();
    assert!(payload.answers.iter().all(|a| a.question_id != 31));
    assert!(payload.answers.iter().all(|a| a.question_id != 10));
}

#[test]
fn weight_defaults_to_one_for_unweighted_questions() {
    let definition = get_assessment("sleep_health").unwrap();
    let mut questions = nexacare_catalog::intake::intake_questions();
    questions.extend(definition.questions.iter().cloned());

    let mut record = required_answers();
    record.set(31, AnswerValue::Text("shift work".to_string()));

    let payload = build_submission(&definition, &questions, &record, now()).unwrap();

    let free_text = payload.answers.iter().find(|a| a.question_id == 31).unwrap();
    assert_eq!(free_text.weight, 1);

    let hours = payload.answers.iter().find(|a| a.question_id == 7).unwrap();
    assert_eq!(hours.weight, 3);
}

#[test]
fn answers_emerge_in_ascending_question_order() {
    let definition = get_assessment("sleep_health").unwrap();
    let mut questions = nexacare_catalog::intake::intake_questions();
    questions.extend(definition.questions.iter().cloned());

    // Recording order scrambled on purpose.
    let mut record = AnswerRecord::new();
    record.set(31, AnswerValue::Text("travel".to_string()));
    record.set(9, AnswerValue::Text("07:00".to_string()));
    record.set(7, AnswerValue::Number(6.5));
    record.set(8, AnswerValue::Text("23:30".to_string()));
    record.set(2, AnswerValue::Integer(29));
    record.set(1, AnswerValue::Text("Efua Owusu".to_string()));
    record.set(3, AnswerValue::Text("Female".to_string()));

    let payload = build_submission(&definition, &questions, &record, now()).unwrap();
    let ids: Vec<u32> = payload.answers.iter().map(|a| a.question_id).collect();
    assert_eq!(ids, vec![7, 8, 9, 31]);
}

#[test]
fn missing_required_names_every_gap() {
    let definition = get_assessment("sleep_health").unwrap();
    let mut questions = nexacare_catalog::intake::intake_questions();
    questions.extend(definition.questions.iter().cloned());

    let mut record = AnswerRecord::new();
    record.set(1, AnswerValue::Text("Ama Mensah".to_string()));

    let err = build_submission(&definition, &questions, &record, now()).unwrap_err();
    assert_eq!(err, IntakeError::MissingRequired(vec![2, 3, 7, 8, 9]));
}

#[test]
fn payload_serializes_like_the_portal_expects() {
    let definition = get_assessment("sleep_health").unwrap();
    let mut questions = nexacare_catalog::intake::intake_questions();
    questions.extend(definition.questions.iter().cloned());

    let payload = build_submission(&definition, &questions, &required_answers(), now()).unwrap();
    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["assessment_id"], "sleep_health");
    assert_eq!(value["user_info"]["Full Name"], "Ama Mensah");
    assert_eq!(value["user_info"]["Age"], 34);
    assert!(value["user_info"].get("Phone Number").is_none());
    assert_eq!(value["answers"][0]["question_id"], 7);
    assert_eq!(value["answers"][0]["weight"], 3);
    assert_eq!(value["timestamp"], "2025-05-01T12:00:00Z");
}

#[test]
fn numeric_age_truncates_like_the_intake_form() {
    let definition = get_assessment("sleep_health").unwrap();
    let mut questions = nexacare_catalog::intake::intake_questions();
    questions.extend(definition.questions.iter().cloned());

    let mut record = required_answers();
    record.set(2, AnswerValue::Number(34.9));

    let payload = build_submission(&definition, &questions, &record, now()).unwrap();
    assert_eq!(payload.user_info.age, Some(34));
}
