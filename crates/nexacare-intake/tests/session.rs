use jiff::Timestamp;

use nexacare_catalog::get_assessment;
use nexacare_core::models::answer::AnswerValue;
use nexacare_core::models::question::{Question, QuestionKind};
use nexacare_intake::{IntakeError, IntakeSession};

fn sleep_session() -> IntakeSession {
    IntakeSession::new(get_assessment("sleep_health").unwrap())
}

/// A plausible answer for any question kind, for walking sessions forward.
fn answer_for(question: &Question) -> AnswerValue {
    match question.kind {
        QuestionKind::Text | QuestionKind::Email => AnswerValue::Text("ok".to_string()),
        QuestionKind::Number | QuestionKind::Scale => {
            AnswerValue::Integer(question.min.map(|m| m as i64).unwrap_or(1))
        }
        QuestionKind::MultipleChoice => AnswerValue::Text(
            question
                .options
                .as_ref()
                .and_then(|options| options.first())
                .cloned()
                .unwrap_or_default(),
        ),
        QuestionKind::Checkbox => AnswerValue::Many(vec![
            question
                .options
                .as_ref()
                .and_then(|options| options.first())
                .cloned()
                .unwrap_or_default(),
        ]),
    }
}

fn walk_to(session: &mut IntakeSession, index: usize) {
    while session.current_index() < index {
        let value = answer_for(session.current_question());
        session.answer(value);
        session.advance().unwrap();
    }
}

#[test]
fn session_starts_on_first_intake_question() {
    let session = sleep_session();
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.current_question().id, 1);
    assert_eq!(session.questions().len(), 31);
    assert_eq!(session.questions()[6].id, 7);
}

#[test]
fn advance_blocked_until_required_question_answered() {
    let mut session = sleep_session();
    assert_eq!(session.advance(), Err(IntakeError::Unanswered(1)));

    session.answer(AnswerValue::Text("Ama Mensah".to_string()));
    session.advance().unwrap();
    assert_eq!(session.current_index(), 1);
}

#[test]
fn empty_text_does_not_satisfy_required() {
    let mut session = sleep_session();
    session.answer(AnswerValue::Text(String::new()));
    assert_eq!(session.advance(), Err(IntakeError::Unanswered(1)));
}

#[test]
fn optional_questions_can_be_skipped() {
    let mut session = sleep_session();
    walk_to(&mut session, 3);
    // Questions 4-6 (phone, email, residence) are optional.
    assert_eq!(session.current_question().id, 4);
    session.advance().unwrap();
    session.advance().unwrap();
    session.advance().unwrap();
    assert_eq!(session.current_question().id, 7);
}

#[test]
fn empty_checkbox_selection_blocks_advance() {
    let mut session = IntakeSession::new(get_assessment("symptom_checker").unwrap());
    walk_to(&mut session, 6);
    assert_eq!(session.current_question().kind, QuestionKind::Checkbox);

    session.answer(AnswerValue::Many(vec![]));
    assert_eq!(session.advance(), Err(IntakeError::Unanswered(7)));

    session.answer(AnswerValue::Many(vec!["Fatigue".to_string()]));
    session.advance().unwrap();
    assert_eq!(session.current_index(), 7);
}

#[test]
fn back_is_free_and_stops_at_start() {
    let mut session = sleep_session();
    session.back();
    assert_eq!(session.current_index(), 0);

    walk_to(&mut session, 2);
    session.back();
    assert_eq!(session.current_index(), 1);
}

#[test]
fn jump_limited_to_visited_steps() {
    let mut session = sleep_session();
    walk_to(&mut session, 4);

    session.jump_to(1).unwrap();
    assert_eq!(session.current_index(), 1);

    // Having jumped back does not lose the frontier.
    session.jump_to(4).unwrap();
    assert_eq!(
        session.jump_to(9),
        Err(IntakeError::NotYetVisited {
            requested: 9,
            highest: 4,
        })
    );
}

#[test]
fn advance_on_last_question_is_a_noop() {
    let mut session = sleep_session();
    walk_to(&mut session, 30);
    assert_eq!(session.current_question().id, 31);

    session.answer(AnswerValue::Text("nothing else".to_string()));
    session.advance().unwrap();
    session.advance().unwrap();
    assert_eq!(session.current_index(), 30);
}

#[test]
fn reanswering_replaces_rather_than_duplicates() {
    let mut session = sleep_session();
    session.answer(AnswerValue::Text("Ama".to_string()));
    session.answer(AnswerValue::Text("Ama Mensah".to_string()));
    assert_eq!(session.progress().answered, 1);
}

#[test]
fn percent_complete_counts_the_shown_step() {
    let mut session = sleep_session();
    assert!((session.percent_complete() - 100.0 / 31.0).abs() < 1e-9);

    walk_to(&mut session, 1);
    assert!((session.percent_complete() - 200.0 / 31.0).abs() < 1e-9);

    walk_to(&mut session, 30);
    assert!((session.percent_complete() - 100.0).abs() < 1e-9);
}

#[test]
fn recording_for_unknown_question_rejected() {
    let mut session = sleep_session();
    let err = session
        .record_answer(99, AnswerValue::Text("?".to_string()))
        .unwrap_err();
    assert_eq!(err, IntakeError::UnknownQuestion(99));
}

#[test]
fn unmet_required_lists_every_gap() {
    let session = sleep_session();
    assert_eq!(session.unmet_required(), vec![1, 2, 3, 7, 8, 9]);
}

#[test]
fn submit_rejects_then_succeeds_once_filled() {
    let mut session = sleep_session();
    let now: Timestamp = "2025-05-01T12:00:00Z".parse().unwrap();

    let err = session.submit(now).unwrap_err();
    assert_eq!(err, IntakeError::MissingRequired(vec![1, 2, 3, 7, 8, 9]));

    // The failed submit left the session intact.
    session.record_answer(1, AnswerValue::Text("Ama Mensah".to_string())).unwrap();
    session.record_answer(2, AnswerValue::Integer(34)).unwrap();
    session.record_answer(3, AnswerValue::Text("Female".to_string())).unwrap();
    session.record_answer(7, AnswerValue::Number(6.5)).unwrap();
    session.record_answer(8, AnswerValue::Text("23:30".to_string())).unwrap();
    session.record_answer(9, AnswerValue::Text("07:00".to_string())).unwrap();

    let payload = session.submit(now).unwrap();
    assert_eq!(payload.assessment_id, "sleep_health");
    assert_eq!(payload.assessment_name, "Sleep Health Check");
    assert_eq!(payload.timestamp, now);
}
