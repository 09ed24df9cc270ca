use jiff::Timestamp;

use nexacare_catalog::{AssessmentDefinition, intake};
use nexacare_core::models::answer::{AnswerRecord, AnswerValue};
use nexacare_core::models::question::{Question, QuestionKind};
use nexacare_core::models::submission::SubmissionPayload;

use crate::error::IntakeError;
use crate::formatter;

/// Completion state of a stepped session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Questions with a non-empty recorded answer.
    pub answered: usize,
    /// Total question count, intake included.
    pub total: usize,
}

/// A stepped walk through one assessment: the six shared intake questions
/// followed by the assessment's specialized questions, one at a time.
///
/// Answers accumulate in an [`AnswerRecord`] keyed by question id, so
/// revisiting a step and re-answering replaces the previous value.
/// Forward movement is gated on the current question being answered;
/// backward movement and jumps to already-visited steps are always free.
pub struct IntakeSession {
    definition: AssessmentDefinition,
    questions: Vec<Question>,
    current: usize,
    highest_visited: usize,
    record: AnswerRecord,
}

impl IntakeSession {
    pub fn new(definition: AssessmentDefinition) -> Self {
        let mut questions = intake::intake_questions();
        questions.extend(definition.questions.iter().cloned());
        IntakeSession {
            definition,
            questions,
            current: 0,
            highest_visited: 0,
            record: AnswerRecord::new(),
        }
    }

    pub fn definition(&self) -> &AssessmentDefinition {
        &self.definition
    }

    /// The full ordered question list, intake first.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        // current is clamped to the question list by construction
        &self.questions[self.current]
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self
                .questions
                .iter()
                .filter(|question| self.record.is_answered(question.id))
                .count(),
            total: self.questions.len(),
        }
    }

    /// Progress as the portal displays it: the step being shown counts as
    /// underway, so a fresh session already reports a nonzero percentage.
    pub fn percent_complete(&self) -> f64 {
        ((self.current + 1) as f64 / self.questions.len() as f64) * 100.0
    }

    /// Record an answer for any question in this session.
    ///
    /// Values are stored as given; emptiness only matters when gating
    /// forward movement and when the submission is built.
    pub fn record_answer(&mut self, question_id: u32, value: AnswerValue) -> Result<(), IntakeError> {
        if !self.questions.iter().any(|q| q.id == question_id) {
            return Err(IntakeError::UnknownQuestion(question_id));
        }
        self.record.set(question_id, value);
        Ok(())
    }

    /// Record an answer for the question currently shown.
    pub fn answer(&mut self, value: AnswerValue) {
        let id = self.current_question().id;
        self.record.set(id, value);
    }

    /// Move to the next question. Blocked while the current question is
    /// unanswered; a no-op on the last question.
    pub fn advance(&mut self) -> Result<(), IntakeError> {
        self.check_current_answered()?;
        if self.current < self.questions.len() - 1 {
            self.current += 1;
            self.highest_visited = self.highest_visited.max(self.current);
        }
        Ok(())
    }

    /// Move to the previous question. A no-op on the first question.
    pub fn back(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Jump directly to a previously visited step.
    pub fn jump_to(&mut self, index: usize) -> Result<(), IntakeError> {
        if index > self.highest_visited {
            return Err(IntakeError::NotYetVisited {
                requested: index,
                highest: self.highest_visited,
            });
        }
        self.current = index;
        Ok(())
    }

    /// Ids of required questions that still lack a usable answer.
    pub fn unmet_required(&self) -> Vec<u32> {
        self.questions
            .iter()
            .filter(|question| question.required && !self.record.is_answered(question.id))
            .map(|question| question.id)
            .collect()
    }

    /// Build the submission payload from the recorded answers.
    ///
    /// Fails with [`IntakeError::MissingRequired`] naming every required
    /// question that is still unanswered; the session is left intact so
    /// the caller can collect the missing answers and retry.
    pub fn submit(&self, timestamp: Timestamp) -> Result<SubmissionPayload, IntakeError> {
        formatter::build_submission(&self.definition, &self.questions, &self.record, timestamp)
    }

    fn check_current_answered(&self) -> Result<(), IntakeError> {
        let question = self.current_question();
        let answer = self.record.get(question.id);

        if question.required {
            match answer {
                None => return Err(IntakeError::Unanswered(question.id)),
                Some(AnswerValue::Text(text)) if text.is_empty() => {
                    return Err(IntakeError::Unanswered(question.id));
                }
                _ => {}
            }
        }

        // A recorded checkbox selection must contain at least one real item,
        // required or not.
        if question.kind == QuestionKind::Checkbox {
            if let Some(AnswerValue::Many(items)) = answer {
                if !items.iter().any(|item| !item.is_empty()) {
                    return Err(IntakeError::Unanswered(question.id));
                }
            }
        }

        Ok(())
    }
}
