use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A recorded answer to a single question.
///
/// Untagged on the wire: `34` decodes as an integer, `6.5` as a number,
/// `"occasionally"` as text, and `["Fatigue", "Headache"]` as a
/// multi-select list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum AnswerValue {
    Integer(i64),
    Number(f64),
    Text(String),
    Many(Vec<String>),
}

impl AnswerValue {
    /// Whether this value counts as "no answer": the empty string, an empty
    /// list, or a list whose entries are all empty. Numeric answers are
    /// never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Integer(_) | AnswerValue::Number(_) => false,
            AnswerValue::Text(text) => text.is_empty(),
            AnswerValue::Many(items) => items.iter().all(|item| item.is_empty()),
        }
    }

    /// Read the value as an integer where that makes sense: integers pass
    /// through, numbers truncate, text parses leniently. Lists have no
    /// integer reading.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AnswerValue::Integer(value) => Some(*value),
            AnswerValue::Number(value) => Some(*value as i64),
            AnswerValue::Text(text) => text.trim().parse().ok(),
            AnswerValue::Many(_) => None,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Integer(value) => write!(f, "{value}"),
            AnswerValue::Number(value) => write!(f, "{value}"),
            AnswerValue::Text(text) => f.write_str(text),
            AnswerValue::Many(items) => f.write_str(&items.join(", ")),
        }
    }
}

/// Accumulated answers for an assessment session, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord(BTreeMap<u32, AnswerValue>);

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier one for the same question.
    pub fn set(&mut self, question_id: u32, value: AnswerValue) {
        self.0.insert(question_id, value);
    }

    pub fn get(&self, question_id: u32) -> Option<&AnswerValue> {
        self.0.get(&question_id)
    }

    /// Whether the question has a non-empty entry.
    pub fn is_answered(&self, question_id: u32) -> bool {
        self.0
            .get(&question_id)
            .is_some_and(|value| !value.is_empty())
    }

    /// Count of non-empty entries.
    pub fn answered_count(&self) -> usize {
        self.0.values().filter(|value| !value.is_empty()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &AnswerValue)> {
        self.0.iter().map(|(id, value)| (*id, value))
    }
}
