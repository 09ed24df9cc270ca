use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IntakeError {
    #[error("question {0} requires an answer before continuing")]
    Unanswered(u32),

    #[error("no question with id {0} in this assessment")]
    UnknownQuestion(u32),

    #[error("step {requested} not yet reached (highest visited: {highest})")]
    NotYetVisited { requested: usize, highest: usize },

    #[error("required questions left unanswered: {0:?}")]
    MissingRequired(Vec<u32>),
}
