//! nexacare-intake
//!
//! The client-side assessment flow: a stepped session over the shared
//! intake questions plus one assessment's specialized questions, with
//! required-answer gating, and the formatter that turns a finished
//! session into the submission payload the analyze endpoint expects.

pub mod error;
pub mod formatter;
pub mod session;

pub use error::IntakeError;
pub use session::{IntakeSession, Progress};
