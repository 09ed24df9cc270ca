//! nexacare-bedrock
//!
//! AWS Bedrock integration: the chat completion call shared by the chat
//! endpoint and the assessment analyzer, the submission-to-prompt context
//! builder, and the [`engine::AnalysisEngine`] seam the server mocks in
//! tests.

pub mod chat;
pub mod context;
pub mod engine;
pub mod error;

pub use error::BedrockError;
