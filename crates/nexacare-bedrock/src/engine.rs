//! The analysis engine seam.
//!
//! Routes depend on [`AnalysisEngine`] rather than the Bedrock client
//! directly, so API tests can swap in a scripted engine and exercise the
//! full request path without AWS credentials.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use tracing::info;

use crate::chat::{self, ChatMessage, ChatRole};
use crate::error::BedrockError;

/// Token ceiling for assessment analysis runs.
pub const ANALYSIS_MAX_TOKENS: i32 = 2000;
/// Analysis runs cooler than chat to keep reports consistent.
pub const ANALYSIS_TEMPERATURE: f32 = 0.3;

#[async_trait]
pub trait AnalysisEngine: Send + Sync {
    /// One-shot generation: a system prompt and a single user message,
    /// with the analysis inference settings.
    async fn generate(&self, system_prompt: &str, user_message: &str)
    -> Result<String, BedrockError>;

    /// Multi-turn conversation with caller-chosen inference settings.
    async fn chat(
        &self,
        messages: &[ChatMessage],
        max_tokens: i32,
        temperature: f32,
    ) -> Result<String, BedrockError>;
}

/// The production engine: Bedrock Converse against a fixed model.
pub struct BedrockAnalysisEngine {
    client: Client,
    model_id: String,
}

impl BedrockAnalysisEngine {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        BedrockAnalysisEngine {
            client: Client::new(config),
            model_id: model_id.into(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[async_trait]
impl AnalysisEngine for BedrockAnalysisEngine {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, BedrockError> {
        info!(model = %self.model_id, "starting analysis generation");

        let messages = [
            ChatMessage {
                role: ChatRole::System,
                content: system_prompt.to_string(),
            },
            ChatMessage {
                role: ChatRole::User,
                content: user_message.to_string(),
            },
        ];

        let analysis = chat::generate_chat_completion(
            &self.client,
            &self.model_id,
            &messages,
            ANALYSIS_MAX_TOKENS,
            ANALYSIS_TEMPERATURE,
        )
        .await?;

        info!(model = %self.model_id, chars = analysis.len(), "analysis generation complete");
        Ok(analysis)
    }

    async fn chat(
        &self,
        messages: &[ChatMessage],
        max_tokens: i32,
        temperature: f32,
    ) -> Result<String, BedrockError> {
        chat::generate_chat_completion(
            &self.client,
            &self.model_id,
            messages,
            max_tokens,
            temperature,
        )
        .await
    }
}
