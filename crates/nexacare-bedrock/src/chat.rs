//! Chat completion over the Bedrock Converse API.
//!
//! One entry point serves both surfaces: the chat endpoint passes its
//! conversation history straight through, and the assessment analyzer
//! builds a two-message system/user exchange. Mirrors the Anthropic
//! Messages API shape: at most one system prompt, taken from the first
//! system-role message, with the remaining turns sent in order.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use serde::{Deserialize, Serialize};

use crate::error::BedrockError;

// ── Types ────────────────────────────────────────────────────────────────────

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// System prompt used when the conversation carries none of its own.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful medical AI assistant. Provide accurate, helpful information while always recommending consulting healthcare professionals for medical decisions.";

/// Returned when the model reply contains no text block.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I cannot provide a response at this time.";

pub const DEFAULT_MAX_TOKENS: i32 = 1000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

// ── Conversation ─────────────────────────────────────────────────────────────

/// Send a conversation to Bedrock and return the assistant's reply.
///
/// The system prompt comes from the first system-role message, falling
/// back to [`DEFAULT_SYSTEM_PROMPT`]; system messages never appear in the
/// turn list itself.
pub async fn generate_chat_completion(
    client: &Client,
    model_id: &str,
    messages: &[ChatMessage],
    max_tokens: i32,
    temperature: f32,
) -> Result<String, BedrockError> {
    let system_prompt = messages
        .iter()
        .find(|m| m.role == ChatRole::System)
        .map(|m| m.content.as_str())
        .unwrap_or(DEFAULT_SYSTEM_PROMPT);

    let mut converse_messages: Vec<Message> = Vec::new();
    for msg in messages {
        let role = match msg.role {
            ChatRole::System => continue,
            ChatRole::User => ConversationRole::User,
            ChatRole::Assistant => ConversationRole::Assistant,
        };
        let message = Message::builder()
            .role(role)
            .content(ContentBlock::Text(msg.content.clone()))
            .build()
            .map_err(|e| BedrockError::Invocation(e.to_string()))?;
        converse_messages.push(message);
    }

    let inference = InferenceConfiguration::builder()
        .max_tokens(max_tokens)
        .temperature(temperature)
        .build();

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .set_messages(Some(converse_messages))
        .inference_config(inference)
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    // First text block wins; a reply without one gets the canned apology
    // rather than an error.
    let reply = output_message
        .content()
        .iter()
        .find_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.clone())
            } else {
                None
            }
        })
        .unwrap_or_else(|| FALLBACK_REPLY.to_string());

    Ok(reply)
}
