use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use nexacare_bedrock::chat::{ChatMessage, ChatRole, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use nexacare_catalog::prompts::ChatContext;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub context: ChatContext,
    pub max_tokens: Option<i32>,
    pub temperature: Option<f32>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Chat completion under a portal-context system prompt. An explicit
/// system message in the conversation wins over the context default.
pub async fn chat_completion(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if request.messages.is_empty() {
        return Err(ApiError::BadRequest("Missing chat messages".to_string()));
    }

    let mut messages = request.messages;
    if !messages.iter().any(|m| m.role == ChatRole::System) {
        messages.insert(
            0,
            ChatMessage {
                role: ChatRole::System,
                content: request.context.system_prompt().to_string(),
            },
        );
    }

    let reply = state
        .engine
        .chat(
            &messages,
            request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        )
        .await
        .map_err(|e| ApiError::internal("Failed to generate chat response", e.to_string()))?;

    Ok(Json(ChatResponse { reply }))
}
