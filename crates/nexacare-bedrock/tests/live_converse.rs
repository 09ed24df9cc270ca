//! Integration tests against the real Bedrock Converse API.
//!
//! These tests call real AWS APIs and require valid credentials in the
//! environment (e.g. `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`).
//!
//! Run with: `cargo test -p nexacare-bedrock --test live_converse -- --ignored`

use nexacare_bedrock::chat::{
    ChatMessage, ChatRole, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, generate_chat_completion,
};
use nexacare_bedrock::engine::{AnalysisEngine, BedrockAnalysisEngine};

const MODEL_ID: &str = "us.anthropic.claude-3-5-haiku-20241022-v1:0";

async fn build_config() -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .load()
        .await
}

#[tokio::test]
#[ignore]
async fn chat_completion_answers_a_simple_turn() {
    let config = build_config().await;
    let client = aws_sdk_bedrockruntime::Client::new(&config);

    let messages = [ChatMessage {
        role: ChatRole::User,
        content: "Reply with the single word: pong".to_string(),
    }];

    let reply = generate_chat_completion(
        &client,
        MODEL_ID,
        &messages,
        DEFAULT_MAX_TOKENS,
        DEFAULT_TEMPERATURE,
    )
    .await
    .expect("converse should succeed");

    println!("reply: {reply}");
    assert!(!reply.is_empty());
}

#[tokio::test]
#[ignore]
async fn system_role_message_steers_the_reply() {
    let config = build_config().await;
    let client = aws_sdk_bedrockruntime::Client::new(&config);

    let messages = [
        ChatMessage {
            role: ChatRole::System,
            content: "Answer in exactly one word.".to_string(),
        },
        ChatMessage {
            role: ChatRole::User,
            content: "What color is a clear daytime sky?".to_string(),
        },
    ];

    let reply = generate_chat_completion(&client, MODEL_ID, &messages, 100, 0.0)
        .await
        .expect("converse should succeed");

    println!("reply: {reply}");
    assert!(reply.to_lowercase().contains("blue"));
}

#[tokio::test]
#[ignore]
async fn engine_generates_structured_analysis() {
    let config = build_config().await;
    let engine = BedrockAnalysisEngine::new(&config, MODEL_ID);

    let analysis = engine
        .generate(
            "You are a health assistant. Reply with a one-paragraph summary.",
            "A 34 year old reports sleeping 6.5 hours per night and daytime tiredness.",
        )
        .await
        .expect("generate should succeed");

    println!("analysis: {analysis}");
    assert!(analysis.len() > 40);
}
