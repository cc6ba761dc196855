//! Inference engine for Parley.
//!
//! Provides:
//! - the `AiClient` trait and an Amazon Bedrock Converse implementation
//! - history windowing that turns stored exchanges into a message list
//! - an `Assistant` that degrades every inference failure to a spoken apology
//! - token usage tracking

pub mod assistant;
pub mod bedrock;
pub mod history;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod token_tracker;

use async_trait::async_trait;

pub use assistant::{Assistant, InferenceOutcome, UsageSnapshot, DEFAULT_INFERENCE_APOLOGY};
pub use bedrock::{BedrockClient, BedrockConfig, API_KEY_ENV_VAR};
pub use history::{ChatExchange, HistoryWindow, DEFAULT_HISTORY_WINDOW};
pub use token_tracker::TokenTracker;

#[async_trait]
pub trait AiClient: Send + Sync {
    /// Send one conversation to the model and wait for the full reply.
    async fn send_message(
        &self,
        messages: &[Message],
        options: &InferenceOptions,
    ) -> Result<AiResponse, AiError>;

    /// Model identifier requests are sent to.
    fn model(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Per-call generation settings sent alongside the messages.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceOptions {
    pub system_prompt: Option<String>,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            system_prompt: Some("You are a helpful assistant. Answer in 50 words or less.".into()),
            max_tokens: 300,
            temperature: 0.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub stop_reason: Option<String>,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Not configured: {0}")]
    NotConfigured(String),
}
