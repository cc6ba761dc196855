//! The inference boundary the skill talks to.
//!
//! `Assistant` owns the model client, the fixed generation settings and the
//! history window. It never returns an error: a failed call yields
//! `InferenceOutcome::Apology` carrying the configured apology text, which
//! the caller speaks and stores exactly like a real answer.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, error, warn};

use crate::history::{ChatExchange, HistoryWindow};
use crate::token_tracker::TokenTracker;
use crate::{AiClient, InferenceOptions, Message, TokenUsage};

/// Default text returned in place of an answer when the model call fails.
pub const DEFAULT_INFERENCE_APOLOGY: &str =
    "I encountered an error while processing your request. Please try again.";

/// Result of asking the model a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferenceOutcome {
    /// Text generated by the model.
    Answer(String),
    /// Canned apology substituted for a failed call.
    Apology(String),
}

impl InferenceOutcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Answer(text) | Self::Apology(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Answer(text) | Self::Apology(text) => text,
        }
    }

    pub fn is_apology(&self) -> bool {
        matches!(self, Self::Apology(_))
    }
}

/// Point-in-time copy of the usage counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageSnapshot {
    pub calls: u64,
    pub usage: TokenUsage,
}

pub struct Assistant {
    client: Arc<dyn AiClient>,
    options: InferenceOptions,
    window: HistoryWindow,
    apology: String,
    tracker: Mutex<TokenTracker>,
}

impl Assistant {
    pub fn new(client: Arc<dyn AiClient>, options: InferenceOptions) -> Self {
        Self {
            client,
            options,
            window: HistoryWindow::default(),
            apology: DEFAULT_INFERENCE_APOLOGY.to_string(),
            tracker: Mutex::new(TokenTracker::new()),
        }
    }

    pub fn with_history_window(mut self, window: HistoryWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_apology(mut self, apology: impl Into<String>) -> Self {
        self.apology = apology.into();
        self
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    pub fn window(&self) -> HistoryWindow {
        self.window
    }

    /// Message list that would be sent for `question` given `history`.
    pub fn build_messages(&self, history: &[ChatExchange], question: &str) -> Vec<Message> {
        self.window.build_messages(history, question)
    }

    /// Ask the model `question` with the windowed `history` as context.
    pub async fn reply(&self, history: &[ChatExchange], question: &str) -> InferenceOutcome {
        let messages = self.build_messages(history, question);

        match self.client.send_message(&messages, &self.options).await {
            Ok(response) => {
                debug!(
                    model = %self.client.model(),
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    stop_reason = response.stop_reason.as_deref().unwrap_or("unknown"),
                    "Inference complete"
                );
                self.tracker().record(&response.usage);
                InferenceOutcome::Answer(response.content)
            }
            Err(e) => {
                error!(model = %self.client.model(), error = %e, "Error generating response");
                InferenceOutcome::Apology(self.apology.clone())
            }
        }
    }

    pub fn usage(&self) -> UsageSnapshot {
        let tracker = self.tracker();
        UsageSnapshot {
            calls: tracker.call_count(),
            usage: *tracker.total(),
        }
    }

    // Counters stay usable after a panic elsewhere poisoned the lock.
    fn tracker(&self) -> MutexGuard<'_, TokenTracker> {
        self.tracker.lock().unwrap_or_else(|poisoned| {
            warn!("Token tracker lock was poisoned; continuing with recovered counters");
            poisoned.into_inner()
        })
    }
}
