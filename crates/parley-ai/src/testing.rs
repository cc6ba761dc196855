//! Scripted `AiClient` for tests that must not touch the network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{AiClient, AiError, AiResponse, InferenceOptions, Message, TokenUsage};

/// One recorded `send_message` invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub messages: Vec<Message>,
    pub options: InferenceOptions,
}

/// Mock client that replays queued replies and records every request.
///
/// With nothing queued it answers with a fixed echo of the last user turn.
pub struct ScriptedClient {
    model: String,
    replies: Mutex<VecDeque<Result<AiResponse, AiError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::with_model("scripted-model")
    }

    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful reply.
    pub fn queue_answer(&self, text: impl Into<String>) {
        let content = text.into();
        let response = AiResponse {
            usage: TokenUsage {
                input_tokens: 12,
                output_tokens: content.split_whitespace().count() as u64,
            },
            content,
            stop_reason: Some("end_turn".into()),
        };
        self.replies.lock().unwrap().push_back(Ok(response));
    }

    /// Queue a failed call.
    pub fn queue_error(&self, error: AiError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    /// Every request received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for ScriptedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    async fn send_message(
        &self,
        messages: &[Message],
        options: &InferenceOptions,
    ) -> Result<AiResponse, AiError> {
        self.calls.lock().unwrap().push(RecordedCall {
            messages: messages.to_vec(),
            options: options.clone(),
        });

        let queued = self.replies.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| {
            let last = messages.last().map(|m| m.content.as_str()).unwrap_or("");
            Ok(AiResponse {
                content: format!("echo: {last}"),
                stop_reason: Some("end_turn".into()),
                usage: TokenUsage::default(),
            })
        })
    }

    fn model(&self) -> &str {
        &self.model
    }
}
