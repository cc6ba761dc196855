use std::sync::Arc;

use async_trait::async_trait;
use parley_ai::{Assistant, ChatExchange};
use tracing::{info, warn};

use crate::dispatch::{HandlerInput, RequestHandler};
use crate::error::SkillError;
use crate::response::HandlerResponse;

/// Answers a free-form question with the model, using the session's
/// conversation so far as context.
pub struct QueryHandler {
    intent: String,
    slot: String,
    reprompt: String,
    assistant: Arc<Assistant>,
}

impl QueryHandler {
    pub fn new(
        intent: impl Into<String>,
        slot: impl Into<String>,
        reprompt: impl Into<String>,
        assistant: Arc<Assistant>,
    ) -> Self {
        Self {
            intent: intent.into(),
            slot: slot.into(),
            reprompt: reprompt.into(),
            assistant,
        }
    }
}

#[async_trait]
impl RequestHandler for QueryHandler {
    fn name(&self) -> &'static str {
        "query"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.envelope.is_intent_name(&self.intent)
    }

    async fn handle(&self, input: &mut HandlerInput<'_>) -> Result<HandlerResponse, SkillError> {
        let query = input
            .envelope
            .slot_value(&self.slot)
            .map(str::to_string)
            .ok_or_else(|| SkillError::MissingSlot(self.slot.clone()))?;
        if query.trim().is_empty() {
            warn!(slot = %self.slot, "Query slot is empty, passing through");
        }

        let history = input.attributes.chat_history_or_init()?;
        let outcome = self.assistant.reply(&history, &query).await;
        info!(
            history_len = history.len(),
            apology = outcome.is_apology(),
            "Query answered"
        );

        let answer = outcome.into_text();
        input
            .attributes
            .push_exchange(ChatExchange::new(query, answer.clone()))?;

        Ok(HandlerResponse::builder()
            .speak(answer)
            .ask(&self.reprompt)
            .build())
    }
}
