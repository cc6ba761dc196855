use async_trait::async_trait;
use tracing::info;

use crate::dispatch::{HandlerInput, RequestHandler};
use crate::envelope::LAUNCH_REQUEST;
use crate::error::SkillError;
use crate::response::HandlerResponse;

/// Greets the user and starts a fresh conversation.
pub struct LaunchHandler {
    speech: String,
}

impl LaunchHandler {
    pub fn new(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
        }
    }
}

#[async_trait]
impl RequestHandler for LaunchHandler {
    fn name(&self) -> &'static str {
        "launch"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.envelope.is_request_type(LAUNCH_REQUEST)
    }

    async fn handle(&self, input: &mut HandlerInput<'_>) -> Result<HandlerResponse, SkillError> {
        input.attributes.reset_chat_history();
        info!(session = ?input.envelope.session_id(), "Session launched");

        Ok(HandlerResponse::builder()
            .speak(&self.speech)
            .ask(&self.speech)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{intent_request, launch_request, with_attributes};
    use serde_json::json;

    #[tokio::test]
    async fn resets_history_and_reprompts_with_greeting() {
        let envelope = with_attributes(
            launch_request(),
            json!({ "chat_history": [["old", "stale"]] }),
        );
        let handler = LaunchHandler::new("Hello there");
        let mut input = HandlerInput::new(&envelope);

        assert!(handler.can_handle(&input));
        let response = handler.handle(&mut input).await.unwrap();

        assert!(input.attributes.chat_history().unwrap().is_empty());
        assert_eq!(response.speech.as_deref(), Some("Hello there"));
        assert_eq!(response.speech, response.reprompt);
        assert!(response.keeps_session_open());
    }

    #[test]
    fn ignores_intents() {
        let envelope = intent_request("GptQueryIntent", &[("query", "hi")]);
        let input = HandlerInput::new(&envelope);
        assert!(!LaunchHandler::new("x").can_handle(&input));
    }
}
