use async_trait::async_trait;
use tracing::info;

use crate::dispatch::{HandlerInput, RequestHandler};
use crate::error::SkillError;
use crate::response::HandlerResponse;

pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";

/// Says goodbye and closes the session.
pub struct CancelOrStopHandler {
    farewell: String,
}

impl CancelOrStopHandler {
    pub fn new(farewell: impl Into<String>) -> Self {
        Self {
            farewell: farewell.into(),
        }
    }
}

#[async_trait]
impl RequestHandler for CancelOrStopHandler {
    fn name(&self) -> &'static str {
        "cancel_or_stop"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.envelope.is_intent_name(CANCEL_INTENT) || input.envelope.is_intent_name(STOP_INTENT)
    }

    async fn handle(&self, input: &mut HandlerInput<'_>) -> Result<HandlerResponse, SkillError> {
        info!(session = ?input.envelope.session_id(), "Session stopped by user");
        Ok(HandlerResponse::builder()
            .speak(&self.farewell)
            .end_session()
            .build())
    }
}
