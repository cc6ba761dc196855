use async_trait::async_trait;
use tracing::{info, warn};

use crate::dispatch::{HandlerInput, RequestHandler};
use crate::envelope::SESSION_ENDED_REQUEST;
use crate::error::SkillError;
use crate::response::HandlerResponse;

/// Acknowledges the platform closing a session. Any speech would be ignored,
/// so the response is empty.
pub struct SessionEndedHandler;

#[async_trait]
impl RequestHandler for SessionEndedHandler {
    fn name(&self) -> &'static str {
        "session_ended"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.envelope.is_request_type(SESSION_ENDED_REQUEST)
    }

    async fn handle(&self, input: &mut HandlerInput<'_>) -> Result<HandlerResponse, SkillError> {
        let request = &input.envelope.request;
        let reason = request.reason.as_deref().unwrap_or("UNKNOWN");
        let session = input.envelope.session_id();

        match &request.error {
            Some(error) => warn!(
                ?session,
                reason,
                error_type = %error.error_type,
                error_message = %error.message,
                "Session ended with error"
            ),
            None => info!(?session, reason, "Session ended"),
        }

        Ok(HandlerResponse::empty())
    }
}
