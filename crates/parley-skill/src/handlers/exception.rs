use tracing::error;

use crate::dispatch::{ExceptionHandler, HandlerInput};
use crate::error::SkillError;
use crate::response::HandlerResponse;

/// Accepts every error, logs it and apologises while keeping the session open.
pub struct CatchAllExceptionHandler {
    apology: String,
}

impl CatchAllExceptionHandler {
    pub fn new(apology: impl Into<String>) -> Self {
        Self {
            apology: apology.into(),
        }
    }
}

impl ExceptionHandler for CatchAllExceptionHandler {
    fn can_handle(&self, _input: &HandlerInput<'_>, _error: &SkillError) -> bool {
        true
    }

    fn handle(&self, input: &mut HandlerInput<'_>, err: &SkillError) -> HandlerResponse {
        error!(
            error = %err,
            detail = ?err,
            request = %input.envelope.describe(),
            request_id = %input.envelope.request.request_id,
            session = ?input.envelope.session_id(),
            "Request handling failed"
        );

        HandlerResponse::builder()
            .speak(&self.apology)
            .ask(&self.apology)
            .build()
    }
}
