//! Ordered first-match request dispatch.
//!
//! Request handlers are tried in registration order and exactly one runs.
//! Any error (including "nothing matched") is offered to the exception
//! handlers in the same way. Session attributes as they stand after the
//! winning handler runs are echoed in the response envelope.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::attributes::SessionAttributes;
use crate::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::error::SkillError;
use crate::response::HandlerResponse;

/// Per-request state handed to handlers.
#[derive(Debug)]
pub struct HandlerInput<'a> {
    pub envelope: &'a RequestEnvelope,
    pub attributes: SessionAttributes,
}

impl<'a> HandlerInput<'a> {
    pub fn new(envelope: &'a RequestEnvelope) -> Self {
        Self {
            envelope,
            attributes: SessionAttributes::from_map(envelope.session_attributes()),
        }
    }
}

#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool;

    async fn handle(&self, input: &mut HandlerInput<'_>) -> Result<HandlerResponse, SkillError>;
}

pub trait ExceptionHandler: Send + Sync {
    fn can_handle(&self, input: &HandlerInput<'_>, error: &SkillError) -> bool;

    fn handle(&self, input: &mut HandlerInput<'_>, error: &SkillError) -> HandlerResponse;
}

pub struct Skill {
    skill_id: Option<String>,
    request_handlers: Vec<Box<dyn RequestHandler>>,
    exception_handlers: Vec<Box<dyn ExceptionHandler>>,
}

impl Skill {
    pub fn builder() -> SkillBuilder {
        SkillBuilder::default()
    }

    pub fn skill_id(&self) -> Option<&str> {
        self.skill_id.as_deref()
    }

    /// Reject envelopes addressed to a different skill. Always passes when no
    /// skill id is configured.
    pub fn verify_skill_id(&self, envelope: &RequestEnvelope) -> Result<(), SkillError> {
        let Some(expected) = self.skill_id.as_deref() else {
            return Ok(());
        };
        let actual = envelope.application_id();
        if actual == Some(expected) {
            return Ok(());
        }
        Err(SkillError::SkillIdMismatch {
            expected: expected.to_string(),
            actual: actual.map(str::to_string),
        })
    }

    /// Handle one envelope end to end.
    ///
    /// Fails only on a skill-id mismatch or when no exception handler
    /// accepts a handler error.
    pub async fn invoke(&self, envelope: &RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        self.verify_skill_id(envelope)?;

        let mut input = HandlerInput::new(envelope);
        let response = match self.dispatch(&mut input).await {
            Ok(response) => response,
            Err(err) => self.handle_error(&mut input, err)?,
        };

        Ok(ResponseEnvelope::new(
            input.attributes.into_map(),
            response.into_body(),
        ))
    }

    async fn dispatch(&self, input: &mut HandlerInput<'_>) -> Result<HandlerResponse, SkillError> {
        let handler = self
            .request_handlers
            .iter()
            .find(|h| h.can_handle(input))
            .ok_or_else(|| SkillError::NoHandlerFound(input.envelope.describe()))?;

        debug!(
            handler = handler.name(),
            request = %input.envelope.describe(),
            "Dispatching request"
        );
        handler.handle(input).await
    }

    fn handle_error(
        &self,
        input: &mut HandlerInput<'_>,
        err: SkillError,
    ) -> Result<HandlerResponse, SkillError> {
        match self
            .exception_handlers
            .iter()
            .find(|h| h.can_handle(input, &err))
        {
            Some(handler) => Ok(handler.handle(input, &err)),
            None => {
                warn!(error = %err, "No exception handler accepted error");
                Err(err)
            }
        }
    }
}

#[derive(Default)]
pub struct SkillBuilder {
    skill_id: Option<String>,
    request_handlers: Vec<Box<dyn RequestHandler>>,
    exception_handlers: Vec<Box<dyn ExceptionHandler>>,
}

impl SkillBuilder {
    pub fn with_skill_id(mut self, skill_id: Option<String>) -> Self {
        self.skill_id = skill_id;
        self
    }

    pub fn add_request_handler(mut self, handler: impl RequestHandler + 'static) -> Self {
        self.request_handlers.push(Box::new(handler));
        self
    }

    pub fn add_exception_handler(mut self, handler: impl ExceptionHandler + 'static) -> Self {
        self.exception_handlers.push(Box::new(handler));
        self
    }

    pub fn build(self) -> Skill {
        Skill {
            skill_id: self.skill_id,
            request_handlers: self.request_handlers,
            exception_handlers: self.exception_handlers,
        }
    }
}
