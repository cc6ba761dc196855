//! Voice skill request handling for Parley.
//!
//! Decodes platform envelopes, routes them through an ordered list of
//! handlers and renders the spoken reply together with the updated session
//! attributes.

pub mod attributes;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod response;
#[cfg(any(test, feature = "testing"))]
pub mod testing;


use std::sync::Arc;

use parley_ai::{AiClient, Assistant, HistoryWindow, InferenceOptions};
use parley_config::ParleyConfig;

pub use attributes::{SessionAttributes, CHAT_HISTORY_KEY};
pub use dispatch::{ExceptionHandler, HandlerInput, RequestHandler, Skill, SkillBuilder};
pub use envelope::{RequestEnvelope, ResponseEnvelope};
pub use error::SkillError;
pub use handlers::{
    CancelOrStopHandler, CatchAllExceptionHandler, LaunchHandler, QueryHandler,
    SessionEndedHandler,
};
pub use response::{HandlerResponse, ResponseBuilder};

/// Build the assistant from the inference, conversation and speech sections.
pub fn build_assistant(config: &ParleyConfig, client: Arc<dyn AiClient>) -> Assistant {
    let options = InferenceOptions {
        system_prompt: Some(config.inference.system_prompt.clone()),
        max_tokens: config.inference.max_tokens,
        temperature: config.inference.temperature,
    };
    Assistant::new(client, options)
        .with_history_window(HistoryWindow::new(config.conversation.history_window))
        .with_apology(config.speech.inference_apology.clone())
}

/// Register the skill's handlers in dispatch order.
pub fn build_skill(config: &ParleyConfig, assistant: Arc<Assistant>) -> Skill {
    let speech = &config.speech;
    Skill::builder()
        .with_skill_id(config.skill.skill_id.clone())
        .add_request_handler(LaunchHandler::new(&speech.launch))
        .add_request_handler(QueryHandler::new(
            &config.skill.query_intent,
            &config.skill.query_slot,
            &speech.reprompt,
            assistant,
        ))
        .add_request_handler(CancelOrStopHandler::new(&speech.farewell))
        .add_request_handler(SessionEndedHandler)
        .add_exception_handler(CatchAllExceptionHandler::new(&speech.apology))
        .build()
}
