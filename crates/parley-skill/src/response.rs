//! What a handler says back, before it is wrapped in a `ResponseEnvelope`.

use crate::envelope::{OutputSpeech, Reprompt, ResponseBody};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerResponse {
    pub speech: Option<String>,
    pub reprompt: Option<String>,
    pub should_end_session: Option<bool>,
}

impl HandlerResponse {
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    /// No speech and no session directive.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the device should keep listening for a follow-up.
    pub fn keeps_session_open(&self) -> bool {
        self.should_end_session == Some(false)
    }

    pub fn into_body(self) -> ResponseBody {
        ResponseBody {
            output_speech: self.speech.map(OutputSpeech::plain),
            reprompt: self.reprompt.map(|text| Reprompt {
                output_speech: OutputSpeech::plain(text),
            }),
            should_end_session: self.should_end_session,
        }
    }
}

#[derive(Debug, Default)]
pub struct ResponseBuilder {
    response: HandlerResponse,
}

impl ResponseBuilder {
    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.response.speech = Some(text.into());
        self
    }

    /// Set a re-prompt and keep the session open.
    pub fn ask(mut self, reprompt: impl Into<String>) -> Self {
        self.response.reprompt = Some(reprompt.into());
        self.response.should_end_session = Some(false);
        self
    }

    /// Close the session after speaking; drops any re-prompt.
    pub fn end_session(mut self) -> Self {
        self.response.reprompt = None;
        self.response.should_end_session = Some(true);
        self
    }

    pub fn build(self) -> HandlerResponse {
        self.response
    }
}
