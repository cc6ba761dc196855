//! Fixed utterances spoken by the skill.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Greeting on launch; also used as the launch re-prompt.
    pub launch: String,
    /// Re-prompt after an answered query.
    pub reprompt: String,
    /// Spoken on stop/cancel before the session closes.
    pub farewell: String,
    /// Spoken by the catch-all exception handler.
    pub apology: String,
    /// Stands in for the answer when the model call fails.
    pub inference_apology: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            launch: "Claude 3.5 mode activated".into(),
            reprompt: "Any other questions?".into(),
            farewell: "Leaving Claude 3.5 mode".into(),
            apology: "Sorry, I had trouble doing what you asked. Please try again.".into(),
            inference_apology:
                "I encountered an error while processing your request. Please try again.".into(),
        }
    }
}
