//! Voice-platform request and response envelopes.
//!
//! Only the fields the skill reads or writes are modelled; unknown fields
//! are ignored on decode. Field names are camelCase on the wire.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const LAUNCH_REQUEST: &str = "LaunchRequest";
pub const INTENT_REQUEST: &str = "IntentRequest";
pub const SESSION_ENDED_REQUEST: &str = "SessionEndedRequest";

/// Envelope posted by the voice platform for every user interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    pub request: Request,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "System")]
    pub system: SystemState,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,
}

/// The request itself. `request_type` selects which optional fields apply:
/// `intent` for `IntentRequest`, `reason`/`error` for `SessionEndedRequest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type")]
    pub request_type: String,
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RequestError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Error the platform attaches to a `SessionEndedRequest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestError {
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(default)]
    pub message: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl RequestEnvelope {
    pub fn is_request_type(&self, request_type: &str) -> bool {
        self.request.request_type == request_type
    }

    /// Name of the intent, for `IntentRequest`s only.
    pub fn intent_name(&self) -> Option<&str> {
        if !self.is_request_type(INTENT_REQUEST) {
            return None;
        }
        self.request.intent.as_ref().map(|i| i.name.as_str())
    }

    pub fn is_intent_name(&self, name: &str) -> bool {
        self.intent_name() == Some(name)
    }

    /// Slot on the current intent, if both exist.
    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.request.intent.as_ref()?.slots.get(name)
    }

    /// Value of a filled slot. `None` if the slot is absent or unfilled.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slot(name)?.value.as_deref()
    }

    /// Application id from the session, falling back to the context.
    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.application.as_ref())
            .or_else(|| {
                self.context
                    .as_ref()
                    .and_then(|c| c.system.application.as_ref())
            })
            .map(|a| a.application_id.as_str())
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.session_id.as_str())
    }

    /// Attributes carried over from the previous turn.
    pub fn session_attributes(&self) -> Map<String, Value> {
        self.session
            .as_ref()
            .and_then(|s| s.attributes.clone())
            .unwrap_or_default()
    }

    /// Short label for logs: the request type, plus the intent name if any.
    pub fn describe(&self) -> String {
        match self.intent_name() {
            Some(intent) => format!("{}({intent})", self.request.request_type),
            None => self.request.request_type.clone(),
        }
    }
}

/// Envelope returned to the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub session_attributes: Map<String, Value>,
    pub response: ResponseBody,
}

impl ResponseEnvelope {
    pub fn new(session_attributes: Map<String, Value>, response: ResponseBody) -> Self {
        Self {
            version: default_version(),
            session_attributes,
            response,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

/// Speech rendered by the platform's text-to-speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
}

impl OutputSpeech {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::PlainText { text } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTENT_JSON: &str = r#"{
        "version": "1.0",
        "session": {
            "new": false,
            "sessionId": "amzn1.echo-api.session.abc",
            "application": { "applicationId": "amzn1.ask.skill.123" },
            "attributes": { "chat_history": [["hi", "hello"]] },
            "user": { "userId": "amzn1.ask.account.xyz" }
        },
        "context": {
            "System": {
                "application": { "applicationId": "amzn1.ask.skill.123" },
                "apiEndpoint": "https://api.amazonalexa.com",
                "device": { "deviceId": "ignored" }
            }
        },
        "request": {
            "type": "IntentRequest",
            "requestId": "amzn1.echo-api.request.1",
            "timestamp": "2024-06-20T17:32:05Z",
            "locale": "en-US",
            "intent": {
                "name": "GptQueryIntent",
                "confirmationStatus": "NONE",
                "slots": {
                    "query": { "name": "query", "value": "What is the capital of France?" }
                }
            },
            "dialogState": "COMPLETED"
        }
    }"#;

    #[test]
    fn decodes_intent_request() {
        let envelope: RequestEnvelope = serde_json::from_str(INTENT_JSON).unwrap();
        assert!(envelope.is_request_type(INTENT_REQUEST));
        assert!(envelope.is_intent_name("GptQueryIntent"));
        assert_eq!(
            envelope.slot_value("query"),
            Some("What is the capital of France?")
        );
        assert_eq!(envelope.application_id(), Some("amzn1.ask.skill.123"));
        assert_eq!(envelope.session_id(), Some("amzn1.echo-api.session.abc"));
        assert_eq!(envelope.describe(), "IntentRequest(GptQueryIntent)");
        assert!(envelope.request.timestamp.is_some());
        assert!(envelope.session_attributes().contains_key("chat_history"));
    }

    #[test]
    fn decodes_minimal_launch_request() {
        let envelope: RequestEnvelope = serde_json::from_str(
            r#"{ "request": { "type": "LaunchRequest", "requestId": "r-1" } }"#,
        )
        .unwrap();
        assert_eq!(envelope.version, "1.0");
        assert!(envelope.is_request_type(LAUNCH_REQUEST));
        assert_eq!(envelope.intent_name(), None);
        assert_eq!(envelope.application_id(), None);
        assert!(envelope.session_attributes().is_empty());
        assert_eq!(envelope.describe(), "LaunchRequest");
    }

    #[test]
    fn application_id_falls_back_to_context() {
        let envelope: RequestEnvelope = serde_json::from_str(
            r#"{
                "context": { "System": { "application": { "applicationId": "from-context" } } },
                "request": { "type": "LaunchRequest", "requestId": "r-1" }
            }"#,
        )
        .unwrap();
        assert_eq!(envelope.application_id(), Some("from-context"));
    }

    #[test]
    fn decodes_session_ended_with_error() {
        let envelope: RequestEnvelope = serde_json::from_str(
            r#"{ "request": {
                "type": "SessionEndedRequest",
                "requestId": "r-2",
                "reason": "ERROR",
                "error": { "type": "INVALID_RESPONSE", "message": "bad speech" }
            } }"#,
        )
        .unwrap();
        assert!(envelope.is_request_type(SESSION_ENDED_REQUEST));
        assert_eq!(envelope.request.reason.as_deref(), Some("ERROR"));
        assert_eq!(
            envelope.request.error.as_ref().map(|e| e.error_type.as_str()),
            Some("INVALID_RESPONSE")
        );
    }

    #[test]
    fn slot_without_value_decodes_as_none() {
        let envelope: RequestEnvelope = serde_json::from_str(
            r#"{ "request": {
                "type": "IntentRequest",
                "requestId": "r-3",
                "intent": { "name": "GptQueryIntent", "slots": { "query": { "name": "query" } } }
            } }"#,
        )
        .unwrap();
        assert!(envelope.slot("query").is_some());
        assert_eq!(envelope.slot_value("query"), None);
    }

    #[test]
    fn unknown_request_type_still_decodes() {
        let envelope: RequestEnvelope = serde_json::from_str(
            r#"{ "request": { "type": "CanFulfillIntentRequest", "requestId": "r-5" } }"#,
        )
        .unwrap();
        assert_eq!(envelope.describe(), "CanFulfillIntentRequest");
    }

    #[test]
    fn intent_name_ignored_for_other_request_types() {
        let envelope: RequestEnvelope = serde_json::from_str(
            r#"{ "request": {
                "type": "LaunchRequest",
                "requestId": "r-4",
                "intent": { "name": "AMAZON.StopIntent" }
            } }"#,
        )
        .unwrap();
        assert!(!envelope.is_intent_name("AMAZON.StopIntent"));
    }

    #[test]
    fn response_wire_format() {
        let body = ResponseBody {
            output_speech: Some(OutputSpeech::plain("Paris.")),
            reprompt: Some(Reprompt {
                output_speech: OutputSpeech::plain("Any other questions?"),
            }),
            should_end_session: Some(false),
        };
        let json = serde_json::to_value(ResponseEnvelope::new(Map::new(), body)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "version": "1.0",
                "response": {
                    "outputSpeech": { "type": "PlainText", "text": "Paris." },
                    "reprompt": {
                        "outputSpeech": { "type": "PlainText", "text": "Any other questions?" }
                    },
                    "shouldEndSession": false
                }
            })
        );
    }

    #[test]
    fn empty_response_body_serializes_to_empty_object() {
        let json = serde_json::to_value(ResponseBody::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
