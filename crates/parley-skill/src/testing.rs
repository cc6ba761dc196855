//! Request envelope fixtures for tests.

use serde_json::{json, Map, Value};

use crate::envelope::RequestEnvelope;

pub const TEST_SKILL_ID: &str = "amzn1.ask.skill.test";
pub const TEST_SESSION_ID: &str = "amzn1.echo-api.session.test";

fn envelope(request: Value, attributes: Map<String, Value>) -> RequestEnvelope {
    let raw = json!({
        "version": "1.0",
        "session": {
            "new": attributes.is_empty(),
            "sessionId": TEST_SESSION_ID,
            "application": { "applicationId": TEST_SKILL_ID },
            "attributes": attributes,
            "user": { "userId": "amzn1.ask.account.test" }
        },
        "request": request
    });
    serde_json::from_value(raw).expect("fixture envelope is valid")
}

pub fn launch_request() -> RequestEnvelope {
    envelope(
        json!({ "type": "LaunchRequest", "requestId": "req-launch", "locale": "en-US" }),
        Map::new(),
    )
}

/// `IntentRequest` for `name` with the given slot values.
pub fn intent_request(name: &str, slots: &[(&str, &str)]) -> RequestEnvelope {
    let slots: Map<String, Value> = slots
        .iter()
        .map(|(slot, value)| {
            (
                slot.to_string(),
                json!({ "name": slot, "value": value }),
            )
        })
        .collect();
    envelope(
        json!({
            "type": "IntentRequest",
            "requestId": "req-intent",
            "locale": "en-US",
            "intent": { "name": name, "slots": slots }
        }),
        Map::new(),
    )
}

pub fn session_ended_request(reason: &str) -> RequestEnvelope {
    envelope(
        json!({ "type": "SessionEndedRequest", "requestId": "req-ended", "reason": reason }),
        Map::new(),
    )
}

/// Replace the session attributes carried by `envelope`.
pub fn with_attributes(mut envelope: RequestEnvelope, attributes: Value) -> RequestEnvelope {
    if let (Some(session), Value::Object(map)) = (envelope.session.as_mut(), attributes) {
        session.new = false;
        session.attributes = Some(map);
    }
    envelope
}
