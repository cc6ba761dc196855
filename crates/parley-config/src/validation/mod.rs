//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator runs them all and
//! collects errors into a single `ConfigError`.

mod helpers;


use crate::schema::ParleyConfig;
use helpers::{validate_non_empty, validate_range, validate_range_f64};
use parley_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ParleyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_server(&mut errors, config);
    validate_skill(&mut errors, config);
    validate_conversation(&mut errors, config);
    validate_inference(&mut errors, config);
    validate_speech(&mut errors, config);
    validate_non_empty(&mut errors, "logging.level", &config.logging.level);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_server(errors: &mut Vec<String>, config: &ParleyConfig) {
    let server = &config.server;
    if server.port == 0 {
        errors.push("server.port must not be 0".into());
    }
    validate_non_empty(errors, "server.host", &server.host);
    if !server.path.starts_with('/') {
        errors.push(format!("server.path = {:?} must start with '/'", server.path));
    }
    if server.path == "/health" {
        errors.push("server.path must not be /health (reserved for the health check)".into());
    }
    if server.path.contains(['{', '}', '*'])
        || server.path.split('/').any(|segment| segment.starts_with(':'))
    {
        errors.push(format!(
            "server.path = {:?} must be a literal path without wildcards",
            server.path
        ));
    }
}

fn validate_skill(errors: &mut Vec<String>, config: &ParleyConfig) {
    let skill = &config.skill;
    if let Some(ref id) = skill.skill_id {
        validate_non_empty(errors, "skill.skill_id", id);
    }
    validate_non_empty(errors, "skill.query_intent", &skill.query_intent);
    validate_non_empty(errors, "skill.query_slot", &skill.query_slot);
}

fn validate_conversation(errors: &mut Vec<String>, config: &ParleyConfig) {
    let window = u32::try_from(config.conversation.history_window).unwrap_or(u32::MAX);
    validate_range(errors, "conversation.history_window", window, 0, 50);
}

fn validate_inference(errors: &mut Vec<String>, config: &ParleyConfig) {
    let inference = &config.inference;
    validate_non_empty(errors, "inference.model", &inference.model);
    validate_range(errors, "inference.max_tokens", inference.max_tokens, 1, 4096);
    validate_range_f64(
        errors,
        "inference.temperature",
        inference.temperature,
        0.0,
        1.0,
    );
    if inference.connect_timeout_secs == 0 {
        errors.push("inference.connect_timeout_secs must be at least 1".into());
    }
    if inference.request_timeout_secs == 0 {
        errors.push("inference.request_timeout_secs must be at least 1".into());
    }
    if let Some(ref endpoint) = inference.endpoint {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            errors.push(format!(
                "inference.endpoint = {endpoint:?} must be an http(s) URL"
            ));
        }
    }
}

fn validate_speech(errors: &mut Vec<String>, config: &ParleyConfig) {
    let speech = &config.speech;
    validate_non_empty(errors, "speech.launch", &speech.launch);
    validate_non_empty(errors, "speech.reprompt", &speech.reprompt);
    validate_non_empty(errors, "speech.farewell", &speech.farewell);
    validate_non_empty(errors, "speech.apology", &speech.apology);
    validate_non_empty(errors, "speech.inference_apology", &speech.inference_apology);
}
