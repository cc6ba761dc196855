//! Wiring from a validated config to a ready `AppState`.

use std::sync::Arc;
use std::time::Duration;

use parley_ai::{AiClient, AiError, BedrockClient, BedrockConfig};
use parley_config::{InferenceConfig, ParleyConfig};
use parley_skill::{build_assistant, build_skill};
use tracing::info;

use crate::state::AppState;

/// Bedrock settings from the inference section plus the API key in the
/// environment.
pub fn bedrock_config(inference: &InferenceConfig) -> Result<BedrockConfig, AiError> {
    let mut bedrock = BedrockConfig::from_env(inference.resolved_region())?
        .with_model(&inference.model)
        .with_timeouts(
            Duration::from_secs(inference.connect_timeout_secs),
            Duration::from_secs(inference.request_timeout_secs),
        );
    if let Some(endpoint) = &inference.endpoint {
        bedrock = bedrock.with_endpoint(endpoint);
    }
    Ok(bedrock)
}

pub fn bedrock_client(inference: &InferenceConfig) -> Result<Arc<dyn AiClient>, AiError> {
    let config = bedrock_config(inference)?;
    info!(model = %config.model, region = %config.region, "Bedrock client configured");
    Ok(Arc::new(BedrockClient::new(config)?))
}

/// Assemble the assistant and skill around `client`.
pub fn build_state(config: &ParleyConfig, client: Arc<dyn AiClient>) -> AppState {
    let assistant = Arc::new(build_assistant(config, client));
    let skill = build_skill(config, assistant.clone());
    AppState::new(skill, assistant)
}
