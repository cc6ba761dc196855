//! Bedrock client configuration.

use std::fmt;
use std::time::Duration;

use crate::AiError;

/// Environment variable holding the Bedrock API key.
pub const API_KEY_ENV_VAR: &str = "AWS_BEARER_TOKEN_BEDROCK";

/// Bedrock client configuration.
#[derive(Clone)]
pub struct BedrockConfig {
    pub api_key: String,
    pub region: String,
    pub model: String,
    /// Replaces `https://bedrock-runtime.{region}.amazonaws.com` when set.
    pub endpoint: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl fmt::Debug for BedrockConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BedrockConfig")
            .field("api_key", &"[REDACTED]")
            .field("region", &self.region)
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl BedrockConfig {
    pub fn new(api_key: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            region: region.into(),
            model: "anthropic.claude-3-5-sonnet-20240620-v1:0".to_string(),
            endpoint: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Create config with the API key taken from `AWS_BEARER_TOKEN_BEDROCK`.
    pub fn from_env(region: impl Into<String>) -> Result<Self, AiError> {
        match std::env::var(API_KEY_ENV_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key, region)),
            _ => Err(AiError::NotConfigured(format!(
                "Bedrock API key missing. Set {API_KEY_ENV_VAR}."
            ))),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }

    /// Base URL of the runtime endpoint, without a trailing slash.
    pub fn base_url(&self) -> String {
        match self.endpoint {
            Some(ref endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://bedrock-runtime.{}.amazonaws.com", self.region),
        }
    }
}
