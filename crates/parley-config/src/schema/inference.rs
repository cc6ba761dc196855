//! Model inference settings.

use serde::{Deserialize, Serialize};

/// Fallback region when neither the config nor `AWS_REGION` names one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Bedrock model and sampling parameters.
///
/// The API key is deliberately absent: it is read from the environment by
/// the inference client so it never lands in a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub model: String,
    pub region: Option<String>,
    /// Full base URL override, e.g. a VPC endpoint or a local stub.
    pub endpoint: Option<String>,
    pub system_prompt: String,
    /// Valid range: 1-4096.
    pub max_tokens: u32,
    /// Valid range: 0.0-1.0.
    pub temperature: f64,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            model: "anthropic.claude-3-5-sonnet-20240620-v1:0".into(),
            region: None,
            endpoint: None,
            system_prompt: "You are a helpful assistant. Answer in 50 words or less.".into(),
            max_tokens: 300,
            temperature: 0.5,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

impl InferenceConfig {
    /// Region from config, then `AWS_REGION`, then [`DEFAULT_REGION`].
    pub fn resolved_region(&self) -> String {
        self.region
            .clone()
            .or_else(|| std::env::var("AWS_REGION").ok())
            .unwrap_or_else(|| DEFAULT_REGION.to_string())
    }
}
