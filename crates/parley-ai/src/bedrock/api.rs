//! AiClient trait implementation for BedrockClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, InferenceOptions, Message};

use super::client::BedrockClient;

#[async_trait]
impl AiClient for BedrockClient {
    async fn send_message(
        &self,
        messages: &[Message],
        options: &InferenceOptions,
    ) -> Result<AiResponse, AiError> {
        let url = self.converse_url()?;
        let body = self.build_request_body(messages, options);

        debug!(
            model = %self.config.model,
            messages = messages.len(),
            "Bedrock Converse request"
        );

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.config.api_key)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
