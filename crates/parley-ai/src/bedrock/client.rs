//! Bedrock client struct, request building, and response parsing.

use crate::{AiError, AiResponse, InferenceOptions, Message, Role, TokenUsage};

use super::config::BedrockConfig;

/// Bedrock Converse API client.
pub struct BedrockClient {
    pub(crate) config: BedrockConfig,
    pub(crate) http: reqwest::Client,
}

impl BedrockClient {
    pub fn new(config: BedrockConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::NotConfigured(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    /// Full Converse URL for the configured model.
    ///
    /// The model id is pushed as a single path segment, so ARNs containing
    /// `/` are percent-encoded instead of splitting the path.
    pub(crate) fn converse_url(&self) -> Result<reqwest::Url, AiError> {
        let base = self.config.base_url();
        let mut url = reqwest::Url::parse(&base)
            .map_err(|e| AiError::NotConfigured(format!("invalid Bedrock endpoint {base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| AiError::NotConfigured(format!("Bedrock endpoint {base} cannot carry a path")))?
            .pop_if_empty()
            .extend(["model", self.config.model.as_str(), "converse"]);
        Ok(url)
    }

    /// Build the JSON request body for the Converse API.
    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        options: &InferenceOptions,
    ) -> serde_json::Value {
        let msgs: Vec<_> = messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                };
                serde_json::json!({
                    "role": role,
                    "content": [{ "text": msg.content }],
                })
            })
            .collect();

        let mut body = serde_json::json!({
            "messages": msgs,
            "inferenceConfig": {
                "maxTokens": options.max_tokens,
                "temperature": options.temperature,
            },
        });

        if let Some(ref system) = options.system_prompt {
            body["system"] = serde_json::json!([{ "text": system }]);
        }

        body
    }

    /// Parse a Converse response. The reply text lives at
    /// `output.message.content[0].text`; anything else is a parse error.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let content = json["output"]["message"]["content"]
            .as_array()
            .ok_or_else(|| AiError::ParseError("no output.message.content in response".into()))?;

        let text = content
            .first()
            .and_then(|block| block["text"].as_str())
            .ok_or_else(|| AiError::ParseError("first content block has no text".into()))?;

        let usage = TokenUsage {
            input_tokens: json["usage"]["inputTokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["outputTokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse {
            content: text.to_string(),
            stop_reason: json["stopReason"].as_str().map(String::from),
            usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BedrockClient {
        BedrockClient::new(BedrockConfig::new("test-key", "us-east-1")).unwrap()
    }

    #[test]
    fn converse_url_embeds_model() {
        let url = client().converse_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://bedrock-runtime.us-east-1.amazonaws.com/model/anthropic.claude-3-5-sonnet-20240620-v1:0/converse"
        );
    }

    #[test]
    fn converse_url_keeps_arn_model_in_one_segment() {
        let model = "arn:aws:bedrock:us-east-1:123456789012:inference-profile/us.anthropic.claude-3-5-sonnet-20240620-v1:0";
        let client = BedrockClient::new(
            BedrockConfig::new("test-key", "us-east-1").with_model(model),
        )
        .unwrap();

        let url = client.converse_url().unwrap();
        let segments: Vec<_> = url.path_segments().unwrap().collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], "model");
        assert_eq!(
            segments[1],
            "arn:aws:bedrock:us-east-1:123456789012:inference-profile%2Fus.anthropic.claude-3-5-sonnet-20240620-v1:0"
        );
        assert_eq!(segments[2], "converse");
    }

    #[test]
    fn converse_url_appends_to_endpoint_path() {
        let client = BedrockClient::new(
            BedrockConfig::new("test-key", "us-east-1").with_endpoint("http://127.0.0.1:9999/bedrock/"),
        )
        .unwrap();
        let url = client.converse_url().unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:9999/bedrock/model/anthropic.claude-3-5-sonnet-20240620-v1:0/converse"
        );
    }

    #[test]
    fn request_body_shape() {
        let messages = vec![
            Message::user("What is the capital of France?"),
            Message::assistant("Paris."),
            Message::user("And of Spain?"),
        ];
        let body = client().build_request_body(&messages, &InferenceOptions::default());

        let msgs = body["messages"].as_array().unwrap();
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[0]["role"], "user");
        assert_eq!(msgs[0]["content"][0]["text"], "What is the capital of France?");
        assert_eq!(msgs[1]["role"], "assistant");
        assert_eq!(msgs[2]["content"][0]["text"], "And of Spain?");

        assert_eq!(body["inferenceConfig"]["maxTokens"], 300);
        assert_eq!(body["inferenceConfig"]["temperature"], 0.5);
        assert_eq!(
            body["system"][0]["text"],
            "You are a helpful assistant. Answer in 50 words or less."
        );
    }

    #[test]
    fn request_body_omits_system_when_unset() {
        let options = InferenceOptions {
            system_prompt: None,
            ..InferenceOptions::default()
        };
        let body = client().build_request_body(&[Message::user("hi")], &options);
        assert!(body.get("system").is_none());
    }

    #[test]
    fn parse_extracts_first_text_block_and_usage() {
        let json = serde_json::json!({
            "output": {
                "message": {
                    "role": "assistant",
                    "content": [{ "text": "Paris is the capital of France." }]
                }
            },
            "stopReason": "end_turn",
            "usage": { "inputTokens": 21, "outputTokens": 9, "totalTokens": 30 }
        });

        let response = client().parse_response(json).unwrap();
        assert_eq!(response.content, "Paris is the capital of France.");
        assert_eq!(response.stop_reason.as_deref(), Some("end_turn"));
        assert_eq!(response.usage.input_tokens, 21);
        assert_eq!(response.usage.output_tokens, 9);
    }

    #[test]
    fn parse_missing_output_is_error() {
        let json = serde_json::json!({ "message": "ValidationException" });
        let err = client().parse_response(json).unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }

    #[test]
    fn parse_empty_content_is_error() {
        let json = serde_json::json!({
            "output": { "message": { "role": "assistant", "content": [] } }
        });
        assert!(client().parse_response(json).is_err());
    }

    #[test]
    fn parse_non_text_block_is_error() {
        let json = serde_json::json!({
            "output": { "message": { "content": [{ "toolUse": { "name": "x" } }] } }
        });
        assert!(matches!(
            client().parse_response(json),
            Err(AiError::ParseError(_))
        ));
    }
}
