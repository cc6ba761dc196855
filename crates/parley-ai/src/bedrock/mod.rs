//! Amazon Bedrock Converse API client.
//!
//! Implements the `AiClient` trait via the Bedrock runtime Converse
//! endpoint (`/model/{modelId}/converse`), authenticating with a Bedrock
//! API key sent as a Bearer token (`AWS_BEARER_TOKEN_BEDROCK`).

mod api;
mod client;
mod config;

pub use client::BedrockClient;
pub use config::{BedrockConfig, API_KEY_ENV_VAR};
