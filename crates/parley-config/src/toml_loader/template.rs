//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r#"# Parley Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# The Bedrock API key is read from AWS_BEARER_TOKEN_BEDROCK, never from here.

[server]
# host = "0.0.0.0"
# port = 8080
# path = "/"             # route the voice platform posts to

[skill]
# skill_id = "amzn1.ask.skill.00000000-0000-0000-0000-000000000000"
# query_intent = "GptQueryIntent"
# query_slot = "query"

[conversation]
# history_window = 10    # 0-50 exchanges sent as context

[inference]
# model = "anthropic.claude-3-5-sonnet-20240620-v1:0"
# region = "us-east-1"   # defaults to $AWS_REGION
# endpoint = "https://bedrock-runtime.us-east-1.amazonaws.com"
# system_prompt = "You are a helpful assistant. Answer in 50 words or less."
# max_tokens = 300       # 1-4096
# temperature = 0.5      # 0.0-1.0
# connect_timeout_secs = 10
# request_timeout_secs = 30

[speech]
# launch = "Claude 3.5 mode activated"
# reprompt = "Any other questions?"
# farewell = "Leaving Claude 3.5 mode"
# apology = "Sorry, I had trouble doing what you asked. Please try again."
# inference_apology = "I encountered an error while processing your request. Please try again."

[logging]
# level = "info"         # overridden by RUST_LOG
# format = "pretty"      # pretty, json
"#
}
