//! Conversation history settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationConfig {
    /// Number of most recent exchanges sent to the model as context (valid range: 0-50).
    pub history_window: usize,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self { history_window: 10 }
    }
}
