//! Skill identity and intent naming.

use serde::{Deserialize, Serialize};

/// Identity of the skill and the names of the intents it routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    /// When set, request envelopes from any other application id are rejected.
    pub skill_id: Option<String>,
    pub query_intent: String,
    pub query_slot: String,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            skill_id: None,
            query_intent: "GptQueryIntent".into(),
            query_slot: "query".into(),
        }
    }
}
