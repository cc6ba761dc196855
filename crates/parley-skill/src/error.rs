use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("No handler found for {0}")]
    NoHandlerFound(String),
    #[error("Missing slot: {0}")]
    MissingSlot(String),
    #[error("Invalid session attribute '{key}': {reason}")]
    InvalidAttribute { key: String, reason: String },
    #[error("Skill id mismatch: expected {expected}, got {}", .actual.as_deref().unwrap_or("none"))]
    SkillIdMismatch {
        expected: String,
        actual: Option<String>,
    },
}
