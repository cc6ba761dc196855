//! Configuration schema types for Parley.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the skill ships with.

mod conversation;
mod inference;
mod logging;
mod server;
mod skill;
mod speech;

pub use conversation::*;
pub use inference::*;
pub use logging::*;
pub use server::*;
pub use skill::*;
pub use speech::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Parley.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParleyConfig {
    pub server: ServerConfig,
    pub skill: SkillConfig,
    pub conversation: ConversationConfig,
    pub inference: InferenceConfig,
    pub speech: SpeechConfig,
    pub logging: LoggingConfig,
}
