//! State shared by every route handler.

use std::sync::Arc;

use parley_ai::Assistant;
use parley_skill::Skill;

#[derive(Clone)]
pub struct AppState {
    pub skill: Arc<Skill>,
    /// Same assistant the query handler uses; read for usage counters.
    pub assistant: Arc<Assistant>,
}

impl AppState {
    pub fn new(skill: Skill, assistant: Arc<Assistant>) -> Self {
        Self {
            skill: Arc::new(skill),
            assistant,
        }
    }
}
