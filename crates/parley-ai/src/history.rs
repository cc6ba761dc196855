//! Conversation history and context windowing.
//!
//! The session stores every (question, answer) exchange in order. Only the
//! most recent `size` exchanges are sent to the model; older ones stay in
//! storage but are left out of the outbound context.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Message;

/// Exchanges included in model context unless configured otherwise.
pub const DEFAULT_HISTORY_WINDOW: usize = 10;

/// One completed question/answer pair.
///
/// Stored in session attributes as a two-element array `[question, answer]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct ChatExchange {
    pub question: String,
    pub answer: String,
}

impl ChatExchange {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl From<(String, String)> for ChatExchange {
    fn from((question, answer): (String, String)) -> Self {
        Self { question, answer }
    }
}

impl From<ChatExchange> for (String, String) {
    fn from(exchange: ChatExchange) -> Self {
        (exchange.question, exchange.answer)
    }
}

/// Bounded view over the most recent exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow {
    size: usize,
}

impl HistoryWindow {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The trailing `size` exchanges, in stored order.
    pub fn recent<'a>(&self, history: &'a [ChatExchange]) -> &'a [ChatExchange] {
        let start = history.len().saturating_sub(self.size);
        &history[start..]
    }

    /// Build the outbound message list: windowed history expanded to
    /// user/assistant turns, oldest first, then the new question.
    pub fn build_messages(&self, history: &[ChatExchange], question: &str) -> Vec<Message> {
        let recent = self.recent(history);
        debug!(
            stored = history.len(),
            included = recent.len(),
            "Building message list from history"
        );

        let mut messages = Vec::with_capacity(recent.len() * 2 + 1);
        for exchange in recent {
            messages.push(Message::user(exchange.question.clone()));
            messages.push(Message::assistant(exchange.answer.clone()));
        }
        messages.push(Message::user(question));
        messages
    }
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_WINDOW)
    }
}
