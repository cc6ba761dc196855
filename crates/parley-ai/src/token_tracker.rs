//! Token usage tracking across inference calls.

use crate::TokenUsage;

/// Tracks cumulative token usage across calls.
#[derive(Debug, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    /// Number of successful inference calls.
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from a completed call.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.call_count += 1;
    }

    /// Get total token usage.
    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    /// Get total tokens (input + output).
    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    /// Get number of recorded calls.
    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}
