//! Session attributes carried between turns inside the envelope.

use parley_ai::ChatExchange;
use serde_json::{Map, Value};

use crate::error::SkillError;

/// Attribute key holding the list of `[question, answer]` pairs.
pub const CHAT_HISTORY_KEY: &str = "chat_history";

/// Mutable view of the session attributes for one request.
///
/// Keys other than `chat_history` are preserved untouched so they are echoed
/// back to the platform unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionAttributes {
    map: Map<String, Value>,
}

impl SessionAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self { map }
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.map
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.map.insert(key.into(), value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Stored history, or an empty list when the key is absent.
    pub fn chat_history(&self) -> Result<Vec<ChatExchange>, SkillError> {
        match self.map.get(CHAT_HISTORY_KEY) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                SkillError::InvalidAttribute {
                    key: CHAT_HISTORY_KEY.to_string(),
                    reason: e.to_string(),
                }
            }),
        }
    }

    /// Like `chat_history`, but stores an empty list first if none exists.
    pub fn chat_history_or_init(&mut self) -> Result<Vec<ChatExchange>, SkillError> {
        if !self.contains(CHAT_HISTORY_KEY) {
            self.reset_chat_history();
        }
        self.chat_history()
    }

    pub fn set_chat_history(&mut self, history: &[ChatExchange]) {
        let pairs = history
            .iter()
            .map(|exchange| {
                Value::Array(vec![
                    Value::String(exchange.question.clone()),
                    Value::String(exchange.answer.clone()),
                ])
            })
            .collect();
        self.map
            .insert(CHAT_HISTORY_KEY.to_string(), Value::Array(pairs));
    }

    pub fn reset_chat_history(&mut self) {
        self.map
            .insert(CHAT_HISTORY_KEY.to_string(), Value::Array(Vec::new()));
    }

    /// Append one exchange to the full stored history.
    pub fn push_exchange(&mut self, exchange: ChatExchange) -> Result<(), SkillError> {
        let mut history = self.chat_history()?;
        history.push(exchange);
        self.set_chat_history(&history);
        Ok(())
    }
}

impl From<Map<String, Value>> for SessionAttributes {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> SessionAttributes {
        match value {
            Value::Object(map) => SessionAttributes::from_map(map),
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn absent_history_is_empty() {
        let attributes = SessionAttributes::new();
        assert!(attributes.chat_history().unwrap().is_empty());
        assert!(!attributes.contains(CHAT_HISTORY_KEY));
    }

    #[test]
    fn null_history_is_empty() {
        let attributes = attrs(json!({ "chat_history": null }));
        assert!(attributes.chat_history().unwrap().is_empty());
    }

    #[test]
    fn lazy_init_stores_empty_list() {
        let mut attributes = SessionAttributes::new();
        assert!(attributes.chat_history_or_init().unwrap().is_empty());
        assert_eq!(attributes.get(CHAT_HISTORY_KEY), Some(&json!([])));
    }

    #[test]
    fn reads_pairs() {
        let attributes = attrs(json!({ "chat_history": [["q1", "a1"], ["q2", "a2"]] }));
        let history = attributes.chat_history().unwrap();
        assert_eq!(
            history,
            vec![ChatExchange::new("q1", "a1"), ChatExchange::new("q2", "a2")]
        );
    }

    #[test]
    fn malformed_history_is_an_error() {
        for bad in [json!("not a list"), json!([["only one"]]), json!([[1, 2]])] {
            let attributes = attrs(json!({ "chat_history": bad }));
            let err = attributes.chat_history().unwrap_err();
            assert!(matches!(err, SkillError::InvalidAttribute { ref key, .. } if key == CHAT_HISTORY_KEY));
        }
    }

    #[test]
    fn push_appends_one_pair_and_keeps_other_keys() {
        let mut attributes = attrs(json!({
            "chat_history": [["q1", "a1"]],
            "favorite_color": "blue"
        }));
        attributes
            .push_exchange(ChatExchange::new("q2", "a2"))
            .unwrap();

        let map = attributes.into_map();
        assert_eq!(map["chat_history"], json!([["q1", "a1"], ["q2", "a2"]]));
        assert_eq!(map["favorite_color"], json!("blue"));
    }

    #[test]
    fn reset_clears_history() {
        let mut attributes = attrs(json!({ "chat_history": [["q1", "a1"]] }));
        attributes.reset_chat_history();
        assert!(attributes.chat_history().unwrap().is_empty());
    }
}
