//! The agent's view of its environment, as rendered into reasoning prompts.

use serde_json::Value;

/// Ordered key/value observations.
///
/// Keys keep their first-insertion position; inserting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldModel {
    entries: Vec<(String, Value)>,
}

impl WorldModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Merge every entry of `other` into `self`.
    pub fn update(&mut self, other: WorldModel) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a `key=value` pair. Values that parse as JSON keep their type;
    /// anything else is stored as a string.
    pub fn parse_assignment(raw: &str) -> Option<(String, Value)> {
        let (key, value) = raw.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        let value = serde_json::from_str(value.trim())
            .unwrap_or_else(|_| Value::String(value.trim().to_string()));
        Some((key.to_string(), value))
    }

    /// One `key: value` line per entry; objects render as `key: {k: v, k2: v2}`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            let rendered = match value {
                Value::Object(map) => {
                    let inner: Vec<String> = map
                        .iter()
                        .map(|(k, v)| format!("{}: {}", k, scalar(v)))
                        .collect();
                    format!("{{{}}}", inner.join(", "))
                }
                other => scalar(other),
            };
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&rendered);
            out.push('\n');
        }
        out
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
