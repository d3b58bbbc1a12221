use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a prompt. Only uniqueness inside one collection matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptId(String);

impl PromptId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derives a fresh id from the current time in milliseconds, stepping forward
    /// until it collides with none of `existing`.
    pub fn generate(existing: &[Prompt]) -> Self {
        let mut candidate = Utc::now().timestamp_millis();
        loop {
            let id = candidate.to_string();
            if !existing.iter().any(|p| p.id.as_str() == id) {
                return Self(id);
            }
            candidate += 1;
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PromptId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PromptId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: PromptId,
    pub title: String,
    pub content: String,
}

impl Prompt {
    pub fn new(id: PromptId, title: String, content: String) -> Self {
        Self { id, title, content }
    }
}
