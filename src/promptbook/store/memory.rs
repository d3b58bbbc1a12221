use super::KeyValueSlot;
use crate::error::{PromptError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory slot for testing and development. Does NOT persist data.
///
/// Uses `RefCell` for interior mutability since promptbook is single-threaded.
#[derive(Default)]
pub struct MemorySlot {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
    writes: Cell<usize>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates `key`, bypassing write error simulation.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent `set` fail, like a full or disabled storage.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueSlot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(PromptError::Persist("Simulated read error".to_string()));
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(PromptError::Persist("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", key))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Prompt, PromptId};
    use crate::persistence::STORAGE_KEY;

    /// Builds a slot already holding a persisted collection.
    pub struct SlotFixture {
        prompts: Vec<Prompt>,
    }

    impl Default for SlotFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SlotFixture {
        pub fn new() -> Self {
            Self {
                prompts: Vec::new(),
            }
        }

        /// Appends a prompt with id `id`; fixtures list prompts newest first.
        pub fn with_prompt(mut self, id: &str, title: &str, content: &str) -> Self {
            self.prompts.push(Prompt::new(
                PromptId::new(id),
                title.to_string(),
                content.to_string(),
            ));
            self
        }

        pub fn build(self) -> MemorySlot {
            let blob = serde_json::to_string(&self.prompts).unwrap();
            MemorySlot::new().with_value(STORAGE_KEY, &blob)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let slot = MemorySlot::new();
        slot.set("k", "v").unwrap();
        assert_eq!(slot.get("k").unwrap(), Some("v".to_string()));
        assert_eq!(slot.writes(), 1);
    }

    #[test]
    fn simulated_write_error_keeps_old_value() {
        let slot = MemorySlot::new().with_value("k", "old");
        slot.set_simulate_write_error(true);

        assert!(slot.set("k", "new").is_err());
        assert_eq!(slot.raw("k"), Some("old".to_string()));
        assert_eq!(slot.writes(), 0);
    }

    #[test]
    fn simulated_read_error() {
        let slot = MemorySlot::new().with_value("k", "v");
        slot.set_simulate_read_error(true);
        assert!(slot.get("k").is_err());
    }
}
