//! Mirrors the prompt collection into a [`KeyValueSlot`] under one fixed key.
//!
//! The blob is a JSON array of `{"id", "title", "content"}` objects in collection
//! order. There is no version field: a format change is a breaking change.

use crate::error::{PromptError, Result};
use crate::model::Prompt;
use crate::store::KeyValueSlot;
use std::collections::HashSet;

/// The single key the collection is stored under.
pub const STORAGE_KEY: &str = "prompts-storage";

/// Serializes the whole collection and overwrites the slot with it.
///
/// Any failure, whether encoding or the write itself, is reported as
/// [`PromptError::Persist`].
pub fn persist<S: KeyValueSlot>(slot: &S, prompts: &[Prompt]) -> Result<()> {
    let blob = encode(prompts)?;
    slot.set(STORAGE_KEY, &blob).map_err(|e| match e {
        PromptError::Persist(msg) => PromptError::Persist(msg),
        other => PromptError::Persist(other.to_string()),
    })?;
    log::debug!("Persisted {} prompts to {}", prompts.len(), STORAGE_KEY);
    Ok(())
}

/// Reads the collection back, propagating read and decode failures.
pub fn try_load<S: KeyValueSlot>(slot: &S) -> Result<Vec<Prompt>> {
    match slot.get(STORAGE_KEY)? {
        Some(blob) => decode(&blob),
        None => Ok(Vec::new()),
    }
}

/// Reads the collection back. Never fails: an absent, unreadable or corrupt
/// slot yields an empty collection.
pub fn load<S: KeyValueSlot>(slot: &S) -> Vec<Prompt> {
    match try_load(slot) {
        Ok(prompts) => {
            log::debug!("Loaded {} prompts from {}", prompts.len(), STORAGE_KEY);
            prompts
        }
        Err(e) => {
            log::warn!("Could not load saved prompts, starting empty: {}", e);
            Vec::new()
        }
    }
}

pub fn encode(prompts: &[Prompt]) -> Result<String> {
    serde_json::to_string(prompts).map_err(|e| PromptError::Persist(e.to_string()))
}

/// Parses a blob. Records repeating an earlier id are dropped so the collection
/// keeps unique ids even if the file was edited by hand.
pub fn decode(blob: &str) -> Result<Vec<Prompt>> {
    let prompts: Vec<Prompt> = serde_json::from_str(blob).map_err(PromptError::Serialization)?;

    let mut seen = HashSet::new();
    let total = prompts.len();
    let unique: Vec<Prompt> = prompts
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect();
    if unique.len() != total {
        log::warn!(
            "Dropped {} prompts with duplicate ids while loading",
            total - unique.len()
        );
    }
    Ok(unique)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PromptId;
    use crate::store::memory::MemorySlot;

    fn sample() -> Vec<Prompt> {
        vec![
            Prompt::new(PromptId::new("2"), "Second".into(), "<b>two</b>".into()),
            Prompt::new(PromptId::new("1"), "First".into(), "one\nline".into()),
        ]
    }

    #[test]
    fn round_trip_preserves_records_and_order() {
        let slot = MemorySlot::new();
        persist(&slot, &sample()).unwrap();
        assert_eq!(load(&slot), sample());
    }

    #[test]
    fn empty_slot_loads_empty() {
        let slot = MemorySlot::new();
        assert!(load(&slot).is_empty());
        assert!(try_load(&slot).unwrap().is_empty());
    }

    #[test]
    fn corrupt_blob_loads_empty() {
        let slot = MemorySlot::new().with_value(STORAGE_KEY, "{not json");
        assert!(try_load(&slot).is_err());
        assert!(load(&slot).is_empty());
    }

    #[test]
    fn wrong_shape_loads_empty() {
        let slot = MemorySlot::new().with_value(STORAGE_KEY, r#"{"id":"1"}"#);
        assert!(load(&slot).is_empty());
    }

    #[test]
    fn read_failure_loads_empty() {
        let slot = MemorySlot::new().with_value(STORAGE_KEY, "[]");
        slot.set_simulate_read_error(true);
        assert!(load(&slot).is_empty());
    }

    #[test]
    fn write_failure_is_persist_error() {
        let slot = MemorySlot::new();
        slot.set_simulate_write_error(true);
        let err = persist(&slot, &sample()).unwrap_err();
        assert!(matches!(err, PromptError::Persist(_)));
    }

    #[test]
    fn persist_overwrites_previous_blob() {
        let slot = MemorySlot::new();
        persist(&slot, &sample()).unwrap();
        persist(&slot, &[]).unwrap();
        assert_eq!(slot.raw(STORAGE_KEY), Some("[]".to_string()));
    }

    #[test]
    fn decode_drops_repeated_ids() {
        let blob = r#"[
            {"id":"1","title":"Kept","content":"a"},
            {"id":"1","title":"Dropped","content":"b"}
        ]"#;
        let prompts = decode(blob).unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].title, "Kept");
    }

    #[test]
    fn reads_timestamp_ids() {
        let blob = r#"[{"id":"1718000000000","title":"Greeting","content":"Hello"}]"#;
        let prompts = decode(blob).unwrap();
        assert_eq!(prompts[0].id, PromptId::new("1718000000000"));
    }
}
