use super::KeyValueSlot;
use crate::error::{PromptError, Result};
use crate::markup::visible_text;
use crate::model::{Prompt, PromptId};
use crate::persistence;
use std::path::PathBuf;

/// Result of a successful `create_or_update`.
#[derive(Debug)]
pub struct SaveOutcome {
    pub prompt: Prompt,
    /// `true` when a new record was prepended, `false` for an in-place edit.
    pub created: bool,
    /// Set when the in-memory change could not be written to the slot.
    pub persist_error: Option<PromptError>,
}

/// Result of a `delete`.
#[derive(Debug, Default)]
pub struct DeleteOutcome {
    pub removed: Option<Prompt>,
    pub persist_error: Option<PromptError>,
}

/// The authoritative prompt collection plus the current selection.
///
/// Prompts are kept newest first. The selection is a weak reference: it is only
/// an id, resolved against the live collection every time it is used.
pub struct PromptStore<S: KeyValueSlot> {
    slot: S,
    prompts: Vec<Prompt>,
    selected_id: Option<PromptId>,
}

impl<S: KeyValueSlot> PromptStore<S> {
    /// Loads the persisted collection from `slot`. Starts empty when nothing
    /// usable is stored there. The selection always starts empty.
    pub fn open(slot: S) -> Self {
        let prompts = persistence::load(&slot);
        Self {
            slot,
            prompts,
            selected_id: None,
        }
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn get(&self, id: &PromptId) -> Option<&Prompt> {
        self.prompts.iter().find(|p| &p.id == id)
    }

    /// The selected prompt, if the selection still points at a live record.
    pub fn selected(&self) -> Option<&Prompt> {
        self.selected_id.as_ref().and_then(|id| self.get(id))
    }

    pub fn selected_id(&self) -> Option<&PromptId> {
        self.selected().map(|p| &p.id)
    }

    /// Saves the editor contents.
    ///
    /// Edits the selected prompt in place when the selection resolves, otherwise
    /// prepends a new prompt and selects it. Inputs are trimmed; an empty title
    /// or a content without visible text is rejected before anything changes.
    pub fn create_or_update(&mut self, title: &str, content: &str) -> Result<SaveOutcome> {
        let (title, content) = validate(title, content)?;

        let selected = self
            .selected_id
            .as_ref()
            .and_then(|id| self.prompts.iter().position(|p| &p.id == id));

        let (prompt, created) = match selected {
            Some(pos) => {
                let existing = &mut self.prompts[pos];
                existing.title = title;
                existing.content = content;
                (existing.clone(), false)
            }
            None => {
                let prompt = Prompt::new(PromptId::generate(&self.prompts), title, content);
                self.prompts.insert(0, prompt.clone());
                self.selected_id = Some(prompt.id.clone());
                (prompt, true)
            }
        };

        log::debug!(
            "{} prompt {} ({})",
            if created { "Created" } else { "Updated" },
            prompt.id,
            prompt.title
        );

        Ok(SaveOutcome {
            prompt,
            created,
            persist_error: self.persist(),
        })
    }

    /// Removes the prompt with `id`. Unknown ids are a no-op and nothing is
    /// written. Deleting the selected prompt clears the selection.
    pub fn delete(&mut self, id: &PromptId) -> DeleteOutcome {
        let Some(pos) = self.prompts.iter().position(|p| &p.id == id) else {
            log::debug!("Delete of unknown prompt {} ignored", id);
            return DeleteOutcome::default();
        };

        let removed = self.prompts.remove(pos);
        if self.selected_id.as_ref() == Some(id) {
            self.selected_id = None;
        }
        log::debug!("Deleted prompt {} ({})", removed.id, removed.title);

        DeleteOutcome {
            removed: Some(removed),
            persist_error: self.persist(),
        }
    }

    /// Selects `id` and returns the prompt. An unknown id clears the selection.
    pub fn select(&mut self, id: &PromptId) -> Option<&Prompt> {
        if self.get(id).is_some() {
            self.selected_id = Some(id.clone());
            self.get(id)
        } else {
            self.selected_id = None;
            None
        }
    }

    /// Drops the selection so the next save creates a fresh prompt.
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Path (or virtual location) of the durable slot.
    pub fn location(&self) -> PathBuf {
        self.slot.location(persistence::STORAGE_KEY)
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn slot(&self) -> &S {
        &self.slot
    }

    // Best effort: a failed write is logged and handed back, never rolled back.
    fn persist(&self) -> Option<PromptError> {
        match persistence::persist(&self.slot, &self.prompts) {
            Ok(()) => None,
            Err(e) => {
                log::warn!("Failed to save prompts: {}", e);
                Some(e)
            }
        }
    }
}

fn validate(title: &str, content: &str) -> Result<(String, String)> {
    let title = title.trim();
    let content = content.trim();

    if title.is_empty() {
        return Err(PromptError::Validation("Title cannot be empty".to_string()));
    }
    if visible_text(content).trim().is_empty() {
        return Err(PromptError::Validation(
            "Content cannot be empty".to_string(),
        ));
    }
    Ok((title.to_string(), content.to_string()))
}
