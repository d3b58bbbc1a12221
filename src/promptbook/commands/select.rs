use crate::commands::{CmdMessage, CmdResult};
use crate::error::PromptError;
use crate::model::PromptId;
use crate::store::{KeyValueSlot, PromptStore};

/// Selects `id` so the next save edits it.
pub fn run<S: KeyValueSlot>(store: &mut PromptStore<S>, id: &PromptId) -> CmdResult {
    match store.select(id) {
        Some(prompt) => CmdResult::default().with_prompt(prompt.clone()),
        None => not_found(id),
    }
}

/// Looks a prompt up for display without touching the selection.
pub fn view<S: KeyValueSlot>(store: &PromptStore<S>, id: &PromptId) -> CmdResult {
    match store.get(id) {
        Some(prompt) => CmdResult::default().with_prompt(prompt.clone()),
        None => not_found(id),
    }
}

/// Starts a fresh, unsaved prompt.
pub fn clear<S: KeyValueSlot>(store: &mut PromptStore<S>) -> CmdResult {
    store.clear_selection();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("New prompt: the next save creates a record"));
    result
}

fn not_found(id: &PromptId) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(
        PromptError::NotFound(id.clone()).to_string(),
    ));
    result
}
