use crate::clipboard::format_for_clipboard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::PromptError;
use crate::model::PromptId;
use crate::store::{KeyValueSlot, PromptStore};

/// Prepares the clipboard text of `id`, or of the selected prompt when no id is
/// given. Copying itself is left to the caller.
pub fn run<S: KeyValueSlot>(store: &PromptStore<S>, id: Option<&PromptId>) -> CmdResult {
    let target = match id {
        Some(id) => store.get(id),
        None => store.selected(),
    };

    let mut result = CmdResult::default();
    match target {
        Some(prompt) => {
            result.clipboard = Some(format_for_clipboard(prompt));
            result.prompt = Some(prompt.clone());
        }
        None => {
            let message = match id {
                Some(id) => PromptError::NotFound(id.clone()).to_string(),
                None => "No prompt selected".to_string(),
            };
            result.add_message(CmdMessage::info(message));
        }
    }
    result
}
