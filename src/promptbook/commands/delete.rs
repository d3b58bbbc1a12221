use crate::commands::{CmdMessage, CmdResult};
use crate::error::PromptError;
use crate::model::PromptId;
use crate::projector::render;
use crate::store::{KeyValueSlot, PromptStore};

/// Deletes each id in turn. Unknown ids are reported as info, never as errors.
pub fn run<S: KeyValueSlot>(
    store: &mut PromptStore<S>,
    ids: &[PromptId],
    filter: &str,
) -> CmdResult {
    let mut result = CmdResult::default();

    for id in ids {
        let outcome = store.delete(id);
        match outcome.removed {
            Some(prompt) => {
                result.add_message(CmdMessage::success(format!(
                    "Prompt deleted ({}): {}",
                    prompt.id, prompt.title
                )));
                result.affected.push(prompt);
            }
            None => result.add_message(CmdMessage::info(
                PromptError::NotFound(id.clone()).to_string(),
            )),
        }
        result.note_persist_error(outcome.persist_error);
    }

    result.with_listed(render(store.prompts(), filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::SlotFixture;

    fn store() -> PromptStore<crate::store::memory::MemorySlot> {
        PromptStore::open(
            SlotFixture::new()
                .with_prompt("2", "Beta", "b")
                .with_prompt("1", "Alpha", "a")
                .build(),
        )
    }

    #[test]
    fn deletes_and_relists() {
        let mut store = store();
        let result = run(&mut store, &[PromptId::new("2")], "");

        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].title, "Alpha");
    }

    #[test]
    fn unknown_id_is_info_only() {
        let mut store = store();
        let result = run(&mut store, &[PromptId::new("9")], "");

        assert!(result.affected.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.listed.len(), 2);
    }

    #[test]
    fn deletes_several() {
        let mut store = store();
        let result = run(&mut store, &[PromptId::new("1"), PromptId::new("2")], "");
        assert_eq!(result.affected.len(), 2);
        assert!(result.listed.is_empty());
    }
}
