use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::projector::render;
use crate::store::{KeyValueSlot, PromptStore};

pub fn run<S: KeyValueSlot>(
    store: &mut PromptStore<S>,
    title: &str,
    content: &str,
    filter: &str,
) -> Result<CmdResult> {
    let outcome = store.create_or_update(title, content)?;

    let mut result = CmdResult::default().with_prompt(outcome.prompt.clone());
    result.add_message(CmdMessage::success(format!(
        "Prompt {} ({}): {}",
        if outcome.created { "created" } else { "updated" },
        outcome.prompt.id,
        outcome.prompt.title
    )));
    result.note_persist_error(outcome.persist_error);
    result.affected.push(outcome.prompt);

    Ok(result.with_listed(render(store.prompts(), filter)))
}
