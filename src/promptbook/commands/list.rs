use crate::commands::CmdResult;
use crate::projector::render;
use crate::store::{KeyValueSlot, PromptStore};

pub fn run<S: KeyValueSlot>(store: &PromptStore<S>, filter: &str) -> CmdResult {
    CmdResult::default().with_listed(render(store.prompts(), filter))
}
