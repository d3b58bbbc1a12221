//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every front end. It owns the [`PromptStore`] (there is no global
//! state anywhere) and the live filter text, which survives between events the
//! same way a search box keeps its contents while the user clicks around.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs` and the store
//! - **I/O operations**: no stdout, stderr or clipboard access
//! - **Presentation**: returns data structures, not strings
//!
//! ## Generic Over KeyValueSlot
//!
//! `PromptApi<S: KeyValueSlot>` is generic over the storage slot:
//! - Production: `PromptApi<FileSlot>`
//! - Testing: `PromptApi<MemorySlot>`

use crate::commands;
use crate::error::Result;
use crate::model::{Prompt, PromptId};
use crate::store::{KeyValueSlot, PromptStore};
use std::path::PathBuf;

pub struct PromptApi<S: KeyValueSlot> {
    store: PromptStore<S>,
    filter: String,
}

impl<S: KeyValueSlot> PromptApi<S> {
    /// Opens the collection stored in `slot`.
    pub fn new(slot: S) -> Self {
        Self {
            store: PromptStore::open(slot),
            filter: String::new(),
        }
    }

    /// Saves the editor contents: edits the selected prompt or creates a new one.
    pub fn save(&mut self, title: &str, content: &str) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, title, content, &self.filter)
    }

    /// Selects `id` and saves, so an explicit id always edits that prompt.
    /// Unknown ids report and change nothing.
    pub fn edit(&mut self, id: &str, title: &str, content: &str) -> Result<commands::CmdResult> {
        let selected = commands::select::run(&mut self.store, &PromptId::from(id));
        if selected.prompt.is_none() {
            return Ok(selected);
        }
        self.save(title, content)
    }

    pub fn new_prompt(&mut self) -> commands::CmdResult {
        commands::select::clear(&mut self.store)
    }

    pub fn select(&mut self, id: &str) -> commands::CmdResult {
        commands::select::run(&mut self.store, &PromptId::from(id))
    }

    pub fn view(&self, id: &str) -> commands::CmdResult {
        commands::select::view(&self.store, &PromptId::from(id))
    }

    pub fn delete<I: AsRef<str>>(&mut self, ids: &[I]) -> commands::CmdResult {
        let ids: Vec<PromptId> = ids.iter().map(|s| PromptId::from(s.as_ref())).collect();
        commands::delete::run(&mut self.store, &ids, &self.filter)
    }

    /// Renders the list. A given filter replaces the stored one; `None` reuses it.
    pub fn list(&mut self, filter: Option<&str>) -> commands::CmdResult {
        if let Some(filter) = filter {
            self.filter = filter.to_string();
        }
        commands::list::run(&self.store, &self.filter)
    }

    pub fn copy(&self, id: Option<&str>) -> commands::CmdResult {
        let id = id.map(PromptId::from);
        commands::copy::run(&self.store, id.as_ref())
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn selected(&self) -> Option<&Prompt> {
        self.store.selected()
    }

    pub fn prompts(&self) -> &[Prompt] {
        self.store.prompts()
    }

    /// Where the collection is persisted.
    pub fn location(&self) -> PathBuf {
        self.store.location()
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemorySlot;

    fn api() -> PromptApi<MemorySlot> {
        PromptApi::new(MemorySlot::new())
    }

    #[test]
    fn greeting_scenario() {
        let mut api = api();
        let first = api.save("Greeting", "Hello").unwrap();
        let id = first.affected[0].id.clone();
        assert_eq!(api.selected().map(|p| &p.id), Some(&id));

        api.save("Greeting v2", "Hi").unwrap();

        assert_eq!(api.prompts().len(), 1);
        assert_eq!(api.prompts()[0].id, id);
        assert_eq!(api.prompts()[0].title, "Greeting v2");
        assert_eq!(api.prompts()[0].content, "Hi");
    }

    #[test]
    fn filter_persists_between_events() {
        let mut api = api();
        api.save("Alpha", "a").unwrap();
        api.new_prompt();
        api.save("beta", "b").unwrap();

        let listed = api.list(Some("AL")).listed;
        assert_eq!(listed.len(), 1);

        // A later mutation re-renders with the same filter
        api.new_prompt();
        let result = api.save("Gamma", "g").unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].title, "Alpha");
        assert_eq!(api.filter(), "AL");

        assert_eq!(api.list(None).listed.len(), 1);
        assert_eq!(api.list(Some("")).listed.len(), 3);
    }

    #[test]
    fn edit_targets_given_id() {
        let mut api = api();
        let id = api.save("One", "1").unwrap().affected[0].id.clone();
        api.new_prompt();
        api.save("Two", "2").unwrap();

        api.edit(id.as_str(), "One edited", "1!").unwrap();

        assert_eq!(api.prompts().len(), 2);
        assert_eq!(api.prompts()[1].title, "One edited");
    }

    #[test]
    fn edit_unknown_id_changes_nothing() {
        let mut api = api();
        api.save("One", "1").unwrap();

        let result = api.edit("missing", "X", "Y").unwrap();

        assert!(result.affected.is_empty());
        assert_eq!(api.prompts().len(), 1);
        assert_eq!(api.prompts()[0].title, "One");
    }

    #[test]
    fn delete_accepts_string_ids() {
        let mut api = api();
        let id = api.save("Gone", "soon").unwrap().affected[0].id.clone();

        let result = api.delete(&[id.as_str()]);

        assert_eq!(result.affected.len(), 1);
        assert!(api.prompts().is_empty());
        assert!(api.selected().is_none());
    }

    #[test]
    fn view_and_copy() {
        let mut api = api();
        let id = api.save("Note", "<i>text</i>").unwrap().affected[0].id.clone();

        assert!(api.view(id.as_str()).prompt.is_some());
        assert_eq!(api.copy(None).clipboard.as_deref(), Some("text"));
        assert_eq!(api.copy(Some(id.as_str())).clipboard.as_deref(), Some("text"));
    }
}
