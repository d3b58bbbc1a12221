//! # Command Layer
//!
//! One module per user action. Each `run` function takes the store (and the
//! current filter where the action re-renders the list), applies the action and
//! returns a [`CmdResult`] describing what happened. No terminal I/O here.
//!
//! Mutating commands always return the re-rendered list, mirroring the event
//! loop: mutate, persist, re-render.

use crate::error::PromptError;
use crate::model::Prompt;
use crate::projector::ListEntry;

pub mod copy;
pub mod delete;
pub mod list;
pub mod save;
pub mod select;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Prompts created, edited or removed by the command.
    pub affected: Vec<Prompt>,
    /// The list as it should be displayed after the command.
    pub listed: Vec<ListEntry>,
    /// The prompt to show in the editor, if any.
    pub prompt: Option<Prompt>,
    /// Text destined for the clipboard.
    pub clipboard: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<ListEntry>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_prompt(mut self, prompt: Prompt) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Turns a failed write into a warning; the change itself already happened.
    pub(crate) fn note_persist_error(&mut self, error: Option<PromptError>) {
        if let Some(e) = error {
            self.add_message(CmdMessage::warning(format!(
                "{} (changes are kept for this session only)",
                e
            )));
        }
    }
}
