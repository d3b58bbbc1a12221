//! # List Projection
//!
//! [`render`] turns the collection plus the live filter text into the entries of
//! the prompt list. It is a pure function: the same prompts and filter always give
//! the same entries, and it never reorders anything.
//!
//! The filter is a case-insensitive substring match against titles only. Content
//! is never searched, and the preview is the raw content: shortening it to fit a
//! screen is the front end's business.

use crate::model::{Prompt, PromptId};
use serde::Serialize;

/// One row of the prompt list. `id` is the row's affordance: front ends select
/// and remove through it (`PromptApi::select`, `PromptApi::delete`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub id: PromptId,
    pub title: String,
    pub preview: String,
}

impl ListEntry {
    fn from_prompt(prompt: &Prompt) -> Self {
        Self {
            id: prompt.id.clone(),
            title: prompt.title.clone(),
            preview: prompt.content.clone(),
        }
    }
}

/// Whether `title` passes the filter. An empty (or blank) filter passes everything.
pub fn matches_filter(title: &str, filter_text: &str) -> bool {
    let needle = filter_text.trim().to_lowercase();
    needle.is_empty() || title.to_lowercase().contains(&needle)
}

pub fn render(prompts: &[Prompt], filter_text: &str) -> Vec<ListEntry> {
    prompts
        .iter()
        .filter(|p| matches_filter(&p.title, filter_text))
        .map(ListEntry::from_prompt)
        .collect()
}
