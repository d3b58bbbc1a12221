use colored::Colorize;
use promptbook::api::{CmdMessage, MessageLevel};
use promptbook::markup::visible_text;
use promptbook::model::Prompt;
use promptbook::projector::ListEntry;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 14;
const TITLE_WIDTH: usize = 28;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", format_message(message));
    }
}

pub(super) fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

pub(super) fn format_full_prompt(prompt: &Prompt) -> String {
    format!(
        "{} {}\n--------------------------------\n{}",
        prompt.id.to_string().yellow(),
        prompt.title.bold(),
        visible_text(&prompt.content).trim()
    )
}

/// One line per entry: id, title, then as much preview as `preview_width` allows.
pub(super) fn format_list(entries: &[ListEntry], preview_width: usize) -> Vec<String> {
    if entries.is_empty() {
        return vec!["No prompts found.".to_string()];
    }

    entries
        .iter()
        .map(|entry| {
            let id = format!("{:>width$}", entry.id.as_str(), width = ID_WIDTH);
            let title = pad_to_width(&truncate_to_width(&entry.title, TITLE_WIDTH), TITLE_WIDTH);
            let preview = truncate_to_width(&one_line(&entry.preview), preview_width);
            format!("{}  {}  {}", id.dimmed(), title, preview.dimmed())
                .trim_end()
                .to_string()
        })
        .collect()
}

fn one_line(content: &str) -> String {
    visible_text(content)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    if max_width > 0 {
        result.push('…');
    }
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
