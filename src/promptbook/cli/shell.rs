//! Interactive session: one store, one selection and one filter kept alive across
//! many events. Every line read is one event; every mutation re-renders the list.

use super::render::{format_full_prompt, format_list, format_message};
use promptbook::api::{CmdMessage, CmdResult, PromptApi};
use promptbook::error::{PromptError, Result};
use promptbook::markup::escape_text;
use promptbook::store::KeyValueSlot;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  list [FILTER]          show prompts (a given filter replaces the current one)
  filter [TEXT]          set the title filter (empty clears it)
  new                    start a fresh prompt
  select ID              load a prompt into the editor
  save TITLE | CONTENT   save the editor (edits the selected prompt, or creates one)
  delete ID...           delete prompts
  show                   show the selected prompt
  copy                   copy the selected prompt to the clipboard
  help                   show this help
  quit                   leave the session";

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    List(Option<String>),
    Filter(String),
    New,
    Select(String),
    Save { title: String, content: String },
    Delete(Vec<String>),
    Show,
    Copy,
    Help,
    Quit,
    Empty,
}

fn parse_line(line: &str) -> std::result::Result<ShellCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "" => Ok(ShellCommand::Empty),
        "list" | "ls" => Ok(ShellCommand::List(
            (!rest.is_empty()).then(|| rest.to_string()),
        )),
        "filter" | "search" => Ok(ShellCommand::Filter(rest.to_string())),
        "new" => Ok(ShellCommand::New),
        "select" | "open" if !rest.is_empty() => Ok(ShellCommand::Select(rest.to_string())),
        "save" => match rest.split_once('|') {
            Some((title, content)) => Ok(ShellCommand::Save {
                title: title.trim().to_string(),
                content: content.trim().to_string(),
            }),
            None => Err("Usage: save TITLE | CONTENT".to_string()),
        },
        "delete" | "rm" if !rest.is_empty() => Ok(ShellCommand::Delete(
            rest.split_whitespace().map(str::to_string).collect(),
        )),
        "show" => Ok(ShellCommand::Show),
        "copy" => Ok(ShellCommand::Copy),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        "select" | "open" | "delete" | "rm" => Err(format!("Usage: {} ID", word)),
        other => Err(format!("Unknown command: {} (try `help`)", other)),
    }
}

/// Runs the session until `quit` or end of input. `copy` hands the clipboard
/// text to `copier`.
pub(super) fn run<S, R, W, C>(
    api: &mut PromptApi<S>,
    preview_width: usize,
    input: R,
    out: &mut W,
    mut copier: C,
) -> Result<()>
where
    S: KeyValueSlot,
    R: BufRead,
    W: Write,
    C: FnMut(&str) -> Result<()>,
{
    write_list(out, &api.list(None), preview_width)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(usage) => {
                write_messages(out, &[CmdMessage::error(usage)])?;
                continue;
            }
        };

        match command {
            ShellCommand::Empty => {}
            ShellCommand::Quit => break,
            ShellCommand::Help => writeln!(out, "{}", HELP)?,
            ShellCommand::List(filter) => {
                write_list(out, &api.list(filter.as_deref()), preview_width)?
            }
            ShellCommand::Filter(text) => {
                write_list(out, &api.list(Some(text.as_str())), preview_width)?
            }
            ShellCommand::New => write_messages(out, &api.new_prompt().messages)?,
            ShellCommand::Select(id) => {
                let result = api.select(&id);
                if let Some(prompt) = &result.prompt {
                    writeln!(out, "{}", format_full_prompt(prompt))?;
                }
                write_messages(out, &result.messages)?;
            }
            ShellCommand::Save { title, content } => {
                match api.save(&title, &escape_text(&content)) {
                    Ok(result) => write_list(out, &result, preview_width)?,
                    Err(e @ PromptError::Validation(_)) => {
                        write_messages(out, &[CmdMessage::error(e.to_string())])?
                    }
                    Err(e) => return Err(e),
                }
            }
            ShellCommand::Delete(ids) => write_list(out, &api.delete(&ids), preview_width)?,
            ShellCommand::Show => match api.selected() {
                Some(prompt) => writeln!(out, "{}", format_full_prompt(prompt))?,
                None => write_messages(out, &[CmdMessage::info("No prompt selected")])?,
            },
            ShellCommand::Copy => {
                let result = api.copy(None);
                if let Some(text) = &result.clipboard {
                    let message = match copier(text) {
                        Ok(()) => CmdMessage::success("Content copied to clipboard"),
                        Err(e) => {
                            log::warn!("Clipboard copy failed: {}", e);
                            CmdMessage::error(e.to_string())
                        }
                    };
                    write_messages(out, &[message])?;
                }
                write_messages(out, &result.messages)?;
            }
        }
    }
    Ok(())
}

fn write_list<W: Write>(out: &mut W, result: &CmdResult, preview_width: usize) -> Result<()> {
    for line in format_list(&result.listed, preview_width) {
        writeln!(out, "{}", line)?;
    }
    write_messages(out, &result.messages)
}

fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> Result<()> {
    for message in messages {
        writeln!(out, "{}", format_message(message))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptbook::store::memory::MemorySlot;

    fn session(api: &mut PromptApi<MemorySlot>, script: &str) -> (String, Vec<String>) {
        let mut out = Vec::new();
        let mut copied = Vec::new();
        run(api, 60, script.as_bytes(), &mut out, |text: &str| {
            copied.push(text.to_string());
            Ok(())
        })
        .unwrap();
        (String::from_utf8(out).unwrap(), copied)
    }

    #[test]
    fn parses_save_with_separator() {
        assert_eq!(
            parse_line("save Greeting | Hello there").unwrap(),
            ShellCommand::Save {
                title: "Greeting".into(),
                content: "Hello there".into()
            }
        );
        assert!(parse_line("save no separator").is_err());
    }

    #[test]
    fn parses_list_and_filter() {
        assert_eq!(parse_line("list").unwrap(), ShellCommand::List(None));
        assert_eq!(
            parse_line("ls  al ").unwrap(),
            ShellCommand::List(Some("al".into()))
        );
        assert_eq!(parse_line("filter").unwrap(), ShellCommand::Filter("".into()));
    }

    #[test]
    fn id_commands_need_arguments() {
        assert!(parse_line("select").is_err());
        assert!(parse_line("rm").is_err());
        assert_eq!(
            parse_line("rm 1 2").unwrap(),
            ShellCommand::Delete(vec!["1".into(), "2".into()])
        );
    }

    #[test]
    fn unknown_command_is_error() {
        assert!(parse_line("frobnicate").is_err());
        assert_eq!(parse_line("   ").unwrap(), ShellCommand::Empty);
    }

    #[test]
    fn save_twice_edits_the_same_prompt() {
        let mut api = PromptApi::new(MemorySlot::new());
        session(&mut api, "save Greeting | Hello\nsave Greeting v2 | Hi\nquit\n");

        assert_eq!(api.prompts().len(), 1);
        assert_eq!(api.prompts()[0].title, "Greeting v2");
    }

    #[test]
    fn new_then_save_creates_second_prompt() {
        let mut api = PromptApi::new(MemorySlot::new());
        session(&mut api, "save A | a\nnew\nsave B | b\n");

        let titles: Vec<_> = api.prompts().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn validation_error_does_not_end_session() {
        let mut api = PromptApi::new(MemorySlot::new());
        let (out, _) = session(&mut api, "save  | body\nsave Ok | fine\n");

        assert!(out.contains("Title cannot be empty"));
        assert_eq!(api.prompts().len(), 1);
    }

    #[test]
    fn filter_applies_to_relisting_after_save() {
        let mut api = PromptApi::new(MemorySlot::new());
        let (out, _) = session(&mut api, "save Beta | b\nfilter zzz\nnew\nsave Alpha | a\n");

        assert_eq!(api.filter(), "zzz");
        assert_eq!(api.prompts().len(), 2);
        let after_last_save = out.split("> ").nth(4).unwrap();
        assert!(after_last_save.contains("No prompts found."));
        assert!(after_last_save.contains("Alpha"));
        assert!(!after_last_save.contains("Beta"));
    }

    #[test]
    fn copy_uses_selected_prompt() {
        let mut api = PromptApi::new(MemorySlot::new());
        let (out, copied) = session(&mut api, "save Note | bold text\ncopy\n");

        assert_eq!(copied, vec!["bold text".to_string()]);
        assert!(out.contains("Content copied to clipboard"));
    }

    #[test]
    fn typed_angle_brackets_are_kept() {
        let mut api = PromptApi::new(MemorySlot::new());
        let (out, copied) = session(
            &mut api,
            "save Placeholder | <your question here>\ncopy\nnew\nsave Wrap | Put the text inside <context> tags\ncopy\n",
        );

        assert!(!out.contains("Content cannot be empty"));
        assert_eq!(api.prompts().len(), 2);
        assert_eq!(
            copied,
            vec![
                "<your question here>".to_string(),
                "Put the text inside <context> tags".to_string(),
            ]
        );
    }

    #[test]
    fn select_unknown_reports() {
        let mut api = PromptApi::new(MemorySlot::new());
        let (out, _) = session(&mut api, "select 123\nshow\n");

        assert!(out.contains("Prompt not found: 123"));
        assert!(out.contains("No prompt selected"));
    }

    #[test]
    fn delete_selected_then_save_creates_new() {
        let mut api = PromptApi::new(MemorySlot::new());
        session(&mut api, "save Old | o\n");
        let id = api.prompts()[0].id.to_string();

        session(&mut api, &format!("select {}\nrm {}\nsave Fresh | f\n", id, id));

        assert_eq!(api.prompts().len(), 1);
        assert_eq!(api.prompts()[0].title, "Fresh");
    }
}
