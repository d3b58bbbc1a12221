use crate::error::{PromptError, Result};
use crate::markup::visible_text;
use crate::model::Prompt;
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip, falling back to xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        pipe_to("xclip", &["-selection", "clipboard"], text)
            .or_else(|_| pipe_to("xsel", &["--clipboard", "--input"], text))
            .map_err(|e| PromptError::Api(format!("{}. Install xclip or xsel.", e)))
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(PromptError::Api(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| PromptError::Api(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| PromptError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| PromptError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(PromptError::Api(format!("{} exited with error", program)))
    }
}

/// The text a prompt puts on the clipboard: its content as the reader sees it.
pub fn format_for_clipboard(prompt: &Prompt) -> String {
    visible_text(&prompt.content).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PromptId;

    #[test]
    fn test_format_for_clipboard_plain() {
        let prompt = Prompt::new(PromptId::new("1"), "T".into(), "Some content".into());
        assert_eq!(format_for_clipboard(&prompt), "Some content");
    }

    #[test]
    fn test_format_for_clipboard_strips_markup() {
        let prompt = Prompt::new(
            PromptId::new("1"),
            "T".into(),
            "<div>Line one</div><div>Line &amp; two</div>".into(),
        );
        assert_eq!(format_for_clipboard(&prompt), "Line one\nLine & two");
    }
}
