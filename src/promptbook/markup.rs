//! Prompt content may carry light markup (it was typed into a rich text field).
//! This module extracts the text a reader would actually see, which is what
//! validation and the clipboard care about.
//!
//! Front ends that take plain text (the command line, the shell) run it through
//! [`escape_text`] first, so characters like `<` survive as typed.

const BREAK_TAGS: &[&str] = &["br", "/p", "/div", "/li"];

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Returns the visible text of `content`: tags removed, line-breaking tags turned
/// into newlines and the common character entities decoded.
pub fn visible_text(content: &str) -> String {
    let mut text = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find('<') {
        text.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('>') {
            Some(end) => {
                if is_break_tag(&after[..end]) {
                    text.push('\n');
                }
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated tag, keep it as literal text
                text.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    text.push_str(rest);

    decode_entities(&text)
}

/// Escapes plain text so that [`visible_text`] gives it back unchanged.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn is_break_tag(tag: &str) -> bool {
    let name = tag
        .trim()
        .trim_end_matches('/')
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    BREAK_TAGS.contains(&name.as_str())
}

fn decode_entities(text: &str) -> String {
    // &amp; is last so "&amp;lt;" decodes to "&lt;" and not "<"
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, ch)| acc.replace(entity, ch))
}
