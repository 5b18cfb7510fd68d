use std::sync::OnceLock;

use regex::Regex;

use crate::portable_text::{Block, TextBlock};

/// Average reading speed for Japanese prose, in characters per minute.
pub const DEFAULT_CHARS_PER_MINUTE: u32 = 500;

fn html_tag() -> &'static Regex {
    static HTML_TAG: OnceLock<Regex> = OnceLock::new();
    HTML_TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"))
}

/// Minutes needed to read `text`, rounded up, at least one.
///
/// HTML tags are ignored; every other character, whitespace included, counts.
/// Empty text takes no time at all.
pub fn minutes(text: &str, chars_per_minute: u32) -> u32 {
    if text.is_empty() {
        return 0;
    }
    let clean = html_tag().replace_all(text, "");
    let count = clean.chars().count() as u32;
    count.div_ceil(chars_per_minute.max(1)).max(1)
}

/// Minutes needed to read a document's text blocks.
///
/// Each block contributes its text on its own line; non-text blocks
/// contribute an empty line.
pub fn for_document(blocks: &[Block], chars_per_minute: u32) -> u32 {
    if blocks.is_empty() {
        return 1;
    }
    let text = blocks
        .iter()
        .map(|b| b.as_text().map(TextBlock::plain_text).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n");
    minutes(&text, chars_per_minute)
}

/// Display string, e.g. `約3分で読めます`.
pub fn format(minutes: u32) -> String {
    format!("約{minutes}分で読めます")
}
