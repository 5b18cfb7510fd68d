use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::portable_text::Block;

/// Heading levels listed in the table of contents.
pub const TOC_LEVELS: [u8; 2] = [2, 3];

/// One heading in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Anchor id, unique within the document.
    pub id: String,
    pub text: String,
    pub level: u8,
}

fn slug_patterns() -> &'static (Regex, Regex, Regex) {
    static PATTERNS: OnceLock<(Regex, Regex, Regex)> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        (
            Regex::new(r"[^\w\s-]").expect("Invalid special character regex"),
            Regex::new(r"\s+").expect("Invalid whitespace regex"),
            Regex::new(r"-+").expect("Invalid hyphen regex"),
        )
    })
}

/// Anchor slug for a heading.
///
/// Lowercases, drops everything but word characters, whitespace and hyphens,
/// turns whitespace into hyphens and squeezes hyphen runs. Word characters
/// are Unicode-aware, so Japanese headings keep their text.
pub fn slugify(text: &str) -> String {
    let (special, whitespace, hyphens) = slug_patterns();
    let lower = text.trim().to_lowercase();
    let stripped = special.replace_all(&lower, "");
    let hyphenated = whitespace.replace_all(&stripped, "-");
    hyphens
        .replace_all(&hyphenated, "-")
        .trim_matches('-')
        .to_string()
}

/// Table of contents for the `h2`/`h3` headings of a document.
///
/// Headings whose slug is empty get `heading-{n}`; repeated slugs get a
/// `-2`, `-3`, … suffix so every id is unique.
pub fn extract(blocks: &[Block]) -> Vec<TocEntry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for block in blocks.iter().filter_map(Block::as_text) {
        let Some(level) = block.heading_level().filter(|l| TOC_LEVELS.contains(l)) else {
            continue;
        };
        let text = block.plain_text().trim().to_string();
        let mut base = slugify(&text);
        if base.is_empty() {
            base = format!("heading-{}", entries.len() + 1);
        }

        let mut id = base.clone();
        let mut n = 2;
        while !seen.insert(id.clone()) {
            id = format!("{base}-{n}");
            n += 1;
        }

        entries.push(TocEntry { id, text, level });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{heading, paragraph};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Gear Check", "gear-check")]
    #[case("  What's   new?  ", "whats-new")]
    #[case("Step 1 -- Entry", "step-1-entry")]
    #[case("城ヶ島 ビーチ情報", "城ヶ島-ビーチ情報")]
    #[case("「！？」", "")]
    fn slugs(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(slugify(text), expected);
    }

    #[test]
    fn extracts_h2_and_h3_only() {
        let doc = vec![
            heading("h1", "Title"),
            heading("h2", "Entry"),
            paragraph("本文"),
            heading("h3", "Exit"),
            heading("h4", "Deep"),
        ];

        let toc = extract(&doc);

        assert_eq!(
            toc,
            vec![
                TocEntry {
                    id: "entry".into(),
                    text: "Entry".into(),
                    level: 2
                },
                TocEntry {
                    id: "exit".into(),
                    text: "Exit".into(),
                    level: 3
                },
            ]
        );
    }

    #[test]
    fn ids_are_unique_and_never_empty() {
        let doc = vec![
            heading("h2", "Q&A"),
            heading("h2", "QA"),
            heading("h2", "「？」"),
            heading("h3", "QA"),
        ];

        let ids: Vec<String> = extract(&doc).into_iter().map(|e| e.id).collect();

        assert_eq!(ids, vec!["qa", "qa-2", "heading-3", "qa-3"]);
    }
}
