use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::span::Span;

/// A top-level node of a portable text document.
///
/// Only text blocks (`_type == "block"`) are modelled. Everything else, and
/// any text block whose fields don't have the expected shape, is kept as the
/// raw JSON value so it can be written back exactly as it was read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Block {
    Text(TextBlock),
    Other(Value),
}

impl Block {
    /// Classifies a raw JSON value, never failing.
    pub fn from_value(value: Value) -> Self {
        if value.get("_type").and_then(Value::as_str) != Some(TextBlock::TYPE) {
            return Block::Other(value);
        }
        match TextBlock::deserialize(&value) {
            Ok(block) => Block::Text(block),
            Err(e) => {
                log::debug!("keeping malformed text block opaque: {e}");
                Block::Other(value)
            }
        }
    }

    pub fn as_text(&self) -> Option<&TextBlock> {
        match self {
            Block::Text(block) => Some(block),
            Block::Other(_) => None,
        }
    }

    /// The `_type` tag, if the block has one.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Block::Text(block) => Some(&block.kind),
            Block::Other(value) => value.get("_type").and_then(Value::as_str),
        }
    }

    /// True for text blocks styled as ordinary paragraphs.
    pub fn is_paragraph(&self) -> bool {
        self.as_text().is_some_and(TextBlock::is_paragraph)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Block::from_value)
    }
}

impl From<TextBlock> for Block {
    fn from(block: TextBlock) -> Self {
        Block::Text(block)
    }
}

/// A paragraph, heading or quote: a styled run of spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Span>>,
    /// Link and annotation definitions referenced from span marks by `_key`.
    #[serde(
        rename = "markDefs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mark_defs: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TextBlock {
    pub const TYPE: &'static str = "block";
    /// Style assumed when a block carries none.
    pub const NORMAL: &'static str = "normal";

    pub fn new(style: impl Into<String>, children: Vec<Span>) -> Self {
        Self {
            kind: Self::TYPE.to_string(),
            style: Some(style.into()),
            children: Some(children),
            mark_defs: None,
            extra: Map::new(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(Self::NORMAL, vec![Span::new(text)])
    }

    pub fn style(&self) -> &str {
        self.style.as_deref().unwrap_or(Self::NORMAL)
    }

    pub fn is_paragraph(&self) -> bool {
        self.style() == Self::NORMAL
    }

    /// Heading level for `h1`..`h6` styles.
    pub fn heading_level(&self) -> Option<u8> {
        let level: u8 = self.style().strip_prefix('h')?.parse().ok()?;
        (1..=6).contains(&level).then_some(level)
    }

    pub fn spans(&self) -> &[Span] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Concatenated text of all children, in order.
    pub fn plain_text(&self) -> String {
        self.spans().iter().map(Span::text).collect()
    }

    /// The `_key` assigned by the CMS, if any.
    pub fn key(&self) -> Option<&str> {
        self.extra.get("_key").and_then(Value::as_str)
    }
}
