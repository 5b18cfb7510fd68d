use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An inline child of a text block.
///
/// Text runs carry `text` and `marks`. Inline objects (anything authored with
/// a non-`span` `_type`) usually have no `text`; every field we don't model is
/// kept in `extra` and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Decorator names (`strong`, `em`) or keys into the block's `markDefs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Span {
    pub const TYPE: &'static str = "span";

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: Some(Self::TYPE.to_string()),
            text: Some(text.into()),
            marks: Some(Vec::new()),
            extra: Map::new(),
        }
    }

    pub fn with_marks<I, S>(text: impl Into<String>, marks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            marks: Some(marks.into_iter().map(Into::into).collect()),
            ..Self::new(text)
        }
    }

    /// The span's text, empty for inline objects.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn marks(&self) -> &[String] {
        self.marks.as_deref().unwrap_or(&[])
    }

    /// True for plain text runs (`_type` is `span` or absent).
    pub fn is_text_run(&self) -> bool {
        self.kind.as_deref().is_none_or(|kind| kind == Self::TYPE)
    }

    /// Copy of this span with `text` replaced; inline objects are returned as-is.
    pub fn with_text(&self, text: String) -> Self {
        match self.text {
            Some(_) => Self {
                text: Some(text),
                ..self.clone()
            },
            None => self.clone(),
        }
    }
}
