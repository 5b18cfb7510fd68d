use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::tags;
use crate::normalize::normalize;
use crate::portable_text::{self, Document};

/// A blog post as returned by the CMS list and detail queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Image reference with its resolved asset, passed through as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Document,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(rename = "_createdAt")]
    pub created_at: String,
    /// Tags detected from the title and body
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auto_tags: Vec<String>,
}

impl Post {
    /// Publication timestamp, falling back to creation time
    pub fn date(&self) -> &str {
        self.published_at.as_deref().unwrap_or(&self.created_at)
    }

    pub fn body_text(&self) -> String {
        portable_text::plain_text(&self.body)
    }

    /// Copy of this post with its body normalized
    pub fn normalized(&self) -> Self {
        Self {
            body: normalize(&self.body),
            ..self.clone()
        }
    }

    /// Fills `auto_tags` from the title and body text
    pub fn detect_tags(&mut self) {
        self.auto_tags = tags::detect(&self.title, &self.body_text());
    }
}

/// Newest first, by publication date (creation date when unpublished)
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date().cmp(a.date()));
}
