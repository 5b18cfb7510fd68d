//! # Portable Text
//!
//! The rich-text document model exchanged between the CMS and the renderer.
//!
//! A document is an ordered list of [`Block`]s. Text blocks (paragraphs,
//! headings, quotes) are modelled as [`TextBlock`] with [`Span`] children;
//! every other block kind is carried as raw JSON. Fields we don't model are
//! preserved, so a document read from the CMS and written back without
//! changes serializes to the same JSON value.

pub mod block;
pub mod span;

pub use block::{Block, TextBlock};
pub use span::Span;

/// An ordered sequence of blocks in reading order.
pub type Document = Vec<Block>;

/// Plain text of every text block, joined with a single space.
///
/// Only `span` children count; inline objects are skipped.
pub fn plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter_map(Block::as_text)
        .map(|block| {
            block
                .spans()
                .iter()
                .filter(|span| span.is_text_run())
                .map(Span::text)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a JSON array of blocks.
pub fn from_json(json: &str) -> serde_json::Result<Document> {
    serde_json::from_str(json)
}
