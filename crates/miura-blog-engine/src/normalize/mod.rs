//! # Block Normalizer
//!
//! Repairs paragraphs the CMS split in the wrong place, so that a closing
//! `」`, a lone `！` or a few trailing characters end up as a paragraph of
//! their own.
//!
//! ## Phases
//!
//! 1. **Classification** (`classify`): each paragraph's text is reduced to a
//!    [`TextClass`] holding only local facts (punctuation-only, first visible
//!    character, visible length, quote balance).
//!
//! 2. **Merge pass** ([`normalize`]): a single left-to-right pass builds the
//!    output. A paragraph whose class yields a [`MergeReason`] against the
//!    paragraph at the tail of the output is absorbed into it; anything else
//!    is cleaned (`cleanup`) and appended.
//!
//! ## Key Invariants
//!
//! - Only `normal` text blocks merge, and only into a `normal` text block that
//!   is the last entry of the output: a heading or image in between blocks it.
//! - Visible characters are never added, removed or reordered; only
//!   whitespace and block boundaries move.
//! - The input is never mutated.
//! - `normalize(&normalize(x)) == normalize(x)`.

pub mod classify;
pub mod cleanup;
pub mod invariants;
pub mod punct;


use log::{debug, trace};
use serde_json::Value;

use crate::portable_text::{Block, Span, TextBlock};

pub use classify::{MergeReason, TextClass};
pub use punct::Punct;

/// Merges dangling punctuation paragraphs into the paragraph they belong to
/// and tidies whitespace in the paragraphs that remain.
///
/// Headings, quotes and non-text blocks are passed through untouched.
pub fn normalize(blocks: &[Block]) -> Vec<Block> {
    let mut pass = MergePass::with_capacity(blocks.len());
    for block in blocks {
        match block {
            Block::Text(text) if text.is_paragraph() => pass.push_paragraph(text),
            other => pass.push_opaque(other.clone()),
        }
    }
    pass.finish()
}

/// Output under construction.
///
/// `classes[i]` is the class of `out[i]` when it is a paragraph. The tail of
/// both vectors is the only state a merge decision looks at.
struct MergePass {
    out: Vec<Block>,
    classes: Vec<Option<TextClass>>,
}

impl MergePass {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            classes: Vec::with_capacity(capacity),
        }
    }

    fn push_opaque(&mut self, block: Block) {
        self.out.push(block);
        self.classes.push(None);
    }

    fn push_paragraph(&mut self, block: &TextBlock) {
        let class = TextClass::of(&block.plain_text());
        trace!("paragraph {:?}: {class:?}", block.key());

        if let Some(Some(tail)) = self.classes.last()
            && let Some(reason) = class.merge_reason(tail)
        {
            debug!("merging {:?} into previous paragraph ({reason:?})", block.key());
            self.absorb_into_tail(cleanup::trim_each(block.spans()), block, class);
            self.settle_tail();
            return;
        }

        let mut cleaned = block.clone();
        if let Some(children) = &block.children {
            cleaned.children = Some(cleanup::clean_spans(children));
        }
        self.out.push(Block::Text(cleaned));
        self.classes.push(Some(class));
    }

    /// Once the tail has grown it may itself qualify for merging into the
    /// paragraph before it; keep folding until it doesn't.
    fn settle_tail(&mut self) {
        while let [.., Some(prev), Some(tail)] = self.classes.as_slice() {
            let Some(reason) = tail.merge_reason(prev) else {
                break;
            };
            let (Some(Block::Text(block)), Some(Some(class))) = (self.out.pop(), self.classes.pop())
            else {
                break;
            };
            debug!("folding {:?} into previous paragraph ({reason:?})", block.key());
            self.absorb_into_tail(cleanup::trim_edges(block.spans()), &block, class);
        }
    }

    fn absorb_into_tail(&mut self, spans: Vec<Span>, source: &TextBlock, class: TextClass) {
        if let (Some(Block::Text(tail)), Some(Some(tail_class))) =
            (self.out.last_mut(), self.classes.last_mut())
        {
            append_spans(tail, spans, source);
            tail_class.absorb(&class);
        }
    }

    fn finish(self) -> Vec<Block> {
        self.out
    }
}

/// Appends `spans` to `target`, carries over the mark definitions they may
/// reference and re-cleans the result so the joint is tidied too.
fn append_spans(target: &mut TextBlock, spans: Vec<Span>, source: &TextBlock) {
    let mut children = target.children.take().unwrap_or_default();
    children.extend(spans);
    target.children = Some(cleanup::clean_spans(&children));

    if let Some(defs) = source.mark_defs.as_deref().filter(|defs| !defs.is_empty()) {
        let target_defs = target.mark_defs.get_or_insert_with(Vec::new);
        for def in defs {
            let key = def.get("_key").and_then(Value::as_str);
            let known = key.is_some_and(|key| {
                target_defs
                    .iter()
                    .any(|d| d.get("_key").and_then(Value::as_str) == Some(key))
            });
            if !known {
                target_defs.push(def.clone());
            }
        }
    }
}
