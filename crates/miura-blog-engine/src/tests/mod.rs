use std::fs;
use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;

use crate::portable_text::{Block, Span, TextBlock};

/// Create a temporary export directory for I/O tests
pub fn create_test_export_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Write a test file into the export directory
pub fn create_test_file(export_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = export_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// A `normal` paragraph with a single span
pub fn paragraph(text: &str) -> Block {
    TextBlock::paragraph(text).into()
}

/// A `normal` paragraph split over several spans
pub fn paragraph_spans(texts: &[&str]) -> Block {
    TextBlock::new(TextBlock::NORMAL, texts.iter().map(|t| Span::new(*t)).collect()).into()
}

pub fn heading(style: &str, text: &str) -> Block {
    TextBlock::new(style, vec![Span::new(text)]).into()
}

pub fn image() -> Block {
    Block::Other(json!({"_type": "image", "asset": {"_ref": "image-abc-800x600-jpg"}}))
}

/// Plain text of each block, `None` for non-text blocks
pub fn texts(blocks: &[Block]) -> Vec<Option<String>> {
    blocks
        .iter()
        .map(|b| b.as_text().map(TextBlock::plain_text))
        .collect()
}

/// Plain text of each block, for documents made of text blocks only
pub fn paragraph_texts(blocks: &[Block]) -> Vec<String> {
    texts(blocks).into_iter().map(Option::unwrap_or_default).collect()
}
