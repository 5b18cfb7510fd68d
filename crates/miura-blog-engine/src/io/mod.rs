use crate::models::Post;
use crate::portable_text::Document;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A CMS export holds either a list of posts or a single post
#[derive(Deserialize)]
#[serde(untagged)]
enum PostsExport {
    Many(Vec<Post>),
    One(Box<Post>),
}

/// Resolve an input path against the export directory, if one is configured
pub fn resolve(path: &Path, export_dir: Option<&Path>) -> PathBuf {
    match export_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

fn read_to_string(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Parse a portable text document from JSON, naming `origin` in errors
pub fn parse_document(json: &str, origin: &Path) -> Result<Document, IoError> {
    serde_json::from_str(json).map_err(|source| IoError::Json {
        path: origin.to_path_buf(),
        source,
    })
}

/// Read a portable text document (a JSON array of blocks)
pub fn read_document(path: &Path) -> Result<Document, IoError> {
    let content = read_to_string(path)?;
    parse_document(&content, path)
}

/// Write a document as JSON, pretty-printed unless `compact`
pub fn write_document(path: &Path, blocks: &Document, compact: bool) -> Result<(), IoError> {
    let json = to_json(blocks, compact).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, json).map_err(IoError::Io)
}

pub fn to_json(blocks: &Document, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(blocks)
    } else {
        serde_json::to_string_pretty(blocks)
    }
}

/// Parse posts from JSON holding either an array of posts or a single post
pub fn parse_posts(json: &str, origin: &Path) -> Result<Vec<Post>, IoError> {
    let export: PostsExport = serde_json::from_str(json).map_err(|source| IoError::Json {
        path: origin.to_path_buf(),
        source,
    })?;
    Ok(match export {
        PostsExport::Many(posts) => posts,
        PostsExport::One(post) => vec![*post],
    })
}

/// Read posts exported from the CMS
pub fn read_posts(path: &Path) -> Result<Vec<Post>, IoError> {
    let content = read_to_string(path)?;
    parse_posts(&content, path)
}
