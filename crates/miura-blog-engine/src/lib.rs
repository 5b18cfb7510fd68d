pub mod analysis;
pub mod io;
pub mod models;
pub mod normalize;
pub mod portable_text;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use models::Post;
pub use normalize::normalize;
pub use portable_text::{Block, Document, Span, TextBlock};
