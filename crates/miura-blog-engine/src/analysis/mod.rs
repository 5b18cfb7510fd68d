//! # Content Analysis
//!
//! Pure functions the blog runs over a post's body besides normalization:
//!
//! - **`reading_time`**: reading-time estimate from character count
//! - **`toc`**: heading slugs and the table of contents
//! - **`tags`**: keyword based topic tags and tag popularity
//! - **`seo`**: meta description, keywords and OG strings

pub mod reading_time;
pub mod seo;
pub mod tags;
pub mod toc;

pub use seo::SeoData;
pub use tags::TagCount;
pub use toc::TocEntry;
