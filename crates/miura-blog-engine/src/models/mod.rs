pub mod post;

pub use post::{Post, sort_newest_first};
