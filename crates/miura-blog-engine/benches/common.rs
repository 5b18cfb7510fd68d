// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use miura_blog_engine::{Block, Document, Span, TextBlock};
use serde_json::json;

#[allow(dead_code)]
pub fn paragraph(text: &str) -> Block {
    TextBlock::paragraph(text).into()
}

/// A post body as the CMS tends to split it: quotes and exclamations cut
/// off into paragraphs of their own, with headings and images in between.
#[allow(dead_code)]
pub fn generate_split_document(sections: usize) -> Document {
    let mut blocks = Vec::new();

    for section in 0..sections {
        blocks.push(TextBlock::new("h2", vec![Span::new(format!("ポイント {section}"))]).into());
        blocks.push(paragraph("「今日の海況はどうでしたか"));
        blocks.push(paragraph("」"));
        blocks.push(paragraph("透明度は10m、水温は20度でした  。\n\n\n\n"));
        blocks.push(paragraph("！"));
        blocks.push(paragraph("また潜りたい"));
        blocks.push(paragraph("です。"));
        blocks.push(Block::Other(json!({
            "_type": "image",
            "asset": {"_ref": format!("image-{section}-800x600-jpg")}
        })));
    }

    blocks
}

/// Long paragraphs that never merge, to measure the cost of cleanup alone.
#[allow(dead_code)]
pub fn generate_clean_document(paragraphs: usize) -> Document {
    (0..paragraphs)
        .map(|i| paragraph(&format!("{i}本目のダイビングは城ヶ島のビーチから  エントリーしました。")))
        .collect()
}
