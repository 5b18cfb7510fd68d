use crate::portable_text::Block;

use super::normalize;

/// Every non-whitespace character of every text block, in reading order.
pub fn visible_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter_map(Block::as_text)
        .flat_map(|block| block.spans().iter())
        .flat_map(|span| span.text().chars())
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Validates normalizer output against its input.
///
/// Asserts that:
/// - No visible character was added, removed or reordered
/// - Blocks were only ever merged, never split
/// - Blocks other than paragraphs came through unchanged and in order
/// - Normalizing the output again changes nothing
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(input: &[Block], output: &[Block]) {
    assert_eq!(
        visible_text(input),
        visible_text(output),
        "visible text changed by normalization"
    );
    assert!(
        output.len() <= input.len(),
        "normalization produced more blocks ({}) than it was given ({})",
        output.len(),
        input.len()
    );

    let passthrough = |blocks: &[Block]| -> Vec<Block> {
        blocks.iter().filter(|b| !b.is_paragraph()).cloned().collect()
    };
    assert_eq!(
        passthrough(input),
        passthrough(output),
        "non-paragraph blocks were altered or reordered"
    );

    let again = normalize(output);
    assert_eq!(again, output, "normalization is not idempotent");
}

/// Number of `normal` paragraphs in a document.
pub fn paragraph_count(blocks: &[Block]) -> usize {
    blocks.iter().filter(|b| b.is_paragraph()).count()
}
