/// Japanese punctuation the normalizer knows about.
///
/// All character knowledge lives here so the classifier and the cleanup
/// rules read from the same sets.
pub struct Punct;

impl Punct {
    /// Characters a dangling fragment may consist of.
    pub const FRAGMENT: &'static [char] = &[
        '」', '『', '「', '。', '、', '！', '？', '』', '（', '）', '【', '】', '"',
    ];

    /// Characters that continue a sentence and can't start one.
    ///
    /// Whitespace directly before any of these is deleted during cleanup.
    pub const CONTINUATION: &'static [char] = &['」', '！', '？', '。', '、', '』'];

    /// Sentence-final characters that mark a short fragment.
    pub const CLOSING: &'static [char] = &['」', '！', '？', '。'];

    pub const OPEN_QUOTES: &'static [char] = &['「', '『'];
    pub const CLOSE_QUOTES: &'static [char] = &['」', '』'];

    /// Longest text, in visible characters, that still counts as a short fragment.
    pub const SHORT_FRAGMENT_MAX: usize = 5;

    pub fn is_fragment(c: char) -> bool {
        Self::FRAGMENT.contains(&c)
    }

    pub fn is_continuation(c: char) -> bool {
        Self::CONTINUATION.contains(&c)
    }

    pub fn is_closing(c: char) -> bool {
        Self::CLOSING.contains(&c)
    }

    pub fn is_open_quote(c: char) -> bool {
        Self::OPEN_QUOTES.contains(&c)
    }

    pub fn is_close_quote(c: char) -> bool {
        Self::CLOSE_QUOTES.contains(&c)
    }
}
