use super::punct::Punct;

/// Why a paragraph is absorbed into the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeReason {
    /// Nothing but fragment punctuation (or nothing at all).
    PunctuationOnly,
    /// Starts with punctuation that can only continue a sentence.
    OpensWithContinuation,
    /// A few characters including a sentence-final mark.
    ShortFragment,
    /// Closes a quote the previous paragraph left open.
    QuoteCarryover,
}

/// Local facts about a paragraph's text.
///
/// Whitespace is ignored throughout, so deleting whitespace never changes a
/// classification. Classes of concatenated texts compose with [`absorb`],
/// which lets the normalizer keep the class of a growing paragraph without
/// rescanning it.
///
/// [`absorb`]: TextClass::absorb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextClass {
    first_visible: Option<char>,
    visible: usize,
    fragment_chars_only: bool,
    has_closing: bool,
    has_open_quote: bool,
    has_close_quote: bool,
}

impl Default for TextClass {
    fn default() -> Self {
        Self {
            first_visible: None,
            visible: 0,
            fragment_chars_only: true,
            has_closing: false,
            has_open_quote: false,
            has_close_quote: false,
        }
    }
}

impl TextClass {
    /// Classifies a paragraph's concatenated span text.
    pub fn of(text: &str) -> Self {
        let mut class = Self::default();
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            class.first_visible.get_or_insert(c);
            class.visible += 1;
            class.fragment_chars_only &= Punct::is_fragment(c);
            class.has_closing |= Punct::is_closing(c);
            class.has_open_quote |= Punct::is_open_quote(c);
            class.has_close_quote |= Punct::is_close_quote(c);
        }
        class
    }

    /// Updates this class to describe `self`'s text followed by `other`'s.
    pub fn absorb(&mut self, other: &TextClass) {
        if self.first_visible.is_none() {
            self.first_visible = other.first_visible;
        }
        self.visible += other.visible;
        self.fragment_chars_only &= other.fragment_chars_only;
        self.has_closing |= other.has_closing;
        self.has_open_quote |= other.has_open_quote;
        self.has_close_quote |= other.has_close_quote;
    }

    pub fn is_punctuation_only(&self) -> bool {
        self.fragment_chars_only
    }

    pub fn opens_with_continuation(&self) -> bool {
        self.first_visible.is_some_and(Punct::is_continuation)
    }

    pub fn is_short_fragment(&self) -> bool {
        self.visible <= Punct::SHORT_FRAGMENT_MAX && self.has_closing
    }

    /// An opening quote with no closing quote anywhere in the text.
    pub fn leaves_quote_open(&self) -> bool {
        self.has_open_quote && !self.has_close_quote
    }

    /// Whether this paragraph should be absorbed into `prev`, the paragraph
    /// directly before it in the output.
    pub fn merge_reason(&self, prev: &TextClass) -> Option<MergeReason> {
        if self.is_punctuation_only() {
            Some(MergeReason::PunctuationOnly)
        } else if self.opens_with_continuation() {
            Some(MergeReason::OpensWithContinuation)
        } else if self.is_short_fragment() {
            Some(MergeReason::ShortFragment)
        } else if prev.leaves_quote_open() && self.has_close_quote {
            Some(MergeReason::QuoteCarryover)
        } else {
            None
        }
    }
}
