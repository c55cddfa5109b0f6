/// A word or line together with its exact span in the source document.
///
/// `start` and `end` are byte offsets such that `source[start..end] == text`.
/// Tokens produced by a tokenizer are non-overlapping and strictly increasing
/// in `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Token<'a> {
    pub(crate) const fn new(text: &'a str, start: usize) -> Self {
        Self {
            text,
            start,
            end: start + text.len(),
        }
    }

    #[must_use]
    pub const fn text(&self) -> &'a str { self.text }

    /// Byte offset of the first character of the token.
    #[must_use]
    pub const fn start(&self) -> usize { self.start }

    /// Byte offset one past the last character of the token.
    #[must_use]
    pub const fn end(&self) -> usize { self.end }

    #[must_use]
    pub const fn len(&self) -> usize { self.end - self.start }

    #[must_use]
    pub const fn is_empty(&self) -> bool { self.start == self.end }
}
