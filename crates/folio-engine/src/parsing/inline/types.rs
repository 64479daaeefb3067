use crate::parsing::span::Span;

/// A backtick code span found in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpanMatch {
    /// Full span including backticks.
    pub full: Span,
    /// Content between the backticks. Never empty.
    pub inner: Span,
}

/// A `[text](url)` link, or the `[alt](url)` tail of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkMatch {
    /// Full span including all delimiters (and the `!` for images).
    pub full: Span,
    /// Link text or image alt text.
    pub text: Span,
    /// Destination between the parentheses. Never empty.
    pub url: Span,
}
