/// A byte range `[start, end)` into the line being scanned.
///
/// Inline matches store spans rather than copied text; slicing the line with
/// any span reproduces the exact source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Slices `s` with this span.
    ///
    /// Spans produced by the inline scanners always sit on ASCII delimiter
    /// boundaries, so this never splits a UTF-8 sequence.
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }

    /// Returns true if the span covers no bytes.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// Returns true if everything in `s` outside `spans` is whitespace.
///
/// `spans` must be sorted and non-overlapping.
pub fn only_whitespace_outside(s: &str, spans: &[Span]) -> bool {
    let mut last = 0;
    for sp in spans {
        if !s[last..sp.start].trim().is_empty() {
            return false;
        }
        last = sp.end;
    }
    s[last..].trim().is_empty()
}
