/// A cursor for byte-by-byte inline scanning with position tracking.
///
/// Every delimiter the scanners look for is ASCII, so positions the cursor
/// stops at are always valid `str` boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes().get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances until the current byte is `delim` or input ends.
    ///
    /// Returns true if stopped on `delim`.
    pub fn eat_until(&mut self, delim: u8) -> bool {
        while let Some(b) = self.peek() {
            if b == delim {
                return true;
            }
            self.bump();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("![alt](url)");
        assert!(cur.starts_with(b"!["));
        assert!(!cur.starts_with(b"]("));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("ab");
        assert!(!cur.starts_with(b"abcdef"));

        cur.bump();
        assert!(!cur.starts_with(b"bc"));
        assert!(cur.starts_with(b"b"));
    }

    #[test]
    fn starts_with_past_end_is_false() {
        let mut cur = Cursor::new("hi");
        while cur.bump().is_some() {}
        assert!(cur.eof());
        assert!(!cur.starts_with(b"h"));
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn eat_until_stops_on_delimiter() {
        let mut cur = Cursor::new("abc]def");
        assert!(cur.eat_until(b']'));
        assert_eq!(cur.pos(), 3);
        assert_eq!(cur.peek(), Some(b']'));
    }

    #[test]
    fn eat_until_runs_to_end_without_delimiter() {
        let mut cur = Cursor::new("abc");
        assert!(!cur.eat_until(b')'));
        assert!(cur.eof());
    }

    #[test]
    fn eat_until_passes_multibyte_text() {
        let mut cur = Cursor::new("héllo wörld)");
        assert!(cur.eat_until(b')'));
        assert_eq!(&cur.s[..cur.pos()], "héllo wörld");
    }
}
