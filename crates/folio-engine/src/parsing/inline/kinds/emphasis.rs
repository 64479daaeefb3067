/// Single-asterisk emphasis `*text*`.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: char = '*';

    /// Returns the inner text if the whole of `s` is one `*text*` run.
    ///
    /// The inner text must be non-empty and contain no further asterisks, so
    /// `**bold**` and `*a*b*` do not qualify.
    pub fn wrapped(s: &str) -> Option<&str> {
        let inner = s.strip_prefix(Self::STAR)?.strip_suffix(Self::STAR)?;
        if inner.is_empty() || inner.contains(Self::STAR) {
            return None;
        }
        Some(inner)
    }
}
