use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// `<!--` up to the nearest `-->`, across newlines.
static HTML_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Removes every `<!-- ... -->` span from the document.
///
/// Matching is non-greedy, so each comment ends at the first `-->` after its
/// opener; there is no escaping. An unterminated `<!--` is left as text.
/// Removing a comment can splice a new `<!--`/`-->` pair together
/// (`<!<!--x-->-- y -->`), so stripping repeats until nothing matches and the
/// result is always comment-free.
///
/// Cost is one linear pass per level of such splicing. Every pass that matches
/// removes at least seven bytes (`<!---->`), so an `n`-byte document
/// takes at most `n / 7 + 1` passes; ordinary documents take one.
pub fn strip_comments(markdown: &str) -> Cow<'_, str> {
    let mut out = match HTML_COMMENT.replace_all(markdown, "") {
        Cow::Borrowed(s) => return Cow::Borrowed(s),
        Cow::Owned(s) => s,
    };

    loop {
        let next = match HTML_COMMENT.replace_all(&out, "") {
            Cow::Borrowed(_) => break,
            Cow::Owned(next) => next,
        };
        out = next;
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("no comments here", "no comments here")]
    #[case("a<!-- note -->b", "ab")]
    #[case("<!-- one -->x<!-- two -->", "x")]
    #[case("keep\n<!--\nmulti\nline\n-->\nthis", "keep\n\nthis")]
    #[case("a <!-- first --> b -->", "a  b -->")]
    #[case("text <!-- never closed", "text <!-- never closed")]
    #[case("<!<!--x-->-- y -->z", "z")]
    #[case("", "")]
    fn strips_comment_spans(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_comments(input), expected);
    }

    #[test]
    fn borrows_when_nothing_to_strip() {
        assert!(matches!(strip_comments("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn deeply_spliced_comments_strip_to_nothing() {
        let depth = 200;
        let input = format!("{}<!--x-->{}", "<!".repeat(depth), "-- -->".repeat(depth));

        assert_eq!(strip_comments(&input), "");
        assert_eq!(strip_comments(&format!("a{input}b")), "ab");
    }

    #[test]
    fn stripping_twice_equals_once() {
        let once = strip_comments("<!<!--x-->-- y --> body <!-- z -->");
        let twice = strip_comments(&once);
        assert_eq!(once, twice);
    }
}
