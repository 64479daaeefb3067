use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Image, Link},
    types::{CodeSpanMatch, LinkMatch},
};

/// Finds every code span in `s`, left to right.
///
/// An empty pair of backticks is not a span; scanning resumes at the second
/// tick, which may open a span of its own. An unclosed tick is plain text.
pub fn code_spans(s: &str) -> Vec<CodeSpanMatch> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];

    while !cur.eof() {
        if let Some(m) = try_parse_code_span(&mut cur) {
            out.push(m);
            continue;
        }
        cur.bump();
    }

    out
}

/// Finds the leftmost `[text](url)` link in `s`.
///
/// Link text runs to the first `]` and must be non-empty; the destination
/// runs to the first `)` and must be non-empty.
pub fn first_link(s: &str) -> Option<LinkMatch> {
    let mut cur = Cursor::new(s);

    while !cur.eof() {
        if let Some(m) = try_parse_link(&mut cur, false) {
            return Some(m);
        }
        cur.bump();
    }

    None
}

/// Matches only when the whole of `s` is one `![alt](url)` image.
///
/// Alt text may be empty; the destination may not.
pub fn whole_image(s: &str) -> Option<LinkMatch> {
    let mut cur = Cursor::new(s);
    if !cur.starts_with(Image::OPEN) {
        return None;
    }

    let start = cur.pos();
    cur.bump(); // !
    let link = try_parse_link(&mut cur, true)?;
    if !cur.eof() {
        return None;
    }

    Some(LinkMatch {
        full: Span {
            start,
            end: link.full.end,
        },
        ..link
    })
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span isn't closed, or if it is
/// empty. On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<CodeSpanMatch> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    if !cur.eat_until(CodeSpan::TICK) || cur.pos() == inner_start {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump(); // closing `

    Some(CodeSpanMatch {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

/// Attempts to parse `[text](url)` starting at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>, allow_empty_text: bool) -> Option<LinkMatch> {
    if cur.peek() != Some(Link::TEXT_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let parsed = parse_link_parts(cur, allow_empty_text);
    if parsed.is_none() {
        *cur = saved;
    }
    parsed
}

fn parse_link_parts(cur: &mut Cursor<'_>, allow_empty_text: bool) -> Option<LinkMatch> {
    let start = cur.pos();
    cur.bump(); // [
    let text_start = cur.pos();
    if !cur.eat_until(Link::TEXT_CLOSE) {
        return None;
    }
    let text = Span {
        start: text_start,
        end: cur.pos(),
    };
    if text.is_empty() && !allow_empty_text {
        return None;
    }
    cur.bump(); // ]

    if cur.peek() != Some(Link::URL_OPEN) {
        return None;
    }
    cur.bump(); // (
    let url_start = cur.pos();
    if !cur.eat_until(Link::URL_CLOSE) {
        return None;
    }
    let url = Span {
        start: url_start,
        end: cur.pos(),
    };
    if url.is_empty() {
        return None;
    }
    cur.bump(); // )

    Some(LinkMatch {
        full: Span {
            start,
            end: cur.pos(),
        },
        text,
        url,
    })
}
