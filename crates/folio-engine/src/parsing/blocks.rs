//! # Block Splitting
//!
//! Two-level splitting of the cleaned document into raw `{heading, body}`
//! records. The splitter knows nothing about section or item types; field
//! extraction happens in `intro` and `items`.
//!
//! - Level 1: lines starting with `## ` open a named section. Text before the
//!   first one is the intro.
//! - Level 2: inside a section body, lines starting with `### ` open an item.

use std::sync::LazyLock;

use regex::Regex;

/// A `## ` marker at the start of a line. `###` does not match: the third
/// character must be the space.
static SECTION_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## ").unwrap());

/// A `### ` marker at the start of a line.
static ITEM_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### ").unwrap());

/// A heading line and the text below it, borrowed from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'a> {
    /// First line of the fragment, trimmed.
    pub heading: &'a str,
    /// Everything after the first newline; empty if there is none.
    pub body: &'a str,
}

impl<'a> RawBlock<'a> {
    /// Splits a fragment at its first newline.
    pub fn from_fragment(fragment: &'a str) -> Self {
        match fragment.split_once('\n') {
            Some((heading, body)) => Self {
                heading: heading.trim(),
                body,
            },
            None => Self {
                heading: fragment.trim(),
                body: "",
            },
        }
    }

    /// Body lines, trimmed, with blank lines dropped.
    pub fn body_lines(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        let body = self.body;
        body.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

/// The document cut at its `##` headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDocument<'a> {
    /// Untrimmed text before the first `## ` line.
    pub intro: &'a str,
    /// One block per `## ` line, bodies trimmed, in document order.
    pub sections: Vec<RawBlock<'a>>,
}

/// Splits a document on `## ` line starts.
pub fn split_sections(text: &str) -> SplitDocument<'_> {
    let mut parts = SECTION_MARKER.split(text);
    let intro = parts.next().unwrap_or_default();
    let sections = parts
        .map(|part| {
            let block = RawBlock::from_fragment(part);
            RawBlock {
                body: block.body.trim(),
                ..block
            }
        })
        .collect();

    SplitDocument { intro, sections }
}

/// Splits a section body on `### ` line starts, dropping blank fragments.
///
/// Non-blank text before the first `### ` is kept as an item of its own,
/// headed by its first line.
pub fn split_items(body: &str) -> Vec<RawBlock<'_>> {
    ITEM_MARKER
        .split(body)
        .filter(|fragment| !fragment.trim().is_empty())
        .map(RawBlock::from_fragment)
        .collect()
}
