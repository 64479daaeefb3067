use std::sync::LazyLock;

use regex::Regex;

use crate::models::IntroSection;

/// A level-one `# Name` heading.
static NAME_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+(.+)$").unwrap());

/// Builds the intro section from the text before the first `##` heading.
///
/// Returns `None` when that text is blank. Otherwise, over the non-blank
/// lines:
/// - a leading `# Name` line gives `name` and is consumed;
/// - the next line gives `subtitle`;
/// - whatever is left is joined with `\n` into `raw`.
pub fn parse_intro(text: &str) -> Option<IntroSection> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();

    let name = lines
        .first()
        .and_then(|first| NAME_HEADING.captures(first.trim_end()))
        .map(|caps| caps[1].trim().to_string());

    let rest = if name.is_some() { &lines[1..] } else { &lines[..] };
    let subtitle = rest.first().map(|l| l.trim().to_string()).unwrap_or_default();
    let raw = rest.get(1..).map(|r| r.join("\n")).unwrap_or_default();

    Some(IntroSection {
        name: name.unwrap_or_default(),
        subtitle,
        raw,
    })
}
